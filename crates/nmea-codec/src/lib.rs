mod checksum;
mod sentences;
mod utc;

pub use checksum::{checksum, with_checksum};
pub use sentences::{format_gll, format_mwv, format_vhw};
pub use utc::utc_hms;

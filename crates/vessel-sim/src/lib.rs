pub mod drift;
pub mod log;
pub mod motion;
pub mod session;
pub mod state;
pub mod wind;

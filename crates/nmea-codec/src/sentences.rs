use crate::checksum::with_checksum;
use crate::utc::utc_hms;

const KNOTS_TO_KMH: f64 = 1.852;

/// Geographic position, `$GPGLL`. Coordinates render as degrees plus
/// decimal minutes (`DDMM.MMMM` / `DDDMM.MMMM`); the trailing `A` marks the
/// fix as valid, which the simulator always is.
pub fn format_gll(latitude: f64, longitude: f64, unix_ms: i64) -> String {
    let (hours, minutes, seconds) = utc_hms(unix_ms);

    let lat_degrees = latitude.abs().floor();
    let lat_minutes = (latitude.abs() - lat_degrees) * 60.0;
    let ns = if latitude >= 0.0 { 'N' } else { 'S' };

    let lon_degrees = longitude.abs().floor();
    let lon_minutes = (longitude.abs() - lon_degrees) * 60.0;
    let ew = if longitude >= 0.0 { 'E' } else { 'W' };

    let body = format!(
        "$GPGLL,{:02}{lat_minutes:07.4},{ns},{:03}{lon_minutes:07.4},{ew},{hours:02}{minutes:02}{seconds:02},A",
        lat_degrees as u32, lon_degrees as u32,
    );
    with_checksum(&body)
}

/// Apparent wind, `$IIMWV`. The angle arrives in (-180, 180] relative to the
/// bow; the sentence wants [0, 360), so a single wrap of negatives suffices.
pub fn format_mwv(angle: f64, speed: f64) -> String {
    let bearing = if angle < 0.0 { angle + 360.0 } else { angle };

    with_checksum(&format!("$IIMWV,{bearing:.1},R,{speed:.1},N,A"))
}

/// Water speed and heading, `$IIVHW`. Magnetic variation is not modeled, so
/// the true heading is repeated in the magnetic slot.
pub fn format_vhw(cog: f64, speed: f64) -> String {
    let speed_kmh = speed * KNOTS_TO_KMH;

    with_checksum(&format!(
        "$IIVHW,{cog:.1},T,{cog:.1},M,{speed:.1},N,{speed_kmh:.1},K"
    ))
}

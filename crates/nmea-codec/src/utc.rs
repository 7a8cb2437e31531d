const MILLIS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// UTC time of day for a unix millisecond timestamp. Leap seconds are not
/// modeled; the sentence clock only needs wall-clock hours/minutes/seconds.
pub fn utc_hms(unix_ms: i64) -> (u8, u8, u8) {
    let day_seconds = unix_ms
        .div_euclid(MILLIS_PER_SECOND)
        .rem_euclid(SECONDS_PER_DAY);

    let hours = (day_seconds / 3_600) as u8;
    let minutes = ((day_seconds % 3_600) / 60) as u8;
    let seconds = (day_seconds % 60) as u8;
    (hours, minutes, seconds)
}

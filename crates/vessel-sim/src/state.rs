pub const START_LATITUDE: f64 = 37.8199;
pub const START_LONGITUDE: f64 = -122.4783;
pub const START_BOAT_SPEED_KN: f64 = 5.5;
pub const START_COG_DEG: f64 = 225.0;
pub const START_TWS_KN: f64 = 12.0;
pub const START_TWD_DEG: f64 = 270.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselState {
    pub latitude: f64,
    pub longitude: f64,
    pub boat_speed: f64,
    pub cog: f64,
    pub tws: f64,
    pub twd: f64,
    pub sim_time_ms: i64,
    pub last_update_ms: i64,
}

impl VesselState {
    /// Fresh state anchored off the Golden Gate, timestamps pinned to the
    /// moment the session opens.
    pub fn seeded(now_ms: i64) -> Self {
        Self {
            latitude: START_LATITUDE,
            longitude: START_LONGITUDE,
            boat_speed: START_BOAT_SPEED_KN,
            cog: START_COG_DEG,
            tws: START_TWS_KN,
            twd: START_TWD_DEG,
            sim_time_ms: now_ms,
            last_update_ms: now_ms,
        }
    }
}

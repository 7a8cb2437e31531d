use std::time::{Duration, SystemTime, UNIX_EPOCH};

use vessel_sim::state::{START_LATITUDE, START_LONGITUDE};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StreamSettings {
    pub tick_interval: Duration,
    /// Pin every session to this drift seed for reproducible streams; when
    /// unset, each connection draws a seed from the clock.
    pub drift_seed: Option<u64>,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1_000),
            drift_seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StartPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StreamInfoResponse {
    pub tick_interval_ms: u64,
    pub sentences: Vec<String>,
    pub start_position: StartPosition,
}

#[derive(Clone, Debug)]
pub struct AppState {
    settings: StreamSettings,
}

impl AppState {
    pub fn new(settings: StreamSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> StreamSettings {
        self.settings
    }

    pub fn stream_info(&self) -> StreamInfoResponse {
        StreamInfoResponse {
            tick_interval_ms: self.settings.tick_interval.as_millis() as u64,
            sentences: vec![
                "GPGLL".to_string(),
                "IIMWV".to_string(),
                "IIVHW".to_string(),
            ],
            start_position: StartPosition {
                latitude: START_LATITUDE,
                longitude: START_LONGITUDE,
            },
        }
    }

    pub fn next_drift_seed(&self) -> u64 {
        match self.settings.drift_seed {
            Some(seed) => seed,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or(0),
        }
    }
}

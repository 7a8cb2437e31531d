use crate::drift::NoiseSource;
use crate::log::{NullSessionLogWriter, SessionLogEvent, SessionLogKind, SessionLogWriter};
use crate::state::VesselState;
use crate::{motion, wind};

use nmea_codec::{format_gll, format_mwv, format_vhw};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Created,
    Running,
    Closed,
}

/// One simulated vessel bound to one connection. Owns its state and noise
/// source outright; nothing is shared across sessions.
#[derive(Debug, Clone)]
pub struct SimulationSession<N: NoiseSource> {
    state: VesselState,
    phase: SessionPhase,
    noise: N,
    ticks: u64,
}

impl<N: NoiseSource> SimulationSession<N> {
    pub fn new(now_ms: i64, noise: N) -> Self {
        Self {
            state: VesselState::seeded(now_ms),
            phase: SessionPhase::Created,
            noise,
            ticks: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &VesselState {
        &self.state
    }

    /// Advance one tick and return the CRLF-joined GLL, MWV, and VHW
    /// sentences, or `None` once the session is closed. Ticks racing a
    /// close are expected; a closed session ignores them silently.
    pub fn tick(&mut self, now_ms: i64) -> Option<String> {
        self.tick_logged(now_ms, &mut NullSessionLogWriter)
    }

    pub fn tick_logged(&mut self, now_ms: i64, log: &mut dyn SessionLogWriter) -> Option<String> {
        if self.phase == SessionPhase::Closed {
            return None;
        }
        self.phase = SessionPhase::Running;
        self.ticks += 1;
        log.write(SessionLogEvent::new(self.ticks, SessionLogKind::TickStarted));

        let elapsed_secs = (now_ms - self.state.last_update_ms) as f64 / 1_000.0;
        self.state.sim_time_ms = now_ms;
        motion::advance(&mut self.state, elapsed_secs, &mut self.noise);
        self.state.last_update_ms = now_ms;
        log.write(SessionLogEvent::new(
            self.ticks,
            SessionLogKind::StateAdvanced,
        ));

        let apparent = wind::apparent_wind(
            self.state.tws,
            self.state.twd,
            self.state.boat_speed,
            self.state.cog,
        );
        log.write(SessionLogEvent::new(self.ticks, SessionLogKind::WindDerived));

        let payload = [
            format_gll(
                self.state.latitude,
                self.state.longitude,
                self.state.sim_time_ms,
            ),
            format_mwv(apparent.angle, apparent.speed),
            format_vhw(self.state.cog, self.state.boat_speed),
        ]
        .join("\r\n");
        log.write(SessionLogEvent::new(
            self.ticks,
            SessionLogKind::PayloadEncoded,
        ));

        Some(payload)
    }

    /// Terminal and idempotent. No state mutation or sentence emission
    /// happens after this returns.
    pub fn close(&mut self) {
        self.phase = SessionPhase::Closed;
    }
}

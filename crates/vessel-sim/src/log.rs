#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLogKind {
    TickStarted,
    StateAdvanced,
    WindDerived,
    PayloadEncoded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLogEvent {
    pub tick: u64,
    pub kind: SessionLogKind,
}

impl SessionLogEvent {
    pub fn new(tick: u64, kind: SessionLogKind) -> Self {
        Self { tick, kind }
    }
}

pub trait SessionLogWriter {
    fn write(&mut self, event: SessionLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemorySessionLogWriter {
    events: Vec<SessionLogEvent>,
}

impl InMemorySessionLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SessionLogEvent] {
        &self.events
    }
}

impl SessionLogWriter for InMemorySessionLogWriter {
    fn write(&mut self, event: SessionLogEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default)]
pub struct NullSessionLogWriter;

impl SessionLogWriter for NullSessionLogWriter {
    fn write(&mut self, _event: SessionLogEvent) {}
}

#[cfg(test)]
mod tests {
    use super::{InMemorySessionLogWriter, SessionLogEvent, SessionLogKind, SessionLogWriter};

    #[test]
    fn in_memory_writer_records_events_in_order() {
        let mut writer = InMemorySessionLogWriter::new();

        writer.write(SessionLogEvent::new(1, SessionLogKind::TickStarted));
        writer.write(SessionLogEvent::new(1, SessionLogKind::StateAdvanced));

        assert_eq!(
            writer.events(),
            [
                SessionLogEvent::new(1, SessionLogKind::TickStarted),
                SessionLogEvent::new(1, SessionLogKind::StateAdvanced),
            ]
        );
    }
}

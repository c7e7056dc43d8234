//! The doubling program.
//!
//! Each tick doubles `a`, then publishes `a` and `b = sqrt(a)` as static
//! float records. The first tick of a session restores `a` from the bus so a
//! restarted host continues where the previous one stopped.

use textbus_core_store::{Error, RecordId};
use textbus_typed_store::{record_id, Bus, TextDevice};

/// Value of `a` when the bus holds none.
pub const INITIAL_A: f32 = 0.25;

/// State carried from one tick to the next.
#[derive(Debug, Clone)]
pub struct TickSession {
    first_tick: bool,
    a: f32,
    a_id: RecordId,
    b_id: RecordId,
}

impl TickSession {
    pub fn new() -> Self {
        TickSession {
            first_tick: true,
            a: INITIAL_A,
            a_id: record_id!("a"),
            b_id: record_id!("b"),
        }
    }

    /// True until the first tick has run.
    pub fn is_first_tick(&self) -> bool {
        self.first_tick
    }

    pub fn a(&self) -> f32 {
        self.a
    }

    pub fn b(&self) -> f32 {
        self.a.sqrt()
    }

    /// Run one tick against `bus`.
    pub fn tick<D: TextDevice>(&mut self, bus: &mut Bus<D>) -> Result<(), Error> {
        if self.first_tick {
            self.a = bus.read_static_float(&self.a_id)?.unwrap_or(INITIAL_A);
            self.first_tick = false;
            log::debug!("restored a = {}", self.a);
        }

        self.a *= 2.0;
        bus.write_static_float(&self.a_id, self.a)?;
        bus.write_static_float(&self.b_id, self.b())?;
        Ok(())
    }
}

impl Default for TickSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textbus_typed_store::InMemoryText;

    #[test]
    fn first_tick_starts_from_initial_value() {
        let mut bus = Bus::new(InMemoryText::new());
        let mut session = TickSession::new();
        assert!(session.is_first_tick());

        session.tick(&mut bus).unwrap();

        assert!(!session.is_first_tick());
        assert_eq!(session.a(), 0.5);
        assert_eq!(
            bus.read_static_float(&record_id!("a")).unwrap().into_option(),
            Some(0.5)
        );
        assert_eq!(
            bus.read_static_float(&record_id!("b")).unwrap().into_option(),
            Some(0.5f32.sqrt())
        );
    }

    #[test]
    fn new_session_resumes_from_bus() {
        let mut bus = Bus::new(InMemoryText::new());

        let mut first = TickSession::new();
        first.tick(&mut bus).unwrap();
        first.tick(&mut bus).unwrap();
        assert_eq!(first.a(), 1.0);

        // A restarted host picks up the published value.
        let mut second = TickSession::new();
        second.tick(&mut bus).unwrap();
        assert_eq!(second.a(), 2.0);
    }

    #[test]
    fn unreadable_value_falls_back_to_initial() {
        let mut bus = Bus::new(InMemoryText::with_text("Sa               Fgarbage\n"));
        let mut session = TickSession::new();

        session.tick(&mut bus).unwrap();
        assert_eq!(session.a(), 0.5);
        assert_eq!(
            bus.device().text(),
            "Sb               F0.70710677\nSa               F0.5\n"
        );
    }

    #[test]
    fn later_ticks_do_not_reread() {
        let mut bus = Bus::new(InMemoryText::new());
        let mut session = TickSession::new();
        session.tick(&mut bus).unwrap();

        // Someone else overwrites a; the session keeps its own value.
        bus.write_static_float(&record_id!("a"), 100.0).unwrap();
        session.tick(&mut bus).unwrap();
        assert_eq!(session.a(), 1.0);
    }
}

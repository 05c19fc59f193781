//! Character-by-character text reveal.

use super::timer::{Scheduler, TimerHandle, TimerId};
use std::time::Duration;
use tracing::debug;

/// Per-character interval used by the hero subtitle.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Static marker drawn after the revealed prefix. It does not blink.
pub const CURSOR_MARKER: &str = "|";

/// Reveals a fixed source string one character per tick.
///
/// Counting is by Unicode scalar value so multi-byte separators such as `•`
/// reveal in one step. There is no rewind: restarting means mounting a new
/// engine. Dropping the engine cancels its pending tick.
#[derive(Debug)]
pub struct TypewriterEngine {
    source: String,
    /// Byte offset of every character boundary after the first character.
    boundaries: Vec<usize>,
    revealed_count: usize,
    interval: Duration,
    scheduler: Option<Scheduler>,
    pending_tick: Option<TimerHandle>,
}

impl TypewriterEngine {
    /// Create an engine that only advances through [`TypewriterEngine::tick`].
    pub fn new(source: impl Into<String>, interval: Duration) -> Self {
        let source = source.into();
        let boundaries = source
            .char_indices()
            .map(|(offset, ch)| offset + ch.len_utf8())
            .collect();
        Self {
            source,
            boundaries,
            revealed_count: 0,
            interval,
            scheduler: None,
            pending_tick: None,
        }
    }

    /// Create an engine and schedule its first tick one interval from now.
    pub fn mount(source: impl Into<String>, interval: Duration, scheduler: &Scheduler) -> Self {
        let mut engine = Self::new(source, interval);
        engine.scheduler = Some(scheduler.clone());
        engine.schedule_next();
        debug!(len = engine.len(), ?interval, "typewriter mounted");
        engine
    }

    /// Handle a fired timer. Returns the new prefix if `id` was this
    /// engine's tick.
    pub fn on_timer(&mut self, id: TimerId) -> Option<&str> {
        if !self.pending_tick.as_ref().is_some_and(|tick| tick.matches(id)) {
            return None;
        }
        self.pending_tick = None;
        let advanced = self.tick();
        self.schedule_next();
        if advanced {
            Some(self.revealed())
        } else {
            None
        }
    }

    /// Reveal one more character. Returns false once complete.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed_count += 1;
        if self.is_complete() {
            debug!(len = self.len(), "typewriter complete");
        }
        true
    }

    /// Characters revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// Revealed prefix of the source.
    pub fn revealed(&self) -> &str {
        match self.revealed_count {
            0 => "",
            n => &self.source[..self.boundaries[n - 1]],
        }
    }

    /// The full source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source length in characters.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Whether the source is empty.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Whether every character has been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed_count >= self.len()
    }

    /// Whether a tick is scheduled.
    pub fn is_ticking(&self) -> bool {
        self.pending_tick.is_some()
    }

    /// Per-character interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn schedule_next(&mut self) {
        if self.is_complete() {
            return;
        }
        if let Some(scheduler) = &self.scheduler {
            self.pending_tick = Some(scheduler.schedule(self.interval));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::types::Timestamp;

    fn drain(scheduler: &Scheduler, engine: &mut TypewriterEngine, until_ms: u64) {
        let target = Timestamp::from_millis(until_ms);
        while let Some(id) = scheduler.pop_due(target) {
            engine.on_timer(id);
        }
        scheduler.settle(target);
    }

    #[test]
    fn three_ticks_reveal_three_characters() {
        let mut engine = TypewriterEngine::new("DevOps", DEFAULT_INTERVAL);
        for _ in 0..3 {
            engine.tick();
        }
        assert_eq!(engine.revealed(), "Dev");
    }

    #[test]
    fn seventh_tick_is_a_noop() {
        let mut engine = TypewriterEngine::new("DevOps", DEFAULT_INTERVAL);
        for _ in 0..6 {
            assert!(engine.tick());
        }
        assert_eq!(engine.revealed(), "DevOps");
        assert!(!engine.tick());
        assert_eq!(engine.revealed_count(), 6);
    }

    #[test]
    fn multibyte_characters_reveal_whole() {
        let mut engine = TypewriterEngine::new("a • b", DEFAULT_INTERVAL);
        engine.tick();
        engine.tick();
        engine.tick();
        assert_eq!(engine.revealed(), "a •");
    }

    #[test]
    fn mounted_engine_ticks_on_schedule() {
        let scheduler = Scheduler::new();
        let mut engine = TypewriterEngine::mount("DevOps", DEFAULT_INTERVAL, &scheduler);

        drain(&scheduler, &mut engine, 299);
        assert_eq!(engine.revealed(), "De");

        drain(&scheduler, &mut engine, 300);
        assert_eq!(engine.revealed(), "Dev");
    }

    #[test]
    fn mounted_engine_stops_scheduling_when_complete() {
        let scheduler = Scheduler::new();
        let mut engine = TypewriterEngine::mount("DevOps", DEFAULT_INTERVAL, &scheduler);

        drain(&scheduler, &mut engine, 10_000);

        assert_eq!(engine.revealed(), "DevOps");
        assert!(!engine.is_ticking());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn dropping_engine_cancels_pending_tick() {
        let scheduler = Scheduler::new();
        let engine = TypewriterEngine::mount("DevOps", DEFAULT_INTERVAL, &scheduler);
        assert_eq!(scheduler.pending_count(), 1);

        drop(engine);

        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn foreign_timer_ids_are_ignored() {
        let scheduler = Scheduler::new();
        let mut engine = TypewriterEngine::mount("DevOps", DEFAULT_INTERVAL, &scheduler);
        let other = scheduler.schedule(Duration::from_millis(1));

        assert_eq!(engine.on_timer(other.id()), None);
        assert_eq!(engine.revealed_count(), 0);
    }

    #[test]
    fn empty_source_never_schedules() {
        let scheduler = Scheduler::new();
        let engine = TypewriterEngine::mount("", DEFAULT_INTERVAL, &scheduler);
        assert!(engine.is_complete());
        assert_eq!(scheduler.pending_count(), 0);
    }
}

//! Pomodoro countdown.
//!
//! A wall-clock state machine with no internal threads; the caller passes
//! "now" into every query and is responsible for polling. Dropping the
//! value is the only cancellation there is.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::settings::PomodoroSettings;

/// Phase of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PomodoroPhase {
    Focus,
    ShortBreak,
    LongBreak,
}

/// Countdown over the configured phase durations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroTimer {
    settings: PomodoroSettings,
    phase: PomodoroPhase,
    /// Focus sessions completed in the current cycle.
    completed_focus: u32,
    started_at: Option<DateTime<Utc>>,
}

impl PomodoroTimer {
    pub fn new(settings: PomodoroSettings) -> Self {
        Self {
            settings,
            phase: PomodoroPhase::Focus,
            completed_focus: 0,
            started_at: None,
        }
    }

    pub fn phase(&self) -> PomodoroPhase {
        self.phase
    }

    pub fn completed_focus(&self) -> u32 {
        self.completed_focus
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    fn phase_duration(&self) -> Duration {
        let minutes = match self.phase {
            PomodoroPhase::Focus => self.settings.focus_minutes,
            PomodoroPhase::ShortBreak => self.settings.short_break_minutes,
            PomodoroPhase::LongBreak => self.settings.long_break_minutes,
        };
        Duration::minutes(i64::from(minutes))
    }

    /// Start (or restart) the current phase at `now`.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.started_at = Some(now);
    }

    /// Time left in the current phase; the full duration when not started,
    /// zero once elapsed.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        match self.started_at {
            None => self.phase_duration(),
            Some(started) => {
                let left = self.phase_duration() - (now - started);
                left.max(Duration::zero())
            }
        }
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.started_at.is_some() && self.remaining(now) == Duration::zero()
    }

    /// Move to the next phase once the current one has elapsed.
    ///
    /// Finishing a focus session counts it toward the cycle; every
    /// `sessions_before_long_break` focus sessions the following break is
    /// long. Returns the new phase, or `None` when the current phase has
    /// not finished. The next phase auto-starts only for breaks with
    /// `auto_start_breaks` set.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Option<PomodoroPhase> {
        if !self.is_finished(now) {
            return None;
        }
        self.phase = match self.phase {
            PomodoroPhase::Focus => {
                self.completed_focus += 1;
                // A zero-session cycle would never reach a long break.
                let every = self.settings.sessions_before_long_break.max(1);
                if self.completed_focus % every == 0 {
                    PomodoroPhase::LongBreak
                } else {
                    PomodoroPhase::ShortBreak
                }
            }
            PomodoroPhase::ShortBreak | PomodoroPhase::LongBreak => PomodoroPhase::Focus,
        };
        let auto_start = self.phase != PomodoroPhase::Focus && self.settings.auto_start_breaks;
        self.started_at = if auto_start { Some(now) } else { None };
        Some(self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> PomodoroTimer {
        PomodoroTimer::new(PomodoroSettings::default())
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-11T09:00:00Z").unwrap().to_utc()
            + Duration::minutes(minutes)
    }

    #[test]
    fn full_duration_before_start() {
        let t = timer();
        assert_eq!(t.remaining(at(0)), Duration::minutes(25));
        assert!(!t.is_running());
    }

    #[test]
    fn counts_down_by_wall_clock() {
        let mut t = timer();
        t.start(at(0));
        assert_eq!(t.remaining(at(10)), Duration::minutes(15));
        assert!(!t.is_finished(at(10)));
        assert_eq!(t.remaining(at(30)), Duration::zero());
        assert!(t.is_finished(at(25)));
    }

    #[test]
    fn advance_before_finish_is_noop() {
        let mut t = timer();
        t.start(at(0));
        assert_eq!(t.advance(at(10)), None);
        assert_eq!(t.phase(), PomodoroPhase::Focus);
    }

    #[test]
    fn long_break_after_configured_sessions() {
        let mut t = timer();
        let mut clock = 0;
        for session in 1..=4u32 {
            t.start(at(clock));
            clock += 25;
            let next = t.advance(at(clock)).unwrap();
            if session == 4 {
                assert_eq!(next, PomodoroPhase::LongBreak);
            } else {
                assert_eq!(next, PomodoroPhase::ShortBreak);
            }
            t.start(at(clock));
            clock += 20; // longer than either break
            assert_eq!(t.advance(at(clock)), Some(PomodoroPhase::Focus));
        }
        assert_eq!(t.completed_focus(), 4);
    }

    #[test]
    fn breaks_auto_start_when_configured() {
        let mut t = PomodoroTimer::new(PomodoroSettings {
            auto_start_breaks: true,
            ..PomodoroSettings::default()
        });
        t.start(at(0));
        t.advance(at(25));
        assert_eq!(t.phase(), PomodoroPhase::ShortBreak);
        assert!(t.is_running());
        // Following focus phase waits for an explicit start.
        t.advance(at(30));
        assert_eq!(t.phase(), PomodoroPhase::Focus);
        assert!(!t.is_running());
    }
}

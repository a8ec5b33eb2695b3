//! Pomodoro focus timer
//!
//! A plain countdown state machine. The shell owns the 1-second tick; the
//! model just decrements and stops at zero. Nothing is persisted: a timer
//! only lives as long as its view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    /// 25 minute focus block
    Focus,
    /// 5 minute short break
    ShortBreak,
    /// 15 minute long break
    LongBreak,
}

impl TimerMode {
    /// Full duration of this mode in seconds
    pub fn duration_secs(&self) -> u32 {
        match self {
            TimerMode::Focus => 25 * 60,
            TimerMode::ShortBreak => 5 * 60,
            TimerMode::LongBreak => 15 * 60,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
}

impl PomodoroTimer {
    pub fn new(mode: TimerMode) -> Self {
        Self {
            mode,
            remaining_secs: mode.duration_secs(),
            running: false,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or pause the countdown
    pub fn toggle(&mut self) {
        if self.remaining_secs > 0 {
            self.running = !self.running;
        }
    }

    /// Advance one second; stops the timer when it hits zero
    ///
    /// Returns true when this tick finished the countdown.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining_secs == 0 {
            return false;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Stop and reload the current mode's full duration
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.mode.duration_secs();
    }

    /// Switch modes, stopping the timer and reloading the new duration
    pub fn change_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
    }

    /// Fraction of the countdown already elapsed, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        let total = self.mode.duration_secs();
        f64::from(total - self.remaining_secs) / f64::from(total)
    }

    /// Remaining time as `mm:ss`
    pub fn format_remaining(&self) -> String {
        let mins = self.remaining_secs / 60;
        let secs = self.remaining_secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(TimerMode::Focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_paused_at_full_duration() {
        let timer = PomodoroTimer::default();
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.remaining_secs(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.format_remaining(), "25:00");
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut timer = PomodoroTimer::default();
        timer.tick();
        assert_eq!(timer.remaining_secs(), 1500);

        timer.toggle();
        timer.tick();
        assert_eq!(timer.remaining_secs(), 1499);
        assert_eq!(timer.format_remaining(), "24:59");
    }

    #[test]
    fn test_countdown_completes_and_stops() {
        let mut timer = PomodoroTimer::new(TimerMode::ShortBreak);
        timer.toggle();

        let mut finished = false;
        for _ in 0..TimerMode::ShortBreak.duration_secs() {
            finished = timer.tick();
        }

        assert!(finished);
        assert_eq!(timer.remaining_secs(), 0);
        assert!(!timer.is_running());
        // Further ticks are no-ops
        assert!(!timer.tick());
    }

    #[test]
    fn test_reset_reloads_mode_duration() {
        let mut timer = PomodoroTimer::default();
        timer.toggle();
        for _ in 0..100 {
            timer.tick();
        }

        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 1500);
    }

    #[test]
    fn test_change_mode_stops_and_reloads() {
        let mut timer = PomodoroTimer::default();
        timer.toggle();
        timer.tick();

        timer.change_mode(TimerMode::LongBreak);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 900);
    }

    #[test]
    fn test_progress() {
        let mut timer = PomodoroTimer::new(TimerMode::ShortBreak);
        assert_eq!(timer.progress(), 0.0);

        timer.toggle();
        for _ in 0..150 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < f64::EPSILON);
    }
}

//! Guided breathing session driven by one-second ticks.
//!
//! The session cycles through its phases until the total duration has
//! elapsed. Timing is owned by the caller: call [`BreathingSession::tick`]
//! once per second.

use serde::Serialize;

pub const GET_READY: &str = "Get Ready...";
pub const FINISHED: &str = "Well Done!";
pub const DEFAULT_TOTAL_SECS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreathingPhase {
    pub instruction: &'static str,
    pub duration_secs: u32,
    /// Target circle scale at the end of the phase.
    pub scale: f32,
}

pub fn default_phases() -> Vec<BreathingPhase> {
    vec![
        BreathingPhase { instruction: "Breathe In...", duration_secs: 4, scale: 1.0 },
        BreathingPhase { instruction: "Hold", duration_secs: 4, scale: 1.0 },
        BreathingPhase { instruction: "Breathe Out...", duration_secs: 6, scale: 0.5 },
    ]
}

/// Snapshot of what the exercise screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreathingState {
    pub instruction: &'static str,
    pub countdown: u32,
    pub time_remaining: u32,
    pub scale: f32,
    pub running: bool,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct BreathingSession {
    phases: Vec<BreathingPhase>,
    phase_index: usize,
    instruction: &'static str,
    countdown: u32,
    time_remaining: u32,
    scale: f32,
    running: bool,
    finished: bool,
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingSession {
    pub fn new() -> Self {
        Self::with_phases(default_phases(), DEFAULT_TOTAL_SECS)
    }

    /// An empty `phases` list falls back to [`default_phases`].
    pub fn with_phases(phases: Vec<BreathingPhase>, total_secs: u32) -> Self {
        let phases = if phases.is_empty() { default_phases() } else { phases };
        Self {
            phases,
            phase_index: 0,
            instruction: GET_READY,
            countdown: 0,
            time_remaining: total_secs,
            scale: 0.5,
            running: false,
            finished: false,
        }
    }

    pub fn start(&mut self) {
        if self.running || self.finished {
            return;
        }
        self.running = true;
        self.enter_phase();
    }

    /// Advances the session by one second.
    ///
    /// Each tick consumes one second of remaining time. The session finishes
    /// on the first tick that finds no time left, so a full run of
    /// `total_secs` seconds takes `total_secs + 1` ticks after [`start`].
    ///
    /// [`start`]: BreathingSession::start
    pub fn tick(&mut self) -> BreathingState {
        if !self.running || self.finished {
            return self.state();
        }

        if self.time_remaining > 0 {
            self.time_remaining -= 1;
        } else {
            self.running = false;
            self.finished = true;
            self.instruction = FINISHED;
            return self.state();
        }

        if self.countdown > 1 {
            self.countdown -= 1;
        } else {
            self.phase_index = (self.phase_index + 1) % self.phases.len();
            self.enter_phase();
        }
        self.state()
    }

    pub fn state(&self) -> BreathingState {
        BreathingState {
            instruction: self.instruction,
            countdown: self.countdown,
            time_remaining: self.time_remaining,
            scale: self.scale,
            running: self.running,
            finished: self.finished,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn enter_phase(&mut self) {
        let phase = &self.phases[self.phase_index];
        self.instruction = phase.instruction;
        self.countdown = phase.duration_secs;
        self.scale = phase.scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_before_start() {
        let mut session = BreathingSession::new();
        let state = session.tick();
        assert_eq!(state.instruction, GET_READY);
        assert_eq!(state.time_remaining, 60);
        assert!(!state.running);
    }

    #[test]
    fn test_phase_sequence() {
        let mut session = BreathingSession::new();
        session.start();
        assert_eq!(session.state().instruction, "Breathe In...");
        assert_eq!(session.state().countdown, 4);

        for _ in 0..3 {
            session.tick();
        }
        assert_eq!(session.state().countdown, 1);

        let state = session.tick();
        assert_eq!(state.instruction, "Hold");
        assert_eq!(state.countdown, 4);

        for _ in 0..4 {
            session.tick();
        }
        let state = session.state();
        assert_eq!(state.instruction, "Breathe Out...");
        assert_eq!(state.countdown, 6);
        assert_eq!(state.scale, 0.5);

        for _ in 0..6 {
            session.tick();
        }
        assert_eq!(session.state().instruction, "Breathe In...");
        assert_eq!(session.state().time_remaining, 60 - 14);
    }

    #[test]
    fn test_finishes_after_total_duration() {
        let mut session = BreathingSession::new();
        session.start();
        for _ in 0..60 {
            session.tick();
        }
        assert_eq!(session.state().time_remaining, 0);
        assert!(!session.is_finished());

        let state = session.tick();
        assert!(state.finished);
        assert!(!state.running);
        assert_eq!(state.instruction, FINISHED);

        // Further ticks are inert.
        assert_eq!(session.tick(), state);
    }

    #[test]
    fn test_custom_phases() {
        let phases = vec![BreathingPhase { instruction: "Box", duration_secs: 1, scale: 0.8 }];
        let mut session = BreathingSession::with_phases(phases, 3);
        session.start();
        let state = session.tick();
        assert_eq!(state.instruction, "Box");
        assert_eq!(state.countdown, 1);
        assert_eq!(state.time_remaining, 2);
    }
}

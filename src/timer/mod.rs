//! The focus timer core: input validation, end-time resolution, tick
//! scheduling and the state machine that ties them together.
//!
//! Nothing in here touches the terminal. The app layer forwards key presses
//! as commands and renders [`Snapshot`]s.

mod format;
mod input;
mod machine;
mod resolve;
mod schedule;

pub use format::{Labels, Locale};
pub use input::TimeInput;
pub use machine::FocusTimer;

/// Which half of the end time is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
}

/// Lifecycle of one focus session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Everything the view needs, computed for one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub run_state: RunState,
    pub end_time_display: Option<String>,
    pub start_time_display: String,
    pub focus_minutes: Option<i64>,
    pub focus_duration_display: Option<String>,
    pub elapsed_minutes: i64,
    pub remaining_minutes: i64,
    pub progress_percent: u8,
    pub is_start_enabled: bool,
    pub is_reset_pending: bool,
    pub hours_text: String,
    pub minutes_text: String,
    pub input_valid: bool,
}

impl Snapshot {
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn is_completed(&self) -> bool {
        self.run_state == RunState::Completed
    }
}

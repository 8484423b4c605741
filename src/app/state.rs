use crossterm::event::KeyCode;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::timer::{FocusTimer, RunState, TimeField};

use super::{AppEvent, AppView};

/// The top-level application state.
pub struct App<C: Clock = SystemClock> {
    pub running: bool,
    pub timer: FocusTimer<C>,
    pub view: AppView,
    pub focused_field: TimeField,
    /// While running, the read-only time selector can be shown again.
    pub selector_visible: bool,
    pub quit_prompt: bool,
    pub confirm_quit_while_running: bool,
    pub status: Option<String>,
}

impl App<SystemClock> {
    pub fn new(config: &Config) -> Self {
        Self::with_timer(FocusTimer::new(config.locale), config)
    }
}

impl<C: Clock> App<C> {
    pub fn with_timer(timer: FocusTimer<C>, config: &Config) -> Self {
        Self {
            running: true,
            timer,
            view: AppView::Timer,
            focused_field: TimeField::Hours,
            selector_visible: false,
            quit_prompt: false,
            confirm_quit_while_running: config.confirm_quit_while_running,
            status: None,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.timer.poll(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.timer.is_reset_pending() {
            self.handle_reset_key(key);
            return;
        }
        if self.quit_prompt {
            self.handle_quit_key(key);
            return;
        }
        if self.view == AppView::Help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.view = AppView::Timer,
                KeyCode::Char('q') => self.request_quit(),
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') => self.request_quit(),
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Char('s') => self.start(),
            KeyCode::Char('r') => {
                if self.timer.state() != RunState::Idle || !self.timer.input().is_empty() {
                    self.timer.request_reset();
                }
            }
            KeyCode::Char('t') => {
                if self.timer.state() == RunState::Running {
                    self.selector_visible = !self.selector_visible;
                }
            }
            KeyCode::Left => self.focused_field = TimeField::Hours,
            KeyCode::Right => self.focused_field = TimeField::Minutes,
            KeyCode::Tab | KeyCode::BackTab => self.focused_field = self.focused_field.other(),
            KeyCode::Enter => match self.focused_field {
                TimeField::Hours => self.focused_field = TimeField::Minutes,
                TimeField::Minutes => self.start(),
            },
            KeyCode::Backspace | KeyCode::Delete => self.erase_char(),
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                self.type_char(ch);
            }
            KeyCode::Esc => self.clear_status(),
            _ => {}
        }
    }

    fn handle_reset_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.timer.confirm_reset();
                self.focused_field = TimeField::Hours;
                self.selector_visible = false;
                self.clear_status();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.timer.cancel_reset(),
            _ => {}
        }
    }

    fn handle_quit_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.running = false,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.quit_prompt = false,
            _ => {}
        }
    }

    /// Quitting mid-session asks first, like a browser's leave-page prompt.
    fn request_quit(&mut self) {
        if self.timer.state() == RunState::Running && self.confirm_quit_while_running {
            self.quit_prompt = true;
        } else {
            info!("quitting");
            self.running = false;
        }
    }

    fn start(&mut self) {
        if self.timer.state() != RunState::Idle {
            return;
        }
        self.timer.start();
        if self.timer.state() == RunState::Running {
            self.clear_status();
        } else {
            self.status = Some(self.timer.locale().labels().start_unavailable.to_string());
        }
    }

    /// Appends one character to the focused field; a full field starts over.
    fn type_char(&mut self, ch: char) {
        if !self.input_editable() {
            return;
        }
        let field = self.focused_field;
        let current = self.timer.input().field(field);
        let raw = if ch.is_ascii_digit() && current.len() >= 2 {
            ch.to_string()
        } else {
            format!("{current}{ch}")
        };
        self.timer.on_time_input(field, &raw);
        if field == TimeField::Hours && self.timer.input().hours.len() == 2 {
            self.focused_field = TimeField::Minutes;
        }
        self.clear_status();
    }

    fn erase_char(&mut self) {
        if !self.input_editable() {
            return;
        }
        let field = self.focused_field;
        let mut text = self.timer.input().field(field).to_string();
        text.pop();
        self.timer.on_time_input(field, &text);
    }

    fn input_editable(&mut self) -> bool {
        if self.timer.state() == RunState::Idle {
            return true;
        }
        self.status = Some(self.timer.locale().labels().input_locked.to_string());
        false
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

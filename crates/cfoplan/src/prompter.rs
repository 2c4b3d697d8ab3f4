//! Prompt answers collected from modals.
//!
//! The lifecycle manager asks its questions synchronously, but the dashboard
//! can only get an answer by opening a modal and waiting for the next key
//! press. So the dashboard asks first, through its own modals, and replays
//! the answer to the manager through a [`ModalAnswer`].

use cfoplan_core::Prompter;

#[derive(Debug, Default)]
pub struct ModalAnswer {
    text: Option<String>,
    confirmed: bool,
    alerts: Vec<String>,
}

impl ModalAnswer {
    /// The user submitted `value` from a text input modal
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
            ..Default::default()
        }
    }

    /// The user pressed `y` on a confirm modal
    pub fn confirmed() -> Self {
        Self {
            confirmed: true,
            ..Default::default()
        }
    }

    /// Alerts raised while the answer was being replayed
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

impl Prompter for ModalAnswer {
    fn prompt(&mut self, _message: &str, _default: &str) -> Option<String> {
        self.text.take()
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.confirmed
    }

    fn alert(&mut self, message: &str) {
        tracing::debug!("Alert: {message}");
        self.alerts.push(message.to_string());
    }
}

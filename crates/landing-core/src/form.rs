//! Contact form submission lifecycle.

use crate::error::{SiteError, SiteResult};
use crate::i18n::Message;
use crate::notify::Severity;
use crate::prefs::Language;
use thiserror::Error;

/// Failure of the outbound send. The simulated transport never produces one,
/// but callers still have to handle it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("send rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

/// What the frontend should show once a send settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitFeedback {
    pub message: &'static str,
    pub severity: Severity,
    pub reset_fields: bool,
    pub button_label: &'static str,
}

#[derive(Debug, Default)]
pub struct FormController {
    phase: SubmitPhase,
    detached: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    /// Enter the sending phase. A second submit while busy is refused.
    pub fn begin(&mut self) -> SiteResult<()> {
        if self.is_busy() {
            return Err(SiteError::SubmissionInFlight);
        }
        self.phase = SubmitPhase::Sending;
        Ok(())
    }

    /// Mark the page as torn down. Sends still in flight settle silently.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Leave the sending phase and describe the feedback for `outcome`.
    /// `None` once detached: nothing should be shown to the user.
    pub fn finish(
        &mut self,
        outcome: &Result<(), SendError>,
        lang: Language,
    ) -> Option<SubmitFeedback> {
        self.phase = SubmitPhase::Idle;
        if self.detached {
            log::debug!("[form] send settled after teardown");
            return None;
        }
        let button_label = Message::SendButton.text(lang);
        let feedback = match outcome {
            Ok(()) => SubmitFeedback {
                message: Message::SendSuccess.text(lang),
                severity: Severity::Success,
                reset_fields: true,
                button_label,
            },
            Err(e) => {
                log::warn!("[form] {}", e);
                SubmitFeedback {
                    message: Message::SendFailure.text(lang),
                    severity: Severity::Error,
                    reset_fields: false,
                    button_label,
                }
            }
        };
        Some(feedback)
    }
}

//! Client-side contact form with a simulated send.
//!
//! Nothing leaves the page: a valid submission waits a fixed delay, always succeeds and
//! shows a feedback banner that fades out on its own.

use std::sync::OnceLock;

use regex::Regex;

use crate::foundation::core::Millis;

/// Simulated network latency.
pub const SEND_DELAY: Millis = Millis(1200);
/// How long feedback stays fully visible.
pub const FEEDBACK_VISIBLE_FOR: Millis = Millis(5000);
/// Fade-out duration before the banner is removed.
pub const FEEDBACK_FADE_FOR: Millis = Millis(300);

const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was rejected. The display text is shown to the user.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    /// A field is blank after trimming.
    #[error("Please fill in all fields.")]
    Incomplete,
    /// The email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Trimmed, validated submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trim and check a submission.
pub fn validate(input: &FormInput) -> Result<Submission, FormError> {
    let name = input.name.trim();
    let email = input.email.trim();
    let message = input.message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FormError::Incomplete);
    }
    if !email_re().is_match(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(Submission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Banner shown under the form.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
    /// `true` during the fade-out.
    pub fading: bool,
    #[serde(skip)]
    shown_at: Millis,
}

/// What a submit attempt did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; an error banner is shown and the user may retry.
    Rejected(FormError),
    /// The simulated send started.
    Sending,
    /// A send is already in flight; the submit button is disabled.
    Ignored,
}

/// Contact form state: fields, in-flight send and feedback banner.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: FormInput,
    sending: Option<(Millis, Submission)>,
    last_sent: Option<Submission>,
    feedback: Option<Feedback>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormInput {
        &self.fields
    }

    /// Replace the field values (typing).
    pub fn set_fields(&mut self, input: FormInput) {
        self.fields = input;
    }

    /// Submit the current fields at `now`.
    pub fn submit(&mut self, now: Millis) -> SubmitOutcome {
        if self.sending.is_some() {
            return SubmitOutcome::Ignored;
        }
        match validate(&self.fields) {
            Ok(submission) => {
                self.sending = Some((now + SEND_DELAY, submission));
                SubmitOutcome::Sending
            }
            Err(e) => {
                self.show(FeedbackKind::Error, e.to_string(), now);
                SubmitOutcome::Rejected(e)
            }
        }
    }

    /// Advance timers to `now`: complete a due send, then fade and remove stale feedback.
    pub fn tick(&mut self, now: Millis) {
        if self.sending.as_ref().is_some_and(|(until, _)| now >= *until)
            && let Some((until, submission)) = self.sending.take()
        {
            self.last_sent = Some(submission);
            self.fields = FormInput::default();
            self.show(FeedbackKind::Success, SUCCESS_MESSAGE.to_string(), until);
            tracing::debug!("contact form send simulated");
        }

        if let Some(fb) = &mut self.feedback {
            let age = now.since(fb.shown_at);
            if age >= FEEDBACK_VISIBLE_FOR + FEEDBACK_FADE_FOR {
                self.feedback = None;
            } else if age >= FEEDBACK_VISIBLE_FOR {
                fb.fading = true;
            }
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// `true` while the simulated send is in flight.
    pub fn is_sending(&self) -> bool {
        self.sending.is_some()
    }

    /// Submit button label.
    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending…"
        } else {
            "Send Message"
        }
    }

    /// Most recent submission that completed.
    pub fn last_sent(&self) -> Option<&Submission> {
        self.last_sent.as_ref()
    }

    /// A new banner replaces any existing one.
    fn show(&mut self, kind: FeedbackKind, message: String, now: Millis) {
        self.feedback = Some(Feedback {
            kind,
            message,
            fading: false,
            shown_at: now,
        });
    }
}

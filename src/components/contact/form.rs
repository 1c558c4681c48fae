use std::time::Duration;

use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

/// Simulated server round trip.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(2000);
pub const RESET_AFTER_SUCCESS: Duration = Duration::from_millis(4000);
pub const RESET_AFTER_ERROR: Duration = Duration::from_millis(5000);
/// Address the stubbed backend rejects, for exercising the error path.
pub const FAILING_EMAIL: &str = "error@test.com";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub message: String,
}

impl FormValues {
	pub fn is_valid(&self) -> bool {
		!self.name.trim().is_empty() && self.email.contains('@') && !self.message.trim().is_empty()
	}
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
	#[error("Please fill in your name, a valid email and a message.")]
	Invalid,
	#[error("A message is already being sent.")]
	InFlight,
	#[error("Simulated server error. Please try again.")]
	Server,
	#[error("could not encode message: {0}")]
	Encode(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
	#[default]
	Idle,
	Sending,
	Success,
	Error(String),
}

impl FormStatus {
	pub fn button_label(&self) -> &'static str {
		match self {
			FormStatus::Idle => "Send Message",
			FormStatus::Sending => "Sending...",
			FormStatus::Success => "Message Sent!",
			FormStatus::Error(_) => "Send Failed",
		}
	}

	pub fn css_class(&self) -> &'static str {
		match self {
			FormStatus::Idle => "state-idle",
			FormStatus::Sending => "state-loading",
			FormStatus::Success => "state-success",
			FormStatus::Error(_) => "state-error",
		}
	}

	pub fn is_sending(&self) -> bool {
		*self == FormStatus::Sending
	}

	/// Move into `Sending`. Retrying from an error is allowed.
	pub fn begin_submit(&mut self, values: &FormValues) -> Result<(), SubmitError> {
		if self.is_sending() {
			return Err(SubmitError::InFlight);
		}
		if !values.is_valid() {
			return Err(SubmitError::Invalid);
		}
		debug!("contact form: sending");
		*self = FormStatus::Sending;
		Ok(())
	}

	/// Record the outcome of a send and return how long to show it before
	/// falling back to `Idle`. Outcomes that arrive after a reset are dropped.
	pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> Option<Duration> {
		if !self.is_sending() {
			return None;
		}
		match outcome {
			Ok(()) => {
				*self = FormStatus::Success;
				Some(RESET_AFTER_SUCCESS)
			}
			Err(e) => {
				error!("contact form submission error: {e}");
				*self = FormStatus::Error(e.to_string());
				Some(RESET_AFTER_ERROR)
			}
		}
	}

	pub fn reset(&mut self) {
		*self = FormStatus::Idle;
	}
}

/// Stand-in for the backend call.
pub fn simulate_send(values: &FormValues) -> Result<(), SubmitError> {
	let body = serde_json::to_string(values).map_err(|e| SubmitError::Encode(e.to_string()))?;
	debug!("contact payload: {} bytes", body.len());
	if values.email.trim().eq_ignore_ascii_case(FAILING_EMAIL) {
		return Err(SubmitError::Server);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> FormValues {
		FormValues {
			name: "Ada".into(),
			email: "ada@example.com".into(),
			phone: String::new(),
			message: "Hello".into(),
		}
	}

	#[test]
	fn validation() {
		assert!(filled().is_valid());
		assert!(!FormValues { email: "nope".into(), ..filled() }.is_valid());
		assert!(!FormValues { name: "   ".into(), ..filled() }.is_valid());
		assert!(!FormValues { message: String::new(), ..filled() }.is_valid());
	}

	#[test]
	fn success_path_resets_after_four_seconds() {
		let mut status = FormStatus::default();
		assert_eq!(status.begin_submit(&filled()), Ok(()));
		assert_eq!(status.button_label(), "Sending...");
		let outcome = simulate_send(&filled());
		assert_eq!(status.finish(outcome), Some(RESET_AFTER_SUCCESS));
		assert_eq!(status, FormStatus::Success);
		status.reset();
		assert_eq!(status, FormStatus::Idle);
	}

	#[test]
	fn failure_is_recoverable() {
		let values = FormValues {
			email: FAILING_EMAIL.into(),
			..filled()
		};
		let mut status = FormStatus::default();
		status.begin_submit(&values).unwrap();
		assert_eq!(status.finish(simulate_send(&values)), Some(RESET_AFTER_ERROR));
		assert_eq!(
			status,
			FormStatus::Error("Simulated server error. Please try again.".into())
		);
		assert_eq!(status.button_label(), "Send Failed");
		assert_eq!(status.begin_submit(&filled()), Ok(()));
	}

	#[test]
	fn double_submit_is_rejected() {
		let mut status = FormStatus::default();
		status.begin_submit(&filled()).unwrap();
		assert_eq!(status.begin_submit(&filled()), Err(SubmitError::InFlight));
	}

	#[test]
	fn invalid_form_stays_idle() {
		let mut status = FormStatus::default();
		assert_eq!(
			status.begin_submit(&FormValues::default()),
			Err(SubmitError::Invalid)
		);
		assert_eq!(status, FormStatus::Idle);
	}

	#[test]
	fn late_outcome_is_ignored() {
		let mut status = FormStatus::default();
		assert_eq!(status.finish(Ok(())), None);
		assert_eq!(status, FormStatus::Idle);
	}
}

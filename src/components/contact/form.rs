//! Contact form state and the submission flow around it.

use std::fmt;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// JSON body posted to the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub message: String,
}

/// Errors that can occur while submitting the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
	/// A required field was left blank.
	MissingField(&'static str),
	/// The request failed or the endpoint answered with a non-success status.
	Failed(String),
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SubmitError::MissingField(field) => write!(f, "Field `{}` is required", field),
			SubmitError::Failed(reason) => write!(f, "Failed to send message: {}", reason),
		}
	}
}

impl std::error::Error for SubmitError {}

/// Whether a notice reports success or failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Error,
}

/// Transient message shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub message: &'static str,
}

impl Notice {
	pub const fn success() -> Self {
		Self {
			kind: NoticeKind::Success,
			message: "Your message is on its way!",
		}
	}

	pub const fn error() -> Self {
		Self {
			kind: NoticeKind::Error,
			message: "Something went wrong. Try again?",
		}
	}
}

/// The notice on screen, tagged so an expiry timer only clears the notice it
/// was started for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeBoard {
	current: Option<Notice>,
	shown: u64,
}

impl NoticeBoard {
	pub fn current(&self) -> Option<&Notice> {
		self.current.as_ref()
	}

	/// Replace whatever is showing. Returns the token to pass to [`expire`](Self::expire).
	pub fn show(&mut self, notice: Notice) -> u64 {
		self.shown += 1;
		self.current = Some(notice);
		self.shown
	}

	/// Hide the notice shown under `token`. A newer notice stays up.
	pub fn expire(&mut self, token: u64) -> bool {
		if token != self.shown || self.current.is_none() {
			return false;
		}
		self.current = None;
		true
	}
}

/// Anything that can deliver a [`ContactMessage`].
pub trait ContactEndpoint {
	#[allow(async_fn_in_trait)]
	async fn send(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Field values plus the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub fields: ContactMessage,
	pub is_loading: bool,
}

impl ContactForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Validate required fields and mark the form as sending. Returns the
	/// payload to post. A form that is already sending is rejected so a double
	/// click cannot post twice.
	pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
		if self.is_loading {
			return Err(SubmitError::Failed("submission already in progress".into()));
		}
		let fields = [
			("name", &self.fields.name),
			("email", &self.fields.email),
			("message", &self.fields.message),
		];
		if let Some((name, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
			return Err(SubmitError::MissingField(*name));
		}
		self.is_loading = true;
		Ok(self.fields.clone())
	}

	/// Apply the endpoint's answer. Successful sends clear the fields; failed
	/// ones keep what the user typed so they can try again.
	pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) -> Notice {
		self.is_loading = false;
		match result {
			Ok(()) => {
				self.fields = ContactMessage::default();
				Notice::success()
			}
			Err(_) => Notice::error(),
		}
	}
}

/// Send a payload taken from [`ContactForm::begin_submit`]. The result goes
/// back into [`ContactForm::finish_submit`].
pub async fn deliver<E: ContactEndpoint>(
	endpoint: &E,
	payload: &ContactMessage,
) -> Result<(), SubmitError> {
	let result = endpoint.send(payload).await;
	if let Err(e) = &result {
		warn!("contact: {}", e);
	}
	result
}

//! Contact form: field state, JSON submission and success/error feedback.
//!
//! One POST per submit, no retry. A failed send keeps the typed values so the
//! visitor can try again.

mod client;
mod component;
pub mod form;

pub use client::{CONTACT_PATH, FetchEndpoint};
pub use component::ContactSection;
pub use form::{ContactEndpoint, ContactForm, ContactMessage, Notice, NoticeKind, SubmitError};

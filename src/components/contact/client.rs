//! `fetch`-backed contact endpoint.

use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::form::{ContactEndpoint, ContactMessage, SubmitError};

/// Default path the form posts to.
pub const CONTACT_PATH: &str = "/api/contact";

impl From<JsValue> for SubmitError {
	fn from(e: JsValue) -> Self {
		SubmitError::Failed(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
	}
}

impl From<serde_json::Error> for SubmitError {
	fn from(e: serde_json::Error) -> Self {
		SubmitError::Failed(e.to_string())
	}
}

/// Posts the message as JSON to a URL on the current origin.
#[derive(Clone, Debug)]
pub struct FetchEndpoint {
	pub url: String,
}

impl Default for FetchEndpoint {
	fn default() -> Self {
		Self {
			url: CONTACT_PATH.to_string(),
		}
	}
}

impl FetchEndpoint {
	fn build_request(&self, message: &ContactMessage) -> Result<Request, SubmitError> {
		let body = serde_json::to_string(message)?;

		let headers = Headers::new()?;
		headers.set("Content-Type", "application/json")?;

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_headers(&headers);
		init.set_body(&JsValue::from_str(&body));

		Ok(Request::new_with_str_and_init(&self.url, &init)?)
	}
}

impl ContactEndpoint for FetchEndpoint {
	async fn send(&self, message: &ContactMessage) -> Result<(), SubmitError> {
		let window = web_sys::window().ok_or_else(|| SubmitError::Failed("no window".into()))?;
		let request = self.build_request(message)?;

		let response: Response = JsFuture::from(window.fetch_with_request(&request))
			.await
			.inspect_err(|e| warn!("contact: request to {} failed: {:?}", self.url, e))?
			.dyn_into()?;

		if !response.ok() {
			warn!("contact: {} answered HTTP {}", self.url, response.status());
			return Err(SubmitError::Failed(format!("HTTP {}", response.status())));
		}
		info!("contact: message sent");
		Ok(())
	}
}

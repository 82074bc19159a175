//! Typewriter-style text reveal for the hero heading.

use std::time::Duration;

use leptos::prelude::*;

/// Delay between revealed characters.
pub const TYPING_INTERVAL: Duration = Duration::from_millis(100);

/// Reveals `text` one character at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
	text: String,
	/// Byte offset of the end of the visible prefix, always on a char boundary.
	cursor: usize,
}

impl Typewriter {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			cursor: 0,
		}
	}

	/// Reveal the next character. Returns `false` once everything is shown.
	pub fn advance(&mut self) -> bool {
		match self.text[self.cursor..].chars().next() {
			Some(c) => {
				self.cursor += c.len_utf8();
				true
			}
			None => false,
		}
	}

	pub fn visible(&self) -> &str {
		&self.text[..self.cursor]
	}

	pub fn is_done(&self) -> bool {
		self.cursor == self.text.len()
	}
}

/// Heading whose text types itself out, then stops its timer.
#[component]
pub fn TypedHeading(
	#[prop(into)] text: String,
	#[prop(optional, into)] heading_class: String,
) -> impl IntoView {
	let typer = RwSignal::new(Typewriter::new(text));
	let handle: StoredValue<Option<IntervalHandle>> = StoredValue::new(None);

	let tick = move || {
		typer.update(|t| {
			t.advance();
		});
		if typer.with_untracked(Typewriter::is_done) {
			if let Some(h) = handle.get_value() {
				h.clear();
			}
		}
	};
	match set_interval_with_handle(tick, TYPING_INTERVAL) {
		Ok(h) => handle.set_value(Some(h)),
		Err(_) => {
			// No timers: show the whole heading at once.
			typer.update(|t| while t.advance() {});
		}
	}

	on_cleanup(move || {
		if let Some(h) = handle.get_value() {
			h.clear();
		}
	});

	view! {
		<h1 class=heading_class>
			{move || typer.with(|t| t.visible().to_string())}
			<span class="typing-cursor" aria-hidden="true">"|"</span>
		</h1>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reveals_one_char_per_advance() {
		let mut t = Typewriter::new("Hi, I'm");
		assert_eq!(t.visible(), "");
		assert!(t.advance());
		assert_eq!(t.visible(), "H");
		assert!(t.advance());
		assert_eq!(t.visible(), "Hi");
		assert!(!t.is_done());
	}

	#[test]
	fn stops_at_the_end() {
		let mut t = Typewriter::new("ok");
		let mut steps = 0;
		while t.advance() {
			steps += 1;
		}
		assert_eq!(steps, 2);
		assert!(t.is_done());
		assert!(!t.advance());
		assert_eq!(t.visible(), "ok");
	}

	#[test]
	fn multibyte_text() {
		let mut t = Typewriter::new("héllo ✨");
		t.advance();
		t.advance();
		assert_eq!(t.visible(), "hé");
		while t.advance() {}
		assert_eq!(t.visible(), "héllo ✨");
	}

	#[test]
	fn empty_text_is_done_immediately() {
		let mut t = Typewriter::new("");
		assert!(t.is_done());
		assert!(!t.advance());
	}
}

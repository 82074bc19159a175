//! Leptos contact section: contact links, the message form and its toast.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use super::client::FetchEndpoint;
use super::form::{ContactForm, NOTICE_DURATION, Notice, NoticeBoard, NoticeKind, deliver};
use crate::content::ContactLink;

type NoticeTimer = StoredValue<Option<TimeoutHandle>>;

/// Show `notice` and restart the hide timer. The previous timer is cancelled;
/// if it fires anyway its stale token leaves the new notice alone.
fn show_notice(board: RwSignal<NoticeBoard>, timer: NoticeTimer, notice: Notice) {
	let Some(token) = board.try_update(|b| b.show(notice)) else {
		return;
	};
	if let Some(stale) = timer.try_get_value().flatten() {
		stale.clear();
	}
	let handle = set_timeout_with_handle(
		move || {
			let _ = board.try_update(|b| b.expire(token));
		},
		NOTICE_DURATION,
	)
	.ok();
	let _ = timer.try_set_value(handle);
}

/// Contact section with direct links and a message form posting to `/api/contact`.
#[component]
pub fn ContactSection(#[prop(into)] links: Vec<ContactLink>) -> impl IntoView {
	let form = RwSignal::new(ContactForm::new());
	let board = RwSignal::new(NoticeBoard::default());
	let timer: NoticeTimer = StoredValue::new(None);
	on_cleanup(move || {
		if let Some(handle) = timer.try_get_value().flatten() {
			handle.clear();
		}
	});

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();

		let mut draft = form.get_untracked();
		let payload = match draft.begin_submit() {
			Ok(payload) => payload,
			Err(e) => {
				warn!("contact: {}", e);
				show_notice(board, timer, Notice::error());
				return;
			}
		};
		form.set(draft);

		spawn_local(async move {
			let result = deliver(&FetchEndpoint::default(), &payload).await;
			if let Some(shown) = form.try_update(|f| f.finish_submit(&result)) {
				show_notice(board, timer, shown);
			}
		});
	};

	let link_views = links
		.into_iter()
		.map(|link| {
			let body = view! {
				<span class="contact-label">{link.label}</span>
				<span class="contact-text">{link.text}</span>
			};
			match link.href {
				Some(href) => {
					let external = href.starts_with("http");
					view! {
						<a
							class="contact-card"
							href=href
							target=external.then_some("_blank")
							rel=external.then_some("noopener noreferrer")
						>
							{body}
						</a>
					}
					.into_any()
				}
				None => view! { <div class="contact-card">{body}</div> }.into_any(),
			}
		})
		.collect_view();

	view! {
		<section id="contact" class="contact">
			<h2>"Get In Touch"</h2>
			<p class="subtitle">"Have a project in mind or just want to chat? I'd love to hear from you."</p>
			<div class="contact-grid">
				<div class="contact-links">{link_views}</div>
				<form class="contact-form" on:submit=on_submit>
					<label>
						"Your Name"
						<input
							name="name"
							type="text"
							required
							prop:value=move || form.with(|f| f.fields.name.clone())
							on:input=move |ev| form.update(|f| f.fields.name = event_target_value(&ev))
						/>
					</label>
					<label>
						"Email Address"
						<input
							name="email"
							type="email"
							required
							prop:value=move || form.with(|f| f.fields.email.clone())
							on:input=move |ev| form.update(|f| f.fields.email = event_target_value(&ev))
						/>
					</label>
					<label>
						"Message"
						<textarea
							name="message"
							rows="6"
							required
							prop:value=move || form.with(|f| f.fields.message.clone())
							on:input=move |ev| form.update(|f| f.fields.message = event_target_value(&ev))
						/>
					</label>
					<button type="submit" disabled=move || form.with(|f| f.is_loading)>
						{move || if form.with(|f| f.is_loading) { "Sending..." } else { "Send Message" }}
					</button>
				</form>
			</div>
			{move || {
				board
					.with(|b| b.current().cloned())
					.map(|n| {
						let class = match n.kind {
							NoticeKind::Success => "toast toast-success",
							NoticeKind::Error => "toast toast-error",
						};
						view! { <div class=class role="status">{n.message}</div> }
					})
			}}
		</section>
	}
}

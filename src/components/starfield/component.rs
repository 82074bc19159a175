//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page and
//! starts a `requestAnimationFrame` loop that advances the particles and
//! redraws every frame. Window resizes regenerate the populations. Unmounting
//! cancels the outstanding frame, detaches the resize listener and drops the
//! JS closures.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::lifecycle::FrameLoop;
use super::render;
use super::state::Starfield;
use super::theme::StarfieldStyle;
use super::types::Surface;

const CANVAS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
	z-index: -10; pointer-events: none; background: transparent;";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn viewport_surface(window: &Window) -> Option<Surface> {
	Some(Surface::new(
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn size_canvas(canvas: &HtmlCanvasElement, surface: Surface) {
	canvas.set_width(surface.width.max(0.0) as u32);
	canvas.set_height(surface.height.max(0.0) as u32);
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Animated starfield drawn behind all page content.
///
/// Purely decorative: it exposes nothing to its parent and lets pointer events
/// through. If the browser cannot provide a 2D context the canvas stays blank.
#[component]
pub fn StarfieldBackground(
	#[prop(optional)] theme: Option<StarfieldStyle>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let style = theme.unwrap_or_default();
	let starfield: Rc<RefCell<Option<Starfield>>> = Rc::new(RefCell::new(None));
	let frame_loop: Rc<RefCell<FrameLoop>> = Rc::new(RefCell::new(FrameLoop::new()));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let (starfield_init, loop_init, animate_init, resize_cb_init) = (
		starfield.clone(),
		frame_loop.clone(),
		animate.clone(),
		resize_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if loop_init.borrow().is_running() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(surface) = viewport_surface(&window) else {
			warn!("starfield: viewport size unavailable, background disabled");
			return;
		};
		size_canvas(&canvas, surface);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("starfield: no 2d context, background disabled");
			return;
		};

		*starfield_init.borrow_mut() = Some(Starfield::new(style.clone(), surface, random_seed()));
		info!(
			"starfield: mounted at {}x{} ({} style)",
			surface.width, surface.height, style.name
		);

		let (starfield_resize, canvas_resize) = (starfield_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(surface) = web_sys::window().as_ref().and_then(viewport_surface) else {
				return;
			};
			size_canvas(&canvas_resize, surface);
			if let Some(ref mut field) = *starfield_resize.borrow_mut() {
				field.resize(surface, random_seed());
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (starfield_anim, loop_anim, animate_inner) =
			(starfield_init.clone(), loop_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !loop_anim.borrow_mut().begin_frame() {
				return;
			}
			let now = js_sys::Date::now();
			if let Some(ref mut field) = *starfield_anim.borrow_mut() {
				field.tick(now);
				render::render(field, &ctx, now);
			}
			let Some(win) = web_sys::window() else {
				return;
			};
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					loop_anim.borrow_mut().scheduled(id);
				}
			}
		}));

		loop_init.borrow_mut().start();
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				loop_init.borrow_mut().scheduled(id);
			}
		}
	});

	let teardown = SendWrapper::new(move || {
		let (frames, pending) = {
			let mut lp = frame_loop.borrow_mut();
			(lp.frames(), lp.stop())
		};
		if let Some(window) = web_sys::window() {
			if let Some(id) = pending {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		// Dropping the closures breaks the Rc cycle through `animate`.
		animate.borrow_mut().take();
		resize_cb.borrow_mut().take();
		starfield.borrow_mut().take();
		info!("starfield: unmounted after {} frames", frames);
	});
	on_cleanup(move || (teardown.take())());

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-background"
			aria-hidden="true"
			style=CANVAS_STYLE
		/>
	}
}

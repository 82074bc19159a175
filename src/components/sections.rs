//! Static page sections rendered from [`PortfolioContent`](crate::content::PortfolioContent).

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;

use super::typing::TypedHeading;
use crate::content::{AboutContent, Experience, Project, SkillCategory, SocialLink};

/// Vertical scroll offset past which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

const NAV_LINKS: [(&str, &str); 5] = [
	("#about", "About"),
	("#skills", "Skills"),
	("#projects", "Projects"),
	("#experience", "Experience"),
	("#contact", "Contact"),
];

fn tags(items: Vec<String>) -> impl IntoView {
	items
		.into_iter()
		.map(|t| view! { <span class="tag">{t}</span> })
		.collect_view()
}

fn is_external(href: &str) -> bool {
	href.starts_with("http")
}

/// Whether the page has scrolled far enough for the solid header style.
pub fn is_scrolled(offset: f64) -> bool {
	offset > SCROLL_THRESHOLD
}

fn scroll_offset() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Top navigation with anchor links to each section.
///
/// Turns opaque once the page scrolls past [`SCROLL_THRESHOLD`]. On narrow
/// screens the links collapse into a toggle menu that closes when a link is
/// followed.
#[component]
pub fn Header(#[prop(into)] name: String) -> impl IntoView {
	let scrolled = RwSignal::new(is_scrolled(scroll_offset()));
	let menu_open = RwSignal::new(false);

	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		let _ = scrolled.try_set(is_scrolled(scroll_offset()));
	});
	if let Some(window) = web_sys::window() {
		let _ =
			window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
	}
	let on_scroll = SendWrapper::new(on_scroll);
	on_cleanup(move || {
		let on_scroll = on_scroll.take();
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
		}
	});

	view! {
		<header class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
			<a href="#home" class="brand">{name}</a>
			<nav class="nav-desktop">
				{NAV_LINKS
					.iter()
					.map(|(href, label)| view! { <a href=*href>{*label}</a> })
					.collect_view()}
			</nav>
			<button
				type="button"
				class="menu-toggle"
				aria-label="Toggle menu"
				aria-expanded=move || menu_open.get().to_string()
				on:click=move |_| menu_open.update(|open| *open = !*open)
			>
				{move || if menu_open.get() { "✕" } else { "☰" }}
			</button>
			<Show when=move || menu_open.get()>
				<nav class="nav-mobile">
					{NAV_LINKS
						.iter()
						.map(|(href, label)| {
							view! {
								<a href=*href on:click=move |_| menu_open.set(false)>
									{*label}
								</a>
							}
						})
						.collect_view()}
				</nav>
			</Show>
		</header>
	}
}

/// Landing banner with the self-typing greeting and social links.
#[component]
pub fn Hero(
	#[prop(into)] name: String,
	#[prop(into)] role: String,
	#[prop(into)] socials: Vec<SocialLink>,
) -> impl IntoView {
	view! {
		<section id="home" class="hero">
			<TypedHeading text=format!("Hi, I'm {}", name) heading_class="hero-title" />
			<p class="hero-role">{role}</p>
			<div class="hero-actions">
				<a href="#projects" class="button">"View My Work"</a>
				<a href="#contact" class="button button-outline">"Get In Touch"</a>
			</div>
			<div class="hero-socials">
				{socials
					.into_iter()
					.map(|s| {
						let external = is_external(&s.href);
						let aria_label = s.label.clone();
						view! {
							<a
								href=s.href
								aria-label=aria_label
								target=external.then_some("_blank")
								rel=external.then_some("noopener noreferrer")
							>
								{s.label}
							</a>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Self-introduction with feature cards and headline stats.
#[component]
pub fn About(about: AboutContent) -> impl IntoView {
	let AboutContent {
		greeting,
		paragraphs,
		features,
		stats,
	} = about;

	view! {
		<section id="about" class="about">
			<h2>"About Me"</h2>
			<div class="about-grid">
				<div class="about-text">
					<h3>{greeting}</h3>
					{paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
					<dl class="stats">
						{stats
							.into_iter()
							.map(|s| {
								view! {
									<div class="stat">
										<dt>{s.value}</dt>
										<dd>{s.label}</dd>
									</div>
								}
							})
							.collect_view()}
					</dl>
				</div>
				<div class="feature-cards">
					{features
						.into_iter()
						.map(|f| {
							view! {
								<div class="card feature">
									<h3>{f.title}</h3>
									<p>{f.description}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

/// Skill categories as tag clouds.
#[component]
pub fn Skills(#[prop(into)] categories: Vec<SkillCategory>) -> impl IntoView {
	view! {
		<section id="skills" class="skills">
			<h2>"Skills & Expertise"</h2>
			<div class="card-grid">
				{categories
					.into_iter()
					.map(|c| {
						view! {
							<div class="card">
								<h3>{c.title}</h3>
								<div class="tags">{tags(c.skills)}</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Project gallery.
#[component]
pub fn Projects(#[prop(into)] projects: Vec<Project>) -> impl IntoView {
	view! {
		<section id="projects" class="projects">
			<h2>"Featured Projects"</h2>
			<div class="card-grid">
				{projects
					.into_iter()
					.map(|p| {
						let alt = p.title.clone();
						view! {
							<article class="card project">
								<img src=p.image alt=alt loading="lazy" />
								<h3>{p.title}</h3>
								<p>{p.description}</p>
								<div class="tags">{tags(p.technologies)}</div>
								<div class="project-links">
									<a href=p.live_url target="_blank" rel="noopener noreferrer">
										"Live Demo"
									</a>
									{p
										.repositories
										.into_iter()
										.map(|r| {
											view! {
												<a href=r.url target="_blank" rel="noopener noreferrer">
													{r.label}
												</a>
											}
										})
										.collect_view()}
								</div>
							</article>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Work history timeline.
#[component]
pub fn ExperienceTimeline(#[prop(into)] entries: Vec<Experience>) -> impl IntoView {
	view! {
		<section id="experience" class="experience">
			<h2>"Experience"</h2>
			<ol class="timeline">
				{entries
					.into_iter()
					.map(|e| {
						view! {
							<li class="card">
								<h3>{e.title}</h3>
								<p class="organization">{e.organization}</p>
								<p class="period">{e.period}</p>
								<p>{e.description}</p>
								<div class="tags">{tags(e.technologies)}</div>
							</li>
						}
					})
					.collect_view()}
			</ol>
		</section>
	}
}

/// Page footer.
#[component]
pub fn Footer(#[prop(into)] name: String) -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();
	view! {
		<footer class="site-footer">
			<p>{format!("© {} {}. All rights reserved.", year, name)}</p>
			<a href="#home">"Back to top"</a>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_turns_solid_past_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(SCROLL_THRESHOLD));
		assert!(is_scrolled(SCROLL_THRESHOLD + 1.0));
	}

	#[test]
	fn only_web_links_open_new_tabs() {
		assert!(is_external("https://github.com/OgheneDev"));
		assert!(!is_external("mailto:someone@example.com"));
		assert!(!is_external("tel:+2349162475151"));
	}
}

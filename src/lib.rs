//! starfield-portfolio: single-page portfolio with an animated canvas background.
//!
//! This crate provides a WASM (client-side rendered) site: a starfield
//! background renderer behind static content sections and a contact form.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod content;

pub use components::contact::ContactSection;
pub use components::starfield::{StarfieldBackground, StarfieldStyle};
pub use content::{PortfolioContent, load_content};

use components::sections::{About, ExperienceTimeline, Footer, Header, Hero, Projects, Skills};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield-portfolio: logging initialized");
}

/// Main application component.
/// Loads page content from the DOM and renders every section over the starfield.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let PortfolioContent {
		name,
		role,
		socials,
		about,
		skills,
		projects,
		experience,
		contact,
	} = load_content();
	let title = format!("{} - {}", name, role);
	let description = format!("Portfolio of {} showcasing skills and projects", name);
	let (header_name, hero_name) = (name.clone(), name.clone());

	view! {
		<Html attr:lang="en" attr:class="scroll-smooth" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=description />

		<StarfieldBackground />
		<Header name=header_name />
		<main>
			<Hero name=hero_name role=role socials=socials />
			<About about=about />
			<Skills categories=skills />
			<Projects projects=projects />
			<ExperienceTimeline entries=experience />
			<ContactSection links=contact />
		</main>
		<Footer name=name />
	}
}

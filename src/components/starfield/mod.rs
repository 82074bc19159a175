//! Ambient starfield background.
//!
//! Paints a full-viewport canvas behind the page with:
//! - Twinkling stars, their count proportional to the viewport area
//! - A small population of glowing particles that drift and bounce off the edges
//! - Fading lines between particles that come within a fixed distance
//!
//! Generation, simulation and the connection math are plain functions over
//! [`Surface`], [`Star`] and [`Particle`]; only [`render`] and the component
//! touch the browser.
//!
//! # Example
//!
//! ```ignore
//! use starfield_portfolio::components::starfield::{StarfieldBackground, StarfieldStyle};
//!
//! view! {
//!     <StarfieldBackground theme=StarfieldStyle::minimal() />
//!     <main>"..."</main>
//! }
//! ```

mod component;
pub mod generate;
pub mod lifecycle;
pub mod render;
pub mod simulation;
mod state;
pub mod theme;
mod types;

pub use component::StarfieldBackground;
pub use state::Starfield;
pub use theme::StarfieldStyle;
pub use types::{Particle, Populations, Star, Surface};

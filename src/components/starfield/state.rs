//! Starfield state owned by a mounted background.
//!
//! Created once when the component mounts, then advanced each frame by the
//! animation loop. A resize throws the old populations away and generates
//! fresh ones for the new surface.

use log::debug;

use super::generate::generate;
use super::simulation;
use super::theme::StarfieldStyle;
use super::types::{Populations, Surface};

/// Style, surface and live populations of one mounted background.
pub struct Starfield {
	pub style: StarfieldStyle,
	pub surface: Surface,
	pub populations: Populations,
}

impl Starfield {
	pub fn new(style: StarfieldStyle, surface: Surface, seed: u64) -> Self {
		let populations = generate(surface, &style, seed);
		debug!(
			"starfield: {}x{} -> {} stars, {} particles",
			surface.width,
			surface.height,
			populations.stars.len(),
			populations.particles.len()
		);
		Self {
			style,
			surface,
			populations,
		}
	}

	/// Advance particle motion by one frame.
	pub fn tick(&mut self, time_ms: f64) {
		simulation::step(
			&mut self.populations.particles,
			self.surface,
			time_ms,
			&self.style.particles,
		);
	}

	/// Adopt a new surface size and regenerate everything from scratch.
	pub fn resize(&mut self, surface: Surface, seed: u64) {
		self.surface = surface;
		self.populations = generate(surface, &self.style, seed);
		debug!(
			"starfield: resized to {}x{}, regenerated {} stars, {} particles",
			surface.width,
			surface.height,
			self.populations.stars.len(),
			self.populations.particles.len()
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tick_keeps_bounds() {
		let surface = Surface::new(300.0, 200.0);
		let mut field = Starfield::new(StarfieldStyle::cyan(), surface, 5);
		for i in 0..500 {
			field.tick(i as f64 * 16.0);
		}
		assert!(
			field
				.populations
				.particles
				.iter()
				.all(|p| surface.contains(p.x, p.y))
		);
	}

	#[test]
	fn resize_replaces_every_particle() {
		let mut field = Starfield::new(StarfieldStyle::cyan(), Surface::new(1920.0, 1080.0), 1);
		let before = field.populations.clone();

		field.resize(Surface::new(800.0, 600.0), 2);

		assert_eq!(field.surface, Surface::new(800.0, 600.0));
		assert_eq!(field.populations.stars.len(), 80);
		assert_eq!(field.populations.particles.len(), 20);
		for old in &before.particles {
			assert!(
				!field
					.populations
					.particles
					.iter()
					.any(|p| p.x == old.x && p.y == old.y)
			);
		}
	}

	#[test]
	fn resize_to_nothing_pins_particles_to_the_origin() {
		let mut field = Starfield::new(StarfieldStyle::cyan(), Surface::new(640.0, 480.0), 1);
		field.resize(Surface::new(0.0, 0.0), 1);
		assert!(field.populations.stars.is_empty());
		assert_eq!(field.populations.particles.len(), 20);

		field.tick(0.0);
		assert!(
			field
				.populations
				.particles
				.iter()
				.all(|p| p.x == 0.0 && p.y == 0.0)
		);
	}
}

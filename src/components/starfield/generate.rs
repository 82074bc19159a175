//! Initial star and particle populations for a surface.
//!
//! Generation is seeded so the same surface, style and seed always produce the
//! same populations. The component seeds from `Math.random()`, which keeps the
//! on-page look varied between visits.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::theme::{ParticleCount, ParticleStyle, StarStyle, StarfieldStyle};
use super::types::{Particle, Populations, Star, Surface};

/// Number of stars for a surface: one per `density` square pixels, floored.
pub fn star_count(surface: Surface, style: &StarStyle) -> usize {
	per_area(surface, style.density)
}

/// Number of particles for a surface.
///
/// A fixed count holds for every valid surface, including zero-area ones where
/// all particles sit on the degenerate edge. Area-scaled counts are zero there.
pub fn particle_count(surface: Surface, style: &ParticleStyle) -> usize {
	match style.count {
		ParticleCount::Fixed(n) if surface.is_valid() => n,
		ParticleCount::Fixed(_) => 0,
		ParticleCount::PerArea(density) => per_area(surface, density),
	}
}

fn per_area(surface: Surface, density: f64) -> usize {
	if density <= 0.0 || !density.is_finite() {
		return 0;
	}
	(surface.area() / density).floor() as usize
}

/// Build both populations for `surface`.
pub fn generate(surface: Surface, style: &StarfieldStyle, seed: u64) -> Populations {
	let mut rng = SmallRng::seed_from_u64(seed);
	let stars = generate_stars(&mut rng, surface, &style.stars);
	let particles = generate_particles(&mut rng, surface, &style.particles);
	Populations { stars, particles }
}

fn unit(rng: &mut SmallRng) -> f64 {
	rng.gen_range(0.0..1.0)
}

fn generate_stars(rng: &mut SmallRng, surface: Surface, style: &StarStyle) -> Vec<Star> {
	(0..star_count(surface, style))
		.map(|_| Star {
			x: unit(rng) * surface.width,
			y: unit(rng) * surface.height,
			size: style.size.lerp(unit(rng)),
			speed: style.speed.lerp(unit(rng)),
		})
		.collect()
}

fn generate_particles(
	rng: &mut SmallRng,
	surface: Surface,
	style: &ParticleStyle,
) -> Vec<Particle> {
	(0..particle_count(surface, style))
		.map(|_| Particle {
			x: unit(rng) * surface.width,
			y: unit(rng) * surface.height,
			size: style.size.lerp(unit(rng)),
			speed_x: style.velocity.lerp(unit(rng)),
			speed_y: style.velocity.lerp(unit(rng)),
			opacity: style.opacity.lerp(unit(rng)),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_hd_counts() {
		let style = StarfieldStyle::cyan();
		let pops = generate(Surface::new(1920.0, 1080.0), &style, 7);
		// 1920 * 1080 / 6000 = 345.6
		assert_eq!(pops.stars.len(), 345);
		assert_eq!(pops.particles.len(), 20);
	}

	#[test]
	fn fixed_count_ignores_size() {
		let mut style = StarfieldStyle::cyan();
		style.particles.count = ParticleCount::Fixed(15);
		for (w, h) in [(1.0, 1.0), (320.0, 640.0), (3840.0, 2160.0)] {
			let pops = generate(Surface::new(w, h), &style, 1);
			assert_eq!(pops.particles.len(), 15, "{w}x{h}");
		}
	}

	#[test]
	fn per_area_count_scales() {
		let style = StarfieldStyle::minimal();
		assert_eq!(
			particle_count(Surface::new(1000.0, 1000.0), &style.particles),
			10
		);
		assert_eq!(
			particle_count(Surface::new(200.0, 200.0), &style.particles),
			0
		);
	}

	#[test]
	fn zero_size_surface_keeps_fixed_particles() {
		let style = StarfieldStyle::cyan();
		for (w, h) in [(0.0, 0.0), (0.0, 1080.0), (1920.0, 0.0)] {
			let surface = Surface::new(w, h);
			let pops = generate(surface, &style, 3);
			assert!(pops.stars.is_empty(), "{w}x{h}");
			assert_eq!(pops.particles.len(), 20, "{w}x{h}");
			assert!(pops.particles.iter().all(|p| surface.contains(p.x, p.y)));
		}
	}

	#[test]
	fn zero_size_surface_has_no_area_scaled_particles() {
		let style = StarfieldStyle::minimal();
		let pops = generate(Surface::new(0.0, 1080.0), &style, 3);
		assert!(pops.stars.is_empty());
		assert!(pops.particles.is_empty());
	}

	#[test]
	fn degenerate_surface_is_empty() {
		let style = StarfieldStyle::cyan();
		for (w, h) in [(-1.0, 100.0), (f64::NAN, 100.0), (100.0, f64::INFINITY)] {
			assert_eq!(generate(Surface::new(w, h), &style, 3), Populations::default());
		}
	}

	#[test]
	fn everything_starts_inside_the_surface() {
		let style = StarfieldStyle::cyan();
		let surface = Surface::new(800.0, 600.0);
		for seed in 0..20 {
			let pops = generate(surface, &style, seed);
			for s in &pops.stars {
				assert!(surface.contains(s.x, s.y));
				assert!(style.stars.size.contains(s.size));
				assert!(style.stars.speed.contains(s.speed));
			}
			for p in &pops.particles {
				assert!(surface.contains(p.x, p.y));
				assert!(style.particles.size.contains(p.size));
				assert!(style.particles.velocity.contains(p.speed_x));
				assert!(style.particles.velocity.contains(p.speed_y));
				assert!(style.particles.opacity.contains(p.opacity));
			}
		}
	}

	#[test]
	fn same_seed_same_populations() {
		let style = StarfieldStyle::cyan();
		let surface = Surface::new(1280.0, 720.0);
		assert_eq!(
			generate(surface, &style, 42),
			generate(surface, &style, 42)
		);
		assert_ne!(
			generate(surface, &style, 42).particles,
			generate(surface, &style, 43).particles
		);
	}
}

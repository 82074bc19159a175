//! Per-frame particle motion.

use super::theme::ParticleStyle;
use super::types::{Particle, Surface};

/// Particle opacity as a function of wall-clock time and horizontal position,
/// so neighbouring particles pulse out of sync.
pub fn twinkle_opacity(time_ms: f64, x: f64) -> f64 {
	0.1 + (time_ms * 0.001 + x).sin() * 0.1
}

/// Reflect a coordinate off `[0, max]`, returning the corrected position and
/// velocity. The position is pulled back onto the edge and the velocity is
/// pointed inward, so a particle can never stay outside for a frame.
fn reflect(pos: f64, vel: f64, max: f64) -> (f64, f64) {
	if pos < 0.0 {
		(0.0, vel.abs())
	} else if pos > max {
		(max, -vel.abs())
	} else {
		(pos, vel)
	}
}

/// Advance every particle by one frame.
pub fn step(particles: &mut [Particle], surface: Surface, time_ms: f64, style: &ParticleStyle) {
	for p in particles {
		(p.x, p.speed_x) = reflect(p.x + p.speed_x, p.speed_x, surface.width.max(0.0));
		(p.y, p.speed_y) = reflect(p.y + p.speed_y, p.speed_y, surface.height.max(0.0));

		if style.twinkle {
			p.opacity = twinkle_opacity(time_ms, p.x);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::starfield::generate::generate;
	use crate::components::starfield::theme::{ParticleCount, StarfieldStyle};

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			size: 1.0,
			speed_x: vx,
			speed_y: vy,
			opacity: 0.2,
		}
	}

	#[test]
	fn moves_by_velocity() {
		let style = StarfieldStyle::minimal().particles;
		let mut ps = vec![particle(10.0, 20.0, 0.5, -0.25)];
		step(&mut ps, Surface::new(100.0, 100.0), 0.0, &style);
		assert_eq!((ps[0].x, ps[0].y), (10.5, 19.75));
		assert_eq!(ps[0].opacity, 0.2);
	}

	#[test]
	fn bounces_off_each_edge() {
		let style = StarfieldStyle::minimal().particles;
		let surface = Surface::new(100.0, 50.0);
		let mut ps = vec![
			particle(0.1, 25.0, -0.2, 0.0),
			particle(99.9, 25.0, 0.2, 0.0),
			particle(50.0, 0.1, 0.0, -0.2),
			particle(50.0, 49.9, 0.0, 0.2),
		];
		step(&mut ps, surface, 0.0, &style);

		assert_eq!((ps[0].x, ps[0].speed_x), (0.0, 0.2));
		assert_eq!((ps[1].x, ps[1].speed_x), (100.0, -0.2));
		assert_eq!((ps[2].y, ps[2].speed_y), (0.0, 0.2));
		assert_eq!((ps[3].y, ps[3].speed_y), (50.0, -0.2));
	}

	#[test]
	fn fast_particles_cannot_escape() {
		let style = StarfieldStyle::minimal().particles;
		let surface = Surface::new(10.0, 10.0);
		let mut ps = vec![particle(5.0, 5.0, 37.0, -53.0)];
		for _ in 0..100 {
			step(&mut ps, surface, 0.0, &style);
			assert!(surface.contains(ps[0].x, ps[0].y));
		}
	}

	#[test]
	fn twinkle_follows_time_and_position() {
		let style = StarfieldStyle::cyan().particles;
		let mut ps = vec![particle(0.0, 5.0, 0.0, 0.0)];
		step(&mut ps, Surface::new(10.0, 10.0), 0.0, &style);
		assert!((ps[0].opacity - 0.1).abs() < 1e-12);

		let t = std::f64::consts::FRAC_PI_2 * 1000.0;
		step(&mut ps, Surface::new(10.0, 10.0), t, &style);
		assert!((ps[0].opacity - 0.2).abs() < 1e-12);
	}

	#[test]
	fn thousand_steps_stay_in_bounds() {
		let mut style = StarfieldStyle::cyan();
		style.particles.count = ParticleCount::Fixed(15);
		let surface = Surface::new(1920.0, 1080.0);
		let mut pops = generate(surface, &style, 2024);
		assert_eq!(pops.particles.len(), 15);
		assert!((340..=350).contains(&pops.stars.len()));

		for frame in 0..1000 {
			step(&mut pops.particles, surface, frame as f64 * 16.0, &style.particles);
			for p in &pops.particles {
				assert!(surface.contains(p.x, p.y), "frame {frame}: {p:?}");
			}
		}
	}

	#[test]
	fn step_is_deterministic() {
		let style = StarfieldStyle::cyan();
		let surface = Surface::new(640.0, 480.0);
		let mut a = generate(surface, &style, 9).particles;
		let mut b = a.clone();
		for i in 0..50 {
			step(&mut a, surface, i as f64, &style.particles);
			step(&mut b, surface, i as f64, &style.particles);
		}
		assert_eq!(a, b);
	}
}

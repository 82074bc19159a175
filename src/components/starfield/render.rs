//! Canvas rendering for the starfield.
//!
//! Each frame is drawn in layers, back to front:
//! 1. Clear and paint the backdrop gradient
//! 2. Stars, with a time-based flicker
//! 3. Particles, with a soft glow
//! 4. Lines between particles closer than the connection distance
//!
//! Drawing never touches simulation state.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::Starfield;
use super::theme::{BackdropStyle, ConnectionStyle, ParticleStyle, StarStyle};
use super::types::{Particle, Star, Surface};

/// A line to draw between particles `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub a: usize,
	pub b: usize,
	pub alpha: f64,
}

/// Line alpha for two particles `distance` apart. Fades linearly from
/// `max_alpha` at zero to nothing at the threshold.
pub fn connection_alpha(distance: f64, style: &ConnectionStyle) -> f64 {
	if style.distance <= 0.0 || distance >= style.distance {
		return 0.0;
	}
	(1.0 - distance / style.distance) * style.max_alpha
}

/// Every unordered pair of particles strictly closer than the threshold.
pub fn connections(particles: &[Particle], style: &ConnectionStyle) -> Vec<Connection> {
	let mut out = Vec::new();
	for (i, p1) in particles.iter().enumerate() {
		for (j, p2) in particles.iter().enumerate().skip(i + 1) {
			let distance = p1.distance_to(p2);
			if distance < style.distance {
				out.push(Connection {
					a: i,
					b: j,
					alpha: connection_alpha(distance, style),
				});
			}
		}
	}
	out
}

/// Core alpha of a star at `time_ms`.
pub fn star_alpha(time_ms: f64, star: &Star, style: &StarStyle) -> f64 {
	style.alpha_base + (time_ms * 0.001 + star.x).sin() * style.alpha_swing
}

/// Renders one frame of the starfield.
pub fn render(starfield: &Starfield, ctx: &CanvasRenderingContext2d, time_ms: f64) {
	let style = &starfield.style;
	let populations = &starfield.populations;

	draw_backdrop(ctx, starfield.surface, &style.backdrop);
	draw_stars(ctx, &populations.stars, &style.stars, time_ms);
	draw_particles(ctx, &populations.particles, &style.particles);
	draw_connections(ctx, &populations.particles, &style.connections);
}

fn draw_backdrop(ctx: &CanvasRenderingContext2d, surface: Surface, style: &BackdropStyle) {
	let (w, h) = (surface.width, surface.height);
	ctx.clear_rect(0.0, 0.0, w, h);

	if !style.use_gradient {
		return;
	}

	let Ok(gradient) =
		ctx.create_radial_gradient(w / 2.0, h / 2.0, 0.0, w / 2.0, h / 2.0, w.max(h) / 2.0)
	else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &style.inner.to_css());
	let _ = gradient.add_color_stop(1.0, &style.outer.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_stars(ctx: &CanvasRenderingContext2d, stars: &[Star], style: &StarStyle, time_ms: f64) {
	let rim = style.rim.to_css();

	for star in stars {
		let Ok(gradient) =
			ctx.create_radial_gradient(star.x, star.y, 0.0, star.x, star.y, star.size * 2.0)
		else {
			continue;
		};
		let core = style.core.with_alpha(star_alpha(time_ms, star, style));
		let _ = gradient.add_color_stop(0.0, &core.to_css());
		let _ = gradient.add_color_stop(1.0, &rim);

		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.size, 0.0, PI * 2.0);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	}
}

fn draw_particles(ctx: &CanvasRenderingContext2d, particles: &[Particle], style: &ParticleStyle) {
	if style.glow_blur > 0.0 {
		ctx.set_shadow_blur(style.glow_blur);
		ctx.set_shadow_color(&style.glow_color.to_css());
	}

	for p in particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&style.color.with_alpha(p.opacity).to_css());
		ctx.fill();
	}

	// Shadow state would otherwise bleed into the connection lines.
	ctx.set_shadow_blur(0.0);
}

fn draw_connections(
	ctx: &CanvasRenderingContext2d,
	particles: &[Particle],
	style: &ConnectionStyle,
) {
	ctx.set_line_width(style.line_width);

	for c in connections(particles, style) {
		let (p1, p2) = (&particles[c.a], &particles[c.b]);

		let gradient = ctx.create_linear_gradient(p1.x, p1.y, p2.x, p2.y);
		let _ = gradient.add_color_stop(0.0, &style.from.with_alpha(c.alpha).to_css());
		let _ = gradient.add_color_stop(1.0, &style.to.with_alpha(c.alpha).to_css());

		ctx.begin_path();
		ctx.move_to(p1.x, p1.y);
		ctx.line_to(p2.x, p2.y);
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.stroke();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::starfield::theme::StarfieldStyle;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			size: 1.0,
			speed_x: 0.0,
			speed_y: 0.0,
			opacity: 0.1,
		}
	}

	#[test]
	fn alpha_is_max_at_zero_and_zero_at_threshold() {
		let style = StarfieldStyle::cyan().connections;
		assert_eq!(connection_alpha(0.0, &style), style.max_alpha);
		assert_eq!(connection_alpha(style.distance, &style), 0.0);
		assert_eq!(connection_alpha(style.distance + 10.0, &style), 0.0);
	}

	#[test]
	fn alpha_fades_linearly() {
		let style = StarfieldStyle::cyan().connections;
		let half = connection_alpha(style.distance / 2.0, &style);
		assert!((half - style.max_alpha / 2.0).abs() < 1e-12);
		let quarter = connection_alpha(style.distance * 0.75, &style);
		assert!((quarter - style.max_alpha / 4.0).abs() < 1e-12);
	}

	#[test]
	fn only_close_pairs_connect() {
		let style = StarfieldStyle::cyan().connections;
		let particles = vec![at(0.0, 0.0), at(100.0, 0.0), at(400.0, 0.0), at(0.0, 150.0)];
		let found = connections(&particles, &style);

		// (0,1) at 100px connects; (0,3) sits exactly on the threshold and does not.
		assert_eq!(found.len(), 1);
		assert_eq!((found[0].a, found[0].b), (0, 1));
		assert!(found[0].alpha > 0.0);
	}

	#[test]
	fn each_pair_once() {
		let style = StarfieldStyle::cyan().connections;
		let particles = vec![at(10.0, 10.0), at(11.0, 10.0), at(12.0, 10.0)];
		let found = connections(&particles, &style);
		let pairs: Vec<_> = found.iter().map(|c| (c.a, c.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
	}

	#[test]
	fn star_flicker_is_bounded() {
		let style = StarfieldStyle::cyan().stars;
		let star = Star {
			x: 3.0,
			y: 4.0,
			size: 1.0,
			speed: 0.2,
		};
		for t in (0..10_000).step_by(37) {
			let a = star_alpha(t as f64, &star, &style);
			assert!(a > 0.3 - 1e-9 && a < 0.7 + 1e-9, "t={t}: {a}");
		}
	}
}

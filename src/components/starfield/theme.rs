//! Visual styling and tuning constants for the starfield background.
//!
//! Every random range, density and color the renderer uses lives here so a
//! preset can be swapped without touching the simulation or drawing code.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits `rgba(...)`; alpha is clamped to `[0, 1]` since twinkle
	/// math can briefly overshoot.
	pub fn to_css(self) -> String {
		format!(
			"rgba({}, {}, {}, {})",
			self.r,
			self.g,
			self.b,
			self.a.clamp(0.0, 1.0)
		)
	}
}

/// Half-open `[min, max)` range used for random draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

impl Range {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Map a unit sample `t` in `[0, 1)` into the range.
	pub fn lerp(&self, t: f64) -> f64 {
		self.min + (self.max - self.min) * t
	}

	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value < self.max
	}
}

/// How many particles a surface gets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleCount {
	/// Same population regardless of surface size.
	Fixed(usize),
	/// One particle per `n` square pixels.
	PerArea(f64),
}

/// Background gradient painted under everything each frame.
#[derive(Clone, Debug)]
pub struct BackdropStyle {
	/// Whether to paint the radial gradient (otherwise the canvas is only cleared)
	pub use_gradient: bool,
	/// Gradient center color
	pub inner: Color,
	/// Gradient edge color
	pub outer: Color,
}

/// Twinkling background stars.
#[derive(Clone, Debug)]
pub struct StarStyle {
	/// Square pixels of surface per star
	pub density: f64,
	pub size: Range,
	pub speed: Range,
	/// Gradient core color; alpha is replaced by the twinkle value
	pub core: Color,
	/// Gradient rim color
	pub rim: Color,
	/// Baseline core alpha
	pub alpha_base: f64,
	/// Twinkle amplitude around `alpha_base`
	pub alpha_swing: f64,
}

/// Drifting glowing particles and the lines between them.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	pub count: ParticleCount,
	pub size: Range,
	/// Per-axis velocity in pixels per frame
	pub velocity: Range,
	/// Initial opacity
	pub opacity: Range,
	/// Recompute opacity from wall-clock time every step
	pub twinkle: bool,
	pub color: Color,
	/// Shadow blur radius (0 = no glow)
	pub glow_blur: f64,
	pub glow_color: Color,
}

/// Connective lines between nearby particles.
#[derive(Clone, Debug)]
pub struct ConnectionStyle {
	/// Pairs closer than this (pixels) are connected
	pub distance: f64,
	/// Line alpha when two particles coincide
	pub max_alpha: f64,
	pub line_width: f64,
	/// Line start color; alpha comes from distance
	pub from: Color,
	/// Line end color; alpha comes from distance
	pub to: Color,
}

/// Complete starfield configuration.
#[derive(Clone, Debug)]
pub struct StarfieldStyle {
	pub name: &'static str,
	pub backdrop: BackdropStyle,
	pub stars: StarStyle,
	pub particles: ParticleStyle,
	pub connections: ConnectionStyle,
}

const CYAN_400: Color = Color::rgb(34, 211, 238);
const CYAN_500: Color = Color::rgb(6, 182, 212);
const TEAL_400: Color = Color::rgb(20, 184, 166);

impl StarfieldStyle {
	/// Cyan and teal starfield with glowing particles (default)
	pub fn cyan() -> Self {
		Self {
			name: "cyan",
			backdrop: BackdropStyle {
				use_gradient: true,
				inner: CYAN_500.with_alpha(0.08),
				outer: TEAL_400.with_alpha(0.06),
			},
			stars: StarStyle {
				density: 6000.0,
				size: Range::new(0.5, 3.0),
				speed: Range::new(0.1, 0.6),
				core: CYAN_400,
				rim: TEAL_400.with_alpha(0.1),
				alpha_base: 0.5,
				alpha_swing: 0.2,
			},
			particles: ParticleStyle {
				count: ParticleCount::Fixed(20),
				size: Range::new(1.0, 4.5),
				velocity: Range::new(-0.2, 0.2),
				opacity: Range::new(0.1, 0.3),
				twinkle: true,
				color: CYAN_400,
				glow_blur: 10.0,
				glow_color: CYAN_400.with_alpha(0.3),
			},
			connections: ConnectionStyle {
				distance: 150.0,
				max_alpha: 0.15,
				line_width: 1.0,
				from: CYAN_400,
				to: TEAL_400,
			},
		}
	}

	/// Plain white dots on a cleared canvas, no glow or opacity animation
	pub fn minimal() -> Self {
		Self {
			name: "minimal",
			backdrop: BackdropStyle {
				use_gradient: false,
				inner: Color::rgba(0, 0, 0, 0.0),
				outer: Color::rgba(0, 0, 0, 0.0),
			},
			stars: StarStyle {
				density: 8000.0,
				size: Range::new(0.5, 1.5),
				speed: Range::new(0.1, 0.6),
				core: Color::rgb(255, 255, 255),
				rim: Color::rgba(255, 255, 255, 0.0),
				alpha_base: 0.6,
				alpha_swing: 0.0,
			},
			particles: ParticleStyle {
				count: ParticleCount::PerArea(100_000.0),
				size: Range::new(1.0, 2.5),
				velocity: Range::new(-0.3, 0.3),
				opacity: Range::new(0.2, 0.5),
				twinkle: false,
				color: Color::rgb(255, 255, 255),
				glow_blur: 0.0,
				glow_color: Color::rgba(0, 0, 0, 0.0),
			},
			connections: ConnectionStyle {
				distance: 120.0,
				max_alpha: 0.2,
				line_width: 0.5,
				from: Color::rgb(255, 255, 255),
				to: Color::rgb(255, 255, 255),
			},
		}
	}
}

impl Default for StarfieldStyle {
	fn default() -> Self {
		Self::cyan()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_clamps_alpha() {
		assert_eq!(Color::rgba(1, 2, 3, 1.4).to_css(), "rgba(1, 2, 3, 1)");
		assert_eq!(Color::rgba(1, 2, 3, -0.2).to_css(), "rgba(1, 2, 3, 0)");
	}

	#[test]
	fn range_lerp_stays_half_open() {
		let r = Range::new(-0.2, 0.2);
		assert_eq!(r.lerp(0.0), -0.2);
		assert!(r.contains(r.lerp(0.999_999)));
		assert!(!r.contains(0.2));
	}

	#[test]
	fn default_is_cyan() {
		let style = StarfieldStyle::default();
		assert_eq!(style.name, "cyan");
		assert_eq!(style.particles.count, ParticleCount::Fixed(20));
		assert_eq!(style.connections.distance, 150.0);
	}
}

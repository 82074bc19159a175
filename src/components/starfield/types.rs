//! Data structures shared by the generator, simulation and renderer.

/// The drawing area, sized to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
	pub width: f64,
	pub height: f64,
}

impl Surface {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Area in square pixels. Degenerate surfaces (negative, NaN, infinite)
	/// report zero so nothing gets generated for them.
	pub fn area(&self) -> f64 {
		if self.is_empty() {
			0.0
		} else {
			self.width * self.height
		}
	}

	/// Both dimensions are finite and non-negative. Zero-area surfaces are
	/// valid, just empty.
	pub fn is_valid(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
	}

	pub fn is_empty(&self) -> bool {
		!(self.width.is_finite() && self.height.is_finite())
			|| self.width <= 0.0
			|| self.height <= 0.0
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}

/// A decorative background star. Never moves once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	/// Drift speed, kept for styles that animate stars
	pub speed: f64,
}

/// A drifting particle, advanced every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub opacity: f64,
}

impl Particle {
	pub fn distance_to(&self, other: &Particle) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Everything generated for one surface size. Replaced as a whole on resize.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Populations {
	pub stars: Vec<Star>,
	pub particles: Vec<Particle>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn degenerate_surfaces_have_no_area() {
		assert_eq!(Surface::new(0.0, 1080.0).area(), 0.0);
		assert_eq!(Surface::new(-5.0, 10.0).area(), 0.0);
		assert_eq!(Surface::new(f64::NAN, 10.0).area(), 0.0);
		assert_eq!(Surface::new(f64::INFINITY, 10.0).area(), 0.0);
		assert_eq!(Surface::new(20.0, 10.0).area(), 200.0);
	}

	#[test]
	fn zero_area_is_still_valid() {
		assert!(Surface::new(0.0, 0.0).is_valid());
		assert!(Surface::new(0.0, 0.0).is_empty());
		assert!(!Surface::new(-1.0, 10.0).is_valid());
		assert!(!Surface::new(10.0, f64::NAN).is_valid());
	}

	#[test]
	fn contains_includes_edges() {
		let s = Surface::new(100.0, 50.0);
		assert!(s.contains(0.0, 0.0));
		assert!(s.contains(100.0, 50.0));
		assert!(!s.contains(100.1, 10.0));
		assert!(!s.contains(10.0, -0.1));
	}
}

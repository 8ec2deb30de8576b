//! Point type and the little bit of plane geometry mining needs.

use std::{
	hash::{Hash, Hasher},
	ops::{Add, Div, Mul, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point on 2D grid, the most frequent used data type.
#[derive(Debug, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
	pub x: f32,
	pub y: f32,
}
impl Point2 {
	/// Constructs new 2D Point with given coordinates.
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
	/// Euclidean length of vector from origin to this point.
	pub fn len(self) -> f32 {
		(self.x * self.x + self.y * self.y).sqrt()
	}
	/// Returns point with the same direction and length `1`.
	/// Zero vector stays zero.
	pub fn normalize(self) -> Self {
		let len = self.len();
		if len > 0.0 {
			self / len
		} else {
			self
		}
	}
	/// Returns point moved from `self` in direction of `other` by given `offset`.
	///
	/// If both points are the same, `self` is returned.
	pub fn towards(self, other: Self, offset: f32) -> Self {
		if self == other {
			return self;
		}
		self + (other - self).normalize() * offset
	}
	/// Returns both intersection points of two circles.
	///
	/// `None` when circles don't touch, one lies within the other, or centers coincide.
	/// Touching circles produce two equal points.
	pub fn circle_intersection(c0: Self, r0: f32, c1: Self, r1: f32) -> Option<[Self; 2]> {
		let offset = c1 - c0;
		let d = offset.len();

		if d <= 0.0 || d > r0 + r1 || d < (r0 - r1).abs() {
			return None;
		}

		let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
		// rounding may push a slightly above r0 for touching circles
		let h = (r0 * r0 - a * a).max(0.0).sqrt();
		let mid = c0 + offset * (a / d);
		let perp = Self::new(offset.y, -offset.x) * (h / d);

		Some([mid + perp, mid - perp])
	}
}
impl PartialEq for Point2 {
	fn eq(&self, other: &Self) -> bool {
		self.x == other.x && self.y == other.y
	}
}
impl Eq for Point2 {}
impl Hash for Point2 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		(self.x as u32).hash(state);
		(self.y as u32).hash(state);
	}
}
impl From<(f32, f32)> for Point2 {
	#[inline]
	fn from((x, y): (f32, f32)) -> Self {
		Self { x, y }
	}
}
impl From<&Point2> for Point2 {
	#[inline]
	fn from(p: &Point2) -> Self {
		*p
	}
}
impl Add for Point2 {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		Self {
			x: self.x + other.x,
			y: self.y + other.y,
		}
	}
}
impl Sub for Point2 {
	type Output = Self;

	fn sub(self, other: Self) -> Self {
		Self {
			x: self.x - other.x,
			y: self.y - other.y,
		}
	}
}
impl Mul<f32> for Point2 {
	type Output = Self;

	fn mul(self, other: f32) -> Self {
		Self {
			x: self.x * other,
			y: self.y * other,
		}
	}
}
impl Div<f32> for Point2 {
	type Output = Self;

	fn div(self, other: f32) -> Self {
		Self {
			x: self.x / other,
			y: self.y / other,
		}
	}
}

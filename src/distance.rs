//! Traits for comparing distance between points and units.

use crate::geometry::Point2;
use std::{cmp::Ordering, vec::IntoIter};

/// Basic trait for comparing distance.
pub trait Distance: Into<Point2> {
	/// Calculates squared euclidean distance from `self` to `other`.
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		let a = self.into();
		let b = other.into();

		let dx = a.x - b.x;
		let dy = a.y - b.y;

		dx * dx + dy * dy
	}

	/// Calculates euclidean distance from `self` to `other`.
	#[inline]
	fn distance<P: Into<Point2>>(self, other: P) -> f32 {
		self.distance_squared(other).sqrt()
	}
	/// Checks if distance between `self` and `other` is less than given `distance`.
	#[inline]
	fn is_closer<P: Into<Point2>>(self, distance: f32, other: P) -> bool {
		self.distance_squared(other) < distance * distance
	}
	/// Checks if distance between `self` and `other` lies strictly between `min` and `max`.
	#[inline]
	fn is_within_band<P: Into<Point2>>(self, min: f32, max: f32, other: P) -> bool {
		let d = self.distance_squared(other);
		min * min < d && d < max * max
	}
}

impl<T: Into<Point2>> Distance for T {}

#[inline]
fn cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
	a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[inline]
fn cmp_by<T, P>(target: P) -> impl Fn(&T, &T) -> Ordering
where
	T: Distance + Copy,
	P: Into<Point2> + Copy,
{
	let f = move |u: &T| u.distance_squared(target);
	move |a, b| cmp(&f(a), &f(b))
}

/// Helper trait for iterators of items implementing [`Distance`].
pub trait DistanceIterator<T>
where
	Self: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
	/// Returns closest to `target` item in iterator.
	fn closest<P: Into<Point2> + Copy>(self, target: P) -> Option<T> {
		self.min_by(cmp_by(target))
	}
	/// Returns iterator of items sorted by distance to `target`.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and `O(n * log(n))` worst-case.
	fn sort_by_distance<P: Into<Point2> + Copy>(self, target: P) -> IntoIter<T> {
		let mut v = self.collect::<Vec<_>>();
		v.sort_by(cmp_by(target));
		v.into_iter()
	}
}

impl<I, T> DistanceIterator<T> for I
where
	I: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
}

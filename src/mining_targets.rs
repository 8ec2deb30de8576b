//! Approach points in front of mineral fields.
//!
//! Worker issuing gather on a mineral decelerates long before it reaches the field.
//! Moving it to a point right in front of the mineral first and queuing gather from there
//! keeps it at full speed, the point is chosen so that neighbouring fields don't block it.

use crate::{
	distance::*,
	geometry::Point2,
	unit::{MineralSite, Tagged},
	units::Units,
};
use rustc_hash::FxHashMap;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Calculates approach point for mineral at `mineral` position.
///
/// Point lies `radius` away from the mineral towards `anchor` (normally center of the expansion).
/// When another mineral is closer than `radius`, the point is moved to the intersection
/// of both `radius` circles facing the anchor. The last neighbour with a valid intersection wins.
pub fn mining_target<I>(mineral: Point2, neighbours: I, anchor: Point2, radius: f32) -> Point2
where
	I: IntoIterator<Item = Point2>,
{
	let mut target = mineral.towards(anchor, radius);
	for other in neighbours {
		if other == mineral || !other.is_closer(radius, mineral) {
			continue;
		}
		if let Some(points) = Point2::circle_intersection(mineral, radius, other, radius) {
			if let Some(closest) = points.iter().copied().closest(anchor) {
				target = closest;
			}
		}
	}
	target
}

/// Cache of approach points keyed by mineral position.
#[derive(Debug, Default, Clone)]
pub struct MiningTargets {
	targets: FxHashMap<Point2, Point2>,
}
impl MiningTargets {
	pub fn new() -> Self {
		Self::default()
	}
	/// Returns approach point of mineral at given position if calculated.
	pub fn get(&self, mineral: Point2) -> Option<Point2> {
		self.targets.get(&mineral).copied()
	}
	pub fn len(&self) -> usize {
		self.targets.len()
	}
	pub fn is_empty(&self) -> bool {
		self.targets.is_empty()
	}
	/// Checks if every given mineral already has its point.
	pub fn covers(&self, minerals: &Units<MineralSite>) -> bool {
		minerals.iter().all(|m| self.targets.contains_key(&m.position))
	}
	/// Recalculates points of all minerals if any of them is missing from cache.
	/// Returns `true` if recalculation happened.
	///
	/// Minerals are anchored on the closest expansion, or on `fallback` when expansions are unknown.
	pub fn refresh(
		&mut self,
		minerals: &Units<MineralSite>,
		expansions: &[Point2],
		fallback: Point2,
		radius: f32,
	) -> bool {
		if self.covers(minerals) {
			return false;
		}
		self.calculate(minerals, expansions, fallback, radius);
		true
	}
	/// Calculates points of all given minerals, replacing cached ones.
	pub fn calculate(
		&mut self,
		minerals: &Units<MineralSite>,
		expansions: &[Point2],
		fallback: Point2,
		radius: f32,
	) {
		let positions = minerals.iter().map(Tagged::position).collect::<Vec<_>>();
		let compute = |&mineral: &Point2| {
			let anchor = expansions.iter().copied().closest(mineral).unwrap_or(fallback);
			let neighbours = positions.iter().copied();
			(mineral, mining_target(mineral, neighbours, anchor, radius))
		};

		#[cfg(feature = "rayon")]
		let computed = positions.par_iter().map(compute).collect::<Vec<_>>();
		#[cfg(not(feature = "rayon"))]
		let computed = positions.iter().map(compute).collect::<Vec<_>>();

		debug!("Calculated approach points of {} mineral fields", computed.len());
		self.targets.extend(computed);
	}
}

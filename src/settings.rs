//! Tunable parameters of mining controller.

use crate::constants::*;
use num_traits::FromPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How workers assigned to gas are micro-managed.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, FromStr)]
#[enum_from_str(use_primitives)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GasMode {
	/// Gas workers go through the same boosted cycle as mineral workers.
	Boosted,
	/// Gas workers are only kept on their building, the game drives the cycle.
	/// Safe for rich geysers, where carried gas isn't reported.
	Plain,
}
impl Default for GasMode {
	fn default() -> Self {
		GasMode::Boosted
	}
}

/// Settings of [`MiningManager`](crate::manager::MiningManager).
///
/// ```
/// use sc2_speedmine::settings::{GasMode, MiningSettings};
///
/// let settings = MiningSettings::new().workers_per_gas(2).gas_mode(GasMode::Plain);
/// assert_eq!(settings.workers_per_gas, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MiningSettings {
	/// Distance between mineral and its approach point. [Default: `1.35`]
	pub mining_radius: f32,
	/// Maximum distance between mineral and working townhall. [Default: `10`]
	pub base_range: f32,
	/// Build progress townhall needs to be considered working. [Default: `0.9`]
	pub base_progress: f32,
	/// [Default: `2`]
	pub workers_per_mineral: usize,
	/// Workers per mineral during opening spread. [Default: `1`]
	pub workers_per_mineral_spread: usize,
	/// [Default: `3`]
	pub workers_per_gas: usize,
	/// Opening spread ends at this game time in seconds. [Default: `5`]
	pub spread_time: f32,
	/// Opening spread ends after this many mineral assignments. [Default: `9`]
	pub spread_assignments: usize,
	/// Drop-off point offset in townhall radii. [Default: `1.08`]
	pub return_distance_factor: f32,
	/// Distances to approach point of mineral at which boost is executed. [Default: `(0.75, 2)`]
	pub mineral_band: (f32, f32),
	/// Distances to drop-off point at which boost is executed. [Default: `(0.75, 2)`]
	pub return_band: (f32, f32),
	/// Boost only while used supply is below this. [Default: `198`]
	pub boost_supply_limit: u32,
	/// Boost only while banked minerals are below this. [Default: `1000`]
	pub boost_bank_limit: u32,
	/// Health workers handed out by selection should have. [Default: `0.5`]
	pub select_health: f32,
	/// Game loops assigned worker may be missing from snapshot before it's released. [Default: `64`]
	pub missing_grace_loops: u32,
	/// [Default: `Boosted`]
	pub gas_mode: GasMode,
}
impl Default for MiningSettings {
	fn default() -> Self {
		Self {
			mining_radius: MINING_RADIUS,
			base_range: BASE_RANGE,
			base_progress: BASE_PROGRESS,
			workers_per_mineral: WORKERS_PER_MINERAL,
			workers_per_mineral_spread: WORKERS_PER_MINERAL_SPREAD,
			workers_per_gas: WORKERS_PER_GAS,
			spread_time: SPREAD_TIME,
			spread_assignments: SPREAD_ASSIGNMENTS,
			return_distance_factor: RETURN_DISTANCE_FACTOR,
			mineral_band: MINERAL_BOOST_BAND,
			return_band: RETURN_BOOST_BAND,
			boost_supply_limit: BOOST_SUPPLY_LIMIT,
			boost_bank_limit: BOOST_BANK_LIMIT,
			select_health: SELECT_HEALTH,
			missing_grace_loops: MISSING_GRACE_LOOPS,
			gas_mode: GasMode::default(),
		}
	}
}
impl MiningSettings {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn mining_radius(mut self, radius: f32) -> Self {
		self.mining_radius = radius;
		self
	}
	pub fn base_range(mut self, range: f32) -> Self {
		self.base_range = range;
		self
	}
	pub fn workers_per_gas(mut self, workers: usize) -> Self {
		self.workers_per_gas = workers;
		self
	}
	/// Sets length (game time in seconds) and assignment limit of opening spread.
	pub fn spread(mut self, time: f32, assignments: usize) -> Self {
		self.spread_time = time;
		self.spread_assignments = assignments;
		self
	}
	/// Sets economy limits after which workers stop boosting.
	pub fn boost_limits(mut self, supply: u32, bank: u32) -> Self {
		self.boost_supply_limit = supply;
		self.boost_bank_limit = bank;
		self
	}
	pub fn missing_grace_loops(mut self, loops: u32) -> Self {
		self.missing_grace_loops = loops;
		self
	}
	pub fn gas_mode(mut self, mode: GasMode) -> Self {
		self.gas_mode = mode;
		self
	}

	/// Checks if opening spread is still going on.
	pub fn is_spreading(&self, time: f32, mineral_assignments: usize) -> bool {
		time < self.spread_time && mineral_assignments < self.spread_assignments
	}
	/// Maximum number of workers allowed on one mineral field right now.
	pub fn mineral_capacity(&self, time: f32, mineral_assignments: usize) -> usize {
		if self.is_spreading(time, mineral_assignments) {
			self.workers_per_mineral_spread
		} else {
			self.workers_per_mineral
		}
	}
}

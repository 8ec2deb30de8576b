//! Everything controller knows about the game on current step.

use crate::{
	constants::GAME_LOOPS_PER_SECOND,
	geometry::Point2,
	unit::{CollectionStructure, GasSite, Harvester, MineralSite},
	units::Units,
	World,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Player's resources and supply.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Economy {
	/// Banked minerals.
	pub minerals: u32,
	/// Supply used by all units.
	pub supply_used: u32,
}

/// Snapshot of the world taken at the beginning of step.
#[derive(Debug, Default, Clone)]
pub struct GameState {
	pub game_loop: u32,
	pub harvesters: Units<Harvester>,
	pub minerals: Units<MineralSite>,
	pub gas: Units<GasSite>,
	pub structures: Units<CollectionStructure>,
	/// Centers of all expansions on the map.
	pub expansions: Vec<Point2>,
	/// Bot's start location.
	pub start_location: Point2,
	pub economy: Economy,
}
impl GameState {
	/// Reads all snapshots from the world.
	pub fn observe<W: World + ?Sized>(world: &W) -> Self {
		Self {
			game_loop: world.game_loop(),
			harvesters: world.harvester_snapshot(),
			minerals: world.mineral_site_snapshot(),
			gas: world.gas_site_snapshot(),
			structures: world.collection_structure_snapshot(),
			expansions: world.expansion_locations(),
			start_location: world.start_location(),
			economy: world.economy(),
		}
	}
	/// Game time in seconds.
	pub fn time(&self) -> f32 {
		self.game_loop as f32 / GAME_LOOPS_PER_SECOND
	}
	/// Townhalls which count as working bases, i.e. complete enough.
	pub fn working_bases(&self, progress: f32) -> impl Iterator<Item = &CollectionStructure> {
		self.structures.iter().filter(move |s| s.build_progress > progress)
	}
	/// Fully constructed townhalls.
	pub fn ready_structures(&self) -> impl Iterator<Item = &CollectionStructure> {
		self.structures.iter().filter(|s| s.is_ready())
	}
	/// Mineral fields in sight right now.
	pub fn visible_minerals(&self) -> impl Iterator<Item = &MineralSite> {
		self.minerals.iter().filter(|m| m.is_visible() && !m.is_snapshot())
	}
}

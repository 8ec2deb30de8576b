// #![warn(missing_docs)]

//! Worker assignment and speed mining for StarCraft II bots.
//!
//! [`MiningManager`](manager::MiningManager) distributes workers between mineral fields
//! and gas buildings and micro-manages them so they don't slow down near resources.
//! It doesn't talk to the game directly, everything goes through the [`World`] trait
//! implemented by the bot.

#[macro_use]
extern crate num_derive;
#[macro_use]
pub extern crate speedmine_macro;
#[macro_use]
extern crate log;

/// The most frequent used items and various traits here.
/// Prefered usage: `use sc2_speedmine::prelude::*;`.
pub mod prelude {
	pub use crate::{
		action::{Command, Target},
		distance::*,
		game_state::{Economy, GameState},
		geometry::Point2,
		ids::AbilityId,
		ledger::{Assignment, SiteKind},
		manager::MiningManager,
		settings::{GasMode, MiningSettings},
		unit::{Carrying, CollectionStructure, DisplayType, GasSite, Harvester, MineralSite, Tagged, UnitOrder},
		units::Units,
		MiningResult, World,
	};
}

pub mod action;
pub mod catalog;
pub mod cleanup;
pub mod constants;
pub mod distance;
pub mod executor;
pub mod game_state;
pub mod geometry;
pub mod ids;
pub mod ledger;
pub mod manager;
pub mod mining_targets;
pub mod scheduler;
pub mod settings;
pub mod unit;
pub mod units;

use action::Command;
use game_state::Economy;
use geometry::Point2;
use std::error::Error;
use unit::{CollectionStructure, GasSite, Harvester, MineralSite};
use units::Units;

pub type MiningResult<T> = Result<T, Box<dyn Error>>;

/// Everything controller needs from the game.
///
/// Snapshots are taken once at the beginning of each step,
/// commands are sent at the end of executor pass in the order they were issued.
pub trait World {
	/// Current game loop.
	fn game_loop(&self) -> u32;
	/// Own workers.
	fn harvester_snapshot(&self) -> Units<Harvester>;
	/// All known mineral fields, including ones in fog of war.
	fn mineral_site_snapshot(&self) -> Units<MineralSite>;
	/// Own gas buildings, including ones under construction.
	fn gas_site_snapshot(&self) -> Units<GasSite>;
	/// Own townhalls, including ones under construction.
	fn collection_structure_snapshot(&self) -> Units<CollectionStructure>;
	/// Centers of all expansions on the map.
	fn expansion_locations(&self) -> Vec<Point2>;
	fn start_location(&self) -> Point2;
	/// Banked resources and supply, used to decide whether boosting still matters.
	///
	/// Default implementation reports empty bank, so workers are always boosted.
	fn economy(&self) -> Economy {
		Economy::default()
	}
	/// Gives command to worker with given tag.
	fn issue_command(&mut self, tag: u64, command: Command) -> MiningResult<()>;
}

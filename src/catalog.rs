//! Sites that can take new workers on current step.

use crate::{
	distance::*,
	game_state::GameState,
	ledger::{Ledger, SiteKind},
	settings::MiningSettings,
};
use itertools::Itertools;

/// Tags of resource sites open for assignment, refreshed every step.
#[derive(Debug, Default, Clone)]
pub struct SiteCatalog {
	/// Mineral fields sorted by distance to their townhall.
	pub minerals: Vec<u64>,
	/// Gas buildings in snapshot order.
	pub gas: Vec<u64>,
}
impl SiteCatalog {
	pub fn new() -> Self {
		Self::default()
	}
	/// Rebuilds both lists from current state and assignments.
	pub fn refresh(&mut self, state: &GameState, ledger: &Ledger, settings: &MiningSettings) {
		self.minerals = available_minerals(state, ledger, settings);
		self.gas = available_gas(state, ledger, settings);
	}
	pub fn has_minerals(&self) -> bool {
		!self.minerals.is_empty()
	}
	pub fn has_gas(&self) -> bool {
		!self.gas.is_empty()
	}
}

/// Visible mineral fields near working townhalls which have room for another worker.
///
/// Grouped by townhall, closest to townhall first. A field near two townhalls is listed once.
pub fn available_minerals(state: &GameState, ledger: &Ledger, settings: &MiningSettings) -> Vec<u64> {
	let capacity = settings.mineral_capacity(state.time(), ledger.mineral_assignments());

	state
		.working_bases(settings.base_progress)
		.flat_map(|base| {
			state
				.visible_minerals()
				.filter(|m| {
					m.position.is_closer(settings.base_range, base.position)
						&& !m.is_depleted()
						&& ledger.count(SiteKind::Mineral, m.tag) < capacity
				})
				.sort_by_distance(base)
				.map(|m| m.tag)
		})
		.unique()
		.collect()
}

/// Ready gas buildings with gas left and less than `workers_per_gas` workers.
pub fn available_gas(state: &GameState, ledger: &Ledger, settings: &MiningSettings) -> Vec<u64> {
	state
		.gas
		.iter()
		.filter(|g| {
			g.is_ready() && g.has_vespene() && ledger.count(SiteKind::Gas, g.tag) < settings.workers_per_gas
		})
		.map(|g| g.tag)
		.collect()
}

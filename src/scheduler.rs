//! Distribution of free workers between resource sites.
//!
//! Gas is served first, but only one worker per step, so that gas doesn't drain all free workers
//! before minerals get any. Minerals are filled afterwards: closest to start location while
//! opening spread lasts (which also keeps one worker per field), closest to worker later on.

use crate::{
	catalog::{available_gas, available_minerals, SiteCatalog},
	distance::*,
	game_state::GameState,
	geometry::Point2,
	ledger::{Ledger, SiteKind},
	settings::MiningSettings,
	unit::{Harvester, MineralSite},
};
use rustc_hash::FxHashSet;

/// What happened during one scheduler pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schedule {
	/// (worker, gas building) pairs assigned this pass.
	pub gas: Vec<(u64, u64)>,
	/// (worker, mineral field) pairs assigned this pass.
	pub minerals: Vec<(u64, u64)>,
	/// Workers pulled off oversaturated gas buildings.
	pub evicted: Vec<u64>,
}
impl Schedule {
	pub fn is_empty(&self) -> bool {
		self.gas.is_empty() && self.minerals.is_empty() && self.evicted.is_empty()
	}
	/// All (worker, site) pairs assigned this pass.
	pub fn assigned(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
		self.gas.iter().chain(&self.minerals).copied()
	}
}

/// Workers which are neither on minerals nor on gas, in snapshot order.
pub fn unassigned<'a>(
	state: &'a GameState,
	ledger: &'a Ledger,
	excluded: &'a FxHashSet<u64>,
) -> impl Iterator<Item = &'a Harvester> {
	state
		.harvesters
		.iter()
		.filter(move |h| !ledger.is_assigned(h.tag) && !excluded.contains(&h.tag))
}

/// Runs full pass: gas eviction and assignment, then minerals.
/// Refreshes `catalog` in between, so it reflects state after gas assignment.
pub fn schedule(
	state: &GameState,
	catalog: &mut SiteCatalog,
	ledger: &mut Ledger,
	settings: &MiningSettings,
	excluded: &FxHashSet<u64>,
) -> Schedule {
	let mut result = Schedule {
		evicted: evict_gas_surplus(ledger, settings),
		..Default::default()
	};
	assign_gas(state, ledger, settings, excluded, &mut result);

	catalog.minerals = available_minerals(state, ledger, settings);
	catalog.gas = available_gas(state, ledger, settings);
	assign_minerals(state, catalog, ledger, settings, excluded, &mut result);

	if !result.is_empty() {
		debug!(
			"Assigned {} workers to gas, {} to minerals, evicted {} from gas",
			result.gas.len(),
			result.minerals.len(),
			result.evicted.len()
		);
	}
	result
}

/// Pulls most recently assigned workers off gas buildings having more than `workers_per_gas`.
pub fn evict_gas_surplus(ledger: &mut Ledger, settings: &MiningSettings) -> Vec<u64> {
	let oversaturated = ledger
		.sites(SiteKind::Gas)
		.filter(|&g| ledger.count(SiteKind::Gas, g) > settings.workers_per_gas)
		.collect::<Vec<_>>();

	let mut evicted = Vec::new();
	for g in oversaturated {
		let ws = ledger.evict_surplus(SiteKind::Gas, g, settings.workers_per_gas);
		warn!("Gas {} had {} workers too many, released {:?}", g, ws.len(), ws);
		evicted.extend(ws);
	}
	evicted
}

/// Assigns at most one free worker to the first gas building with free slot.
fn assign_gas(
	state: &GameState,
	ledger: &mut Ledger,
	settings: &MiningSettings,
	excluded: &FxHashSet<u64>,
	result: &mut Schedule,
) {
	let gas = match available_gas(state, ledger, settings).first() {
		Some(&g) => g,
		None => return,
	};
	let worker = match unassigned(state, ledger, excluded).next() {
		Some(w) => w.tag,
		None => return,
	};

	match ledger.assign(worker, SiteKind::Gas, gas, settings.workers_per_gas) {
		Ok(()) => result.gas.push((worker, gas)),
		Err(e) => warn!("Can't assign worker to gas: {}", e),
	}
}

/// Assigns every free worker to the closest mineral field from catalog while there's room.
fn assign_minerals(
	state: &GameState,
	catalog: &SiteCatalog,
	ledger: &mut Ledger,
	settings: &MiningSettings,
	excluded: &FxHashSet<u64>,
	result: &mut Schedule,
) {
	let mut candidates = catalog
		.minerals
		.iter()
		.filter_map(|&m| state.minerals.get(m))
		.collect::<Vec<&MineralSite>>();
	let workers = unassigned(state, ledger, excluded)
		.map(|h| (h.tag, h.position))
		.collect::<Vec<_>>();
	let time = state.time();

	'workers: for (worker, position) in workers {
		let anchor = if time < settings.spread_time {
			state.start_location
		} else {
			position
		};

		loop {
			let capacity = settings.mineral_capacity(time, ledger.mineral_assignments());
			let index = match closest_index(&candidates, anchor) {
				Some(i) => i,
				// ran out of minerals
				None => break 'workers,
			};
			let mineral = candidates[index].tag;

			if ledger.count(SiteKind::Mineral, mineral) >= capacity {
				candidates.remove(index);
				continue;
			}
			if let Err(e) = ledger.assign(worker, SiteKind::Mineral, mineral, capacity) {
				warn!("Can't assign worker to minerals: {}", e);
				continue 'workers;
			}
			result.minerals.push((worker, mineral));

			// enough workers on this field, don't offer it to the rest
			if ledger.count(SiteKind::Mineral, mineral) >= capacity {
				candidates.remove(index);
			}
			continue 'workers;
		}
	}
}

fn closest_index(candidates: &[&MineralSite], anchor: Point2) -> Option<usize> {
	let closest = candidates.iter().copied().closest(anchor)?;
	candidates.iter().position(|m| m.tag == closest.tag)
}

//! Releasing workers from resources which can't be harvested anymore.

use crate::{
	game_state::GameState,
	ledger::{Ledger, SiteKind},
	settings::MiningSettings,
};
use rustc_hash::FxHashMap;

/// Workers released by one cleanup pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Released {
	/// Workers of mineral fields which are gone, out of sight or mined out.
	pub minerals: Vec<u64>,
	/// Workers of gas buildings which are gone or out of gas.
	pub gas: Vec<u64>,
	/// Workers which are gone themselves for longer than grace period.
	pub missing: Vec<u64>,
}
impl Released {
	pub fn is_empty(&self) -> bool {
		self.minerals.is_empty() && self.gas.is_empty() && self.missing.is_empty()
	}
	/// Tags of all released workers.
	pub fn all(&self) -> impl Iterator<Item = u64> + '_ {
		self.minerals.iter().chain(&self.gas).chain(&self.missing).copied()
	}
}

/// Remembers since when assigned workers are missing from snapshot.
///
/// Workers harvesting gas are hidden inside the building for a moment,
/// they shouldn't lose their slot because of that.
#[derive(Debug, Default, Clone)]
pub struct MissingHarvesters {
	// (worker, game loop it was first missed on)
	since: FxHashMap<u64, u32>,
}
impl MissingHarvesters {
	/// Game loop since which worker is missing, if it is.
	pub fn since(&self, harvester: u64) -> Option<u32> {
		self.since.get(&harvester).copied()
	}
	pub fn len(&self) -> usize {
		self.since.len()
	}
	pub fn is_empty(&self) -> bool {
		self.since.is_empty()
	}
}

/// Removes every assignment which is no longer valid in given state.
pub fn cleanup(
	state: &GameState,
	ledger: &mut Ledger,
	missing: &mut MissingHarvesters,
	settings: &MiningSettings,
) -> Released {
	let released = Released {
		minerals: release_minerals(state, ledger),
		gas: release_gas(state, ledger),
		missing: release_missing(state, ledger, missing, settings.missing_grace_loops),
	};
	if !released.is_empty() {
		debug!(
			"Released {} workers from minerals, {} from gas, {} missing",
			released.minerals.len(),
			released.gas.len(),
			released.missing.len()
		);
	}
	released
}

fn release_minerals(state: &GameState, ledger: &mut Ledger) -> Vec<u64> {
	let invalid = ledger
		.sites(SiteKind::Mineral)
		.filter(|&m| {
			state
				.minerals
				.get(m)
				.map_or(true, |m| !m.is_visible() || m.is_snapshot() || m.is_depleted())
		})
		.collect::<Vec<_>>();

	invalid
		.into_iter()
		.flat_map(|m| {
			trace!("Mineral {} can't be harvested anymore", m);
			ledger.release_site(SiteKind::Mineral, m)
		})
		.collect()
}

fn release_gas(state: &GameState, ledger: &mut Ledger) -> Vec<u64> {
	let invalid = ledger
		.sites(SiteKind::Gas)
		.filter(|&g| state.gas.get(g).map_or(true, |g| !g.has_vespene()))
		.collect::<Vec<_>>();

	let mut released = Vec::new();
	for g in invalid {
		trace!("Gas {} can't be harvested anymore", g);
		released.extend(ledger.release_site(SiteKind::Gas, g));
	}
	released
}

fn release_missing(
	state: &GameState,
	ledger: &mut Ledger,
	missing: &mut MissingHarvesters,
	grace: u32,
) -> Vec<u64> {
	// came back or not managed anymore
	missing
		.since
		.retain(|&w, _| ledger.is_assigned(w) && !state.harvesters.contains_tag(w));

	let absent = ledger
		.harvesters(SiteKind::Mineral)
		.chain(ledger.harvesters(SiteKind::Gas))
		.filter(|&w| !state.harvesters.contains_tag(w))
		.collect::<Vec<_>>();

	let mut released = Vec::new();
	for w in absent {
		let since = *missing.since.entry(w).or_insert(state.game_loop);
		if state.game_loop.saturating_sub(since) >= grace {
			trace!("Worker {} is missing since loop {}", w, since);
			ledger.release(w);
			missing.since.remove(&w);
			released.push(w);
		}
	}
	released
}

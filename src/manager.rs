//! Entry point of the controller, ties all passes into one step.

use crate::{
	action::Commander,
	catalog::SiteCatalog,
	cleanup::{cleanup, MissingHarvesters},
	distance::*,
	executor::{is_boost_active, SpeedMiner},
	game_state::GameState,
	geometry::Point2,
	ledger::{Ledger, SiteKind},
	mining_targets::MiningTargets,
	scheduler::schedule,
	settings::MiningSettings,
	unit::{Harvester, Tagged},
	MiningResult, World,
};
use rustc_hash::FxHashSet;

/// Worker assignment and speed mining controller.
///
/// Call [`simulate_step`](Self::simulate_step) once per game step,
/// everything else is optional.
///
/// ```no_run
/// # use sc2_speedmine::{prelude::*, World};
/// # fn run<W: World>(world: &mut W) -> MiningResult<()> {
/// let mut manager = MiningManager::new(MiningSettings::new().workers_per_gas(2));
/// manager.on_start(&*world);
/// loop {
/// 	manager.simulate_step(world)?;
/// }
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct MiningManager {
	settings: MiningSettings,
	ledger: Ledger,
	targets: MiningTargets,
	miner: SpeedMiner,
	catalog: SiteCatalog,
	// Workers taken away from mining by other managers
	excluded: FxHashSet<u64>,
	// Excluded because of removal, forgotten once gone from snapshot
	removed: FxHashSet<u64>,
	missing: MissingHarvesters,
	commander: Commander,
}
impl MiningManager {
	pub fn new(settings: MiningSettings) -> Self {
		Self {
			settings,
			..Default::default()
		}
	}

	/// Precalculates approach points of all known minerals.
	///
	/// Optional, points are calculated on first step anyway.
	pub fn on_start<W: World + ?Sized>(&mut self, world: &W) {
		let state = GameState::observe(world);
		self.refresh_targets(&state);
	}

	fn refresh_targets(&mut self, state: &GameState) {
		self.targets.refresh(
			&state.minerals,
			&state.expansions,
			state.start_location,
			self.settings.mining_radius,
		);
	}

	/// Runs one step: assigns free workers, commands assigned ones
	/// and releases workers from resources that can't be harvested anymore.
	///
	/// Returns error if the world refused to take a command.
	/// The step is still completed then, all other commands are sent.
	pub fn simulate_step<W: World + ?Sized>(&mut self, world: &mut W) -> MiningResult<()> {
		let state = GameState::observe(&*world);
		self.refresh_targets(&state);
		self.forget_removed(&state);

		self.catalog.refresh(&state, &self.ledger, &self.settings);
		let scheduled = schedule(
			&state,
			&mut self.catalog,
			&mut self.ledger,
			&self.settings,
			&self.excluded,
		);
		for w in &scheduled.evicted {
			self.miner.forget(*w);
		}
		for (worker, site) in scheduled.assigned() {
			let position = state
				.minerals
				.get(site)
				.map(Tagged::position)
				.or_else(|| state.gas.get(site).map(Tagged::position));
			if let Some(position) = position {
				self.miner.tie_closest(&state, worker, position);
			}
		}

		self.miner.execute(
			&state,
			&self.ledger,
			&self.targets,
			&self.settings,
			&self.excluded,
			&mut self.commander,
		);
		let flushed = self.commander.flush(world);

		let released = cleanup(&state, &mut self.ledger, &mut self.missing, &self.settings);
		for w in released.all() {
			self.miner.forget(w);
		}

		let sent = flushed?;
		if sent > 0 {
			trace!("Sent {} commands on loop {}", sent, state.game_loop);
		}
		Ok(())
	}

	// Dead workers never come back, no need to keep them excluded
	fn forget_removed(&mut self, state: &GameState) {
		let excluded = &mut self.excluded;
		self.removed.retain(|tag| {
			let present = state.harvesters.contains_tag(*tag);
			if !present {
				excluded.remove(tag);
			}
			present
		});
	}

	/// Stops managing the worker, e.g. when it died.
	///
	/// Tag is forgotten as soon as it's gone from snapshot.
	pub fn notify_harvester_removed(&mut self, tag: u64) {
		if let Some(assignment) = self.ledger.release(tag) {
			debug!("Worker {} removed from {:?} {}", tag, assignment.kind, assignment.site);
		}
		self.miner.forget(tag);
		self.excluded.insert(tag);
		self.removed.insert(tag);
	}

	/// Takes worker away from mining for other use (building, scouting, ...).
	///
	/// Healthy mineral workers with empty hands are preferred, closest to `near`.
	/// Otherwise closest of all managed workers is returned.
	/// Selected worker won't be managed until [`reclaim_harvester`](Self::reclaim_harvester) is called.
	pub fn select_harvester<W: World + ?Sized>(&mut self, world: &W, near: Point2) -> Option<Harvester> {
		let harvesters = world.harvester_snapshot();
		let managed = harvesters
			.iter()
			.filter(|h| !self.excluded.contains(&h.tag))
			.collect::<Vec<_>>();

		let preferred = managed
			.iter()
			.copied()
			.filter(|h| {
				self.ledger
					.assignment(h.tag)
					.map_or(false, |a| a.kind == SiteKind::Mineral)
					&& !h.is_carrying_resource()
					&& h.health_percentage > self.settings.select_health
			})
			.closest(near);
		let selected = preferred
			.or_else(|| managed.iter().copied().closest(near))
			.cloned()?;

		self.ledger.release(selected.tag);
		self.miner.forget(selected.tag);
		self.excluded.insert(selected.tag);
		debug!("Worker {} selected for other use", selected.tag);
		Some(selected)
	}

	/// Gives previously selected or removed worker back to mining.
	pub fn reclaim_harvester(&mut self, tag: u64) {
		self.removed.remove(&tag);
		if self.excluded.remove(&tag) {
			debug!("Worker {} reclaimed", tag);
		}
	}

	/// Changes gas saturation, surplus workers are pulled off on the next step.
	pub fn set_workers_per_gas(&mut self, workers: usize) {
		self.settings.workers_per_gas = workers;
	}

	/// Checks if workers would be boosted in given state.
	pub fn is_boosting(&self, state: &GameState) -> bool {
		is_boost_active(state.economy, &self.settings)
	}
	/// Checks if worker is excluded from mining.
	pub fn is_excluded(&self, tag: u64) -> bool {
		self.excluded.contains(&tag)
	}

	pub fn ledger(&self) -> &Ledger {
		&self.ledger
	}
	pub fn settings(&self) -> &MiningSettings {
		&self.settings
	}
	pub fn targets(&self) -> &MiningTargets {
		&self.targets
	}
	pub fn catalog(&self) -> &SiteCatalog {
		&self.catalog
	}
	pub fn miner(&self) -> &SpeedMiner {
		&self.miner
	}
	pub fn missing(&self) -> &MissingHarvesters {
		&self.missing
	}
}

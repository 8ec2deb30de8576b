//! Speed mining micro.
//!
//! Every step each assigned worker is classified by [`classify`] from its current orders and cargo,
//! and gets at most a couple of commands advancing it through the harvest cycle.
//! The trick: when worker comes close to its mineral (or townhall on the way back),
//! it's ordered to move to a point right in front of it with the gather (or return)
//! queued after the move. Worker keeps full speed until the very end instead of slowing down
//! on approach, which noticeably increases income.
//! Gas workers are boosted only on the way back, they're sent into the building with plain gather.

use crate::{
	action::{Command, Commander, Target},
	distance::*,
	game_state::{Economy, GameState},
	geometry::Point2,
	ledger::{Assignment, Ledger, SiteKind},
	mining_targets::MiningTargets,
	settings::MiningSettings,
	unit::{CollectionStructure, Harvester, Tagged},
};
use rustc_hash::{FxHashMap, FxHashSet};

/// What assigned worker needs right now.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HarvestState {
	/// Gathering some other resource than it's assigned to.
	MisAssigned,
	/// Heading back to townhall with cargo, has free slot in order queue.
	Returning,
	/// Heading to its resource, has free slot in order queue.
	Approaching,
	/// Idle or not moving anywhere.
	Stalled,
	/// Holding resource, but not bringing it back.
	StuckCarrying,
	/// Already executing queued commands, nothing to do.
	InFlight,
}

/// Classifies worker assigned to resource with `site` tag.
///
/// Checks are done in order, first matching wins.
pub fn classify(worker: &Harvester, site: u64) -> HarvestState {
	let short_queue = worker.orders.len() < 2;

	if worker.is_gathering() && worker.target_tag() != Some(site) {
		HarvestState::MisAssigned
	} else if (worker.is_returning() || worker.is_carrying_resource()) && short_queue {
		HarvestState::Returning
	} else if !worker.is_returning() && short_queue {
		HarvestState::Approaching
	} else if worker.is_idle() || !worker.is_moving() {
		HarvestState::Stalled
	} else if !worker.is_returning() && worker.is_carrying_resource() {
		HarvestState::StuckCarrying
	} else {
		HarvestState::InFlight
	}
}

/// Checks if economy is in a state where boosting still matters.
pub fn is_boost_active(economy: Economy, settings: &MiningSettings) -> bool {
	economy.supply_used < settings.boost_supply_limit && economy.minerals < settings.boost_bank_limit
}

/// Point in front of mineral, with the band of distances where boost is executed.
struct Approach {
	point: Point2,
	band: (f32, f32),
}

/// Issues speed mining commands and remembers which townhall each worker returns to.
#[derive(Debug, Default, Clone)]
pub struct SpeedMiner {
	// (worker, townhall)
	townhalls: FxHashMap<u64, u64>,
}
impl SpeedMiner {
	pub fn new() -> Self {
		Self::default()
	}
	/// Ties worker to townhall it should bring resources to.
	pub fn tie(&mut self, harvester: u64, structure: u64) {
		self.townhalls.insert(harvester, structure);
	}
	pub fn forget(&mut self, harvester: u64) {
		self.townhalls.remove(&harvester);
	}
	/// Townhall worker is currently tied to, if any.
	pub fn tied(&self, harvester: u64) -> Option<u64> {
		self.townhalls.get(&harvester).copied()
	}
	/// Ties worker to ready townhall closest to given point.
	pub fn tie_closest(&mut self, state: &GameState, harvester: u64, to: Point2) {
		if let Some(th) = closest_ready(state, to) {
			self.tie(harvester, th.tag);
		}
	}

	/// Returns townhall worker is tied to, retying it to the closest one if the old is gone.
	fn resolve<'a>(&mut self, state: &'a GameState, worker: &Harvester) -> Option<&'a CollectionStructure> {
		if let Some(th) = self
			.tied(worker.tag)
			.and_then(|tag| state.structures.get(tag))
			.filter(|th| th.is_ready())
		{
			return Some(th);
		}
		let th = closest_ready(state, worker.position)?;
		trace!("Worker {} retied to townhall {}", worker.tag, th.tag);
		self.tie(worker.tag, th.tag);
		Some(th)
	}

	/// Commands all managed workers for current step.
	pub fn execute(
		&mut self,
		state: &GameState,
		ledger: &Ledger,
		targets: &MiningTargets,
		settings: &MiningSettings,
		excluded: &FxHashSet<u64>,
		commander: &mut Commander,
	) {
		let boost = is_boost_active(state.economy, settings);

		for worker in state.harvesters.iter().filter(|h| !excluded.contains(&h.tag)) {
			match ledger.assignment(worker.tag) {
				Some(Assignment {
					kind: SiteKind::Mineral,
					site,
				}) => {
					// gone minerals are released by cleanup
					let mineral = match state.minerals.get(site) {
						Some(m) => m,
						None => continue,
					};
					if boost {
						let approach = Approach {
							point: targets.get(mineral.position).unwrap_or(mineral.position),
							band: settings.mineral_band,
						};
						self.boost(state, worker, site, Some(approach), settings, commander);
					} else {
						plain_minerals(worker, site, commander);
					}
				}
				Some(Assignment {
					kind: SiteKind::Gas,
					site,
				}) => {
					if !state.gas.get(site).map_or(false, |g| g.has_vespene()) {
						continue;
					}
					if boost && settings.gas_mode.is_boosted() {
						self.boost(state, worker, site, None, settings, commander);
					} else {
						let th = self.resolve(state, worker).map(Tagged::tag);
						plain_gas(worker, site, th, commander);
					}
				}
				None => fallback(state, worker, commander),
			}
		}
	}

	/// Advances worker through boosted cycle.
	/// Without `approach` worker isn't boosted on the way to its resource.
	fn boost(
		&mut self,
		state: &GameState,
		worker: &Harvester,
		site: u64,
		approach: Option<Approach>,
		settings: &MiningSettings,
		commander: &mut Commander,
	) {
		let worker_state = classify(worker, site);
		trace!("Worker {} on {} is {:?}", worker.tag, site, worker_state);

		match worker_state {
			HarvestState::MisAssigned => {
				commander.command(worker, Command::smart(Target::Tag(site), false));
			}
			HarvestState::Returning => {
				let th = match self.resolve(state, worker) {
					Some(th) => th,
					None => return,
				};
				let drop_off = th
					.position
					.towards(worker.position, th.radius * settings.return_distance_factor);
				let (min, max) = settings.return_band;

				if worker.position.is_within_band(min, max, drop_off) {
					commander.command(worker, Command::move_to(drop_off, false));
					commander.command(worker, Command::smart(Target::Tag(th.tag), true));
				} else if !worker.is_returning() {
					commander.command(worker, Command::smart(Target::Tag(th.tag), false));
				}
			}
			HarvestState::Approaching => match approach {
				Some(Approach { point, band: (min, max) }) => {
					if worker.position.is_within_band(min, max, point) || worker.is_idle() {
						commander.command(worker, Command::move_to(point, false));
						commander.command(worker, Command::smart(Target::Tag(site), true));
					}
				}
				None => {
					if worker.target_tag() != Some(site) {
						commander.command(worker, Command::gather(site, false));
					}
				}
			},
			HarvestState::Stalled => {
				if worker.is_carrying_resource() {
					commander.command(worker, Command::return_resource(false));
				} else {
					commander.command(worker, Command::gather(site, false));
				}
			}
			HarvestState::StuckCarrying => {
				commander.command(worker, Command::return_resource(false));
			}
			HarvestState::InFlight => {}
		}
	}
}

fn closest_ready(state: &GameState, to: Point2) -> Option<&CollectionStructure> {
	state.ready_structures().closest(to)
}

/// Mining without boost: just keep worker gathering its mineral.
fn plain_minerals(worker: &Harvester, mineral: u64, commander: &mut Commander) {
	if worker.is_carrying_vespene() {
		commander.command(worker, Command::return_resource(false));
	} else if !worker.is_carrying_minerals()
		&& (!worker.is_gathering() || worker.target_tag() != Some(mineral))
	{
		commander.command(worker, Command::gather(mineral, false));
	}
}

/// Keeps worker on its gas building, leaving the cycle to the game.
///
/// Doesn't look at cargo, since gas from rich geysers isn't reported.
fn plain_gas(worker: &Harvester, gas: u64, townhall: Option<u64>, commander: &mut Commander) {
	let townhall = match townhall {
		Some(th) => th,
		None => return,
	};
	let target = worker.target_tag();
	if target != Some(gas) && target != Some(townhall) {
		commander.command(worker, Command::gather(gas, false));
	}
}

/// Worker without assignment mines the closest visible mineral, if it isn't mining already.
fn fallback(state: &GameState, worker: &Harvester, commander: &mut Commander) {
	if worker.is_collecting() {
		return;
	}
	if let Some(m) = state.visible_minerals().closest(worker.position) {
		trace!("Worker {} has nothing to do, sending to mineral {}", worker.tag, m.tag);
		commander.command(worker, Command::gather(m.tag, false));
	}
}

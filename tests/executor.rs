mod common;

use common::*;
use sc2_speedmine::{
	action::Commander,
	executor::{classify, HarvestState, SpeedMiner},
	ledger::Ledger,
	mining_targets::MiningTargets,
	prelude::*,
};
use rustc_hash::FxHashSet;

const SITE: u64 = 100;
const OTHER: u64 = 101;

fn worker(carrying: Carrying, orders: &[(AbilityId, Target)]) -> Harvester {
	let mut h = Harvester::new(1, Point2::new(0.0, 0.0));
	h.carrying = carrying;
	h.orders = orders.iter().map(|&(a, t)| UnitOrder::new(a, t)).collect();
	h
}

#[test]
fn classification() {
	use AbilityId::*;
	let pos = Target::Pos(Point2::new(1.0, 1.0));

	let cases = vec![
		(worker(Carrying::Nothing, &[(HarvestGather, Target::Tag(OTHER))]), HarvestState::MisAssigned),
		(worker(Carrying::Minerals, &[]), HarvestState::Returning),
		(worker(Carrying::Nothing, &[(HarvestReturn, Target::None)]), HarvestState::Returning),
		(worker(Carrying::Nothing, &[]), HarvestState::Approaching),
		(worker(Carrying::Nothing, &[(HarvestGather, Target::Tag(SITE))]), HarvestState::Approaching),
		(
			worker(Carrying::Nothing, &[(HarvestGather, Target::Tag(SITE)), (HarvestGather, Target::Tag(SITE))]),
			HarvestState::Stalled,
		),
		(
			worker(Carrying::Minerals, &[(MoveMove, pos), (MoveMove, pos)]),
			HarvestState::StuckCarrying,
		),
		(
			worker(Carrying::Nothing, &[(MoveMove, pos), (Smart, Target::Tag(SITE))]),
			HarvestState::InFlight,
		),
		(
			worker(Carrying::Minerals, &[(HarvestReturn, Target::None), (MoveMove, pos)]),
			HarvestState::Stalled,
		),
	];

	for (i, (h, expected)) in cases.into_iter().enumerate() {
		assert_eq!(classify(&h, SITE), expected, "case {}", i);
	}
}

/// Base with one mineral to the west of the townhall and one assigned worker.
struct Setup {
	state: GameState,
	ledger: Ledger,
	targets: MiningTargets,
	settings: MiningSettings,
}
impl Setup {
	fn new(worker_pos: Point2) -> Self {
		let mut state = GameState {
			game_loop: LATE,
			start_location: BASE,
			expansions: vec![BASE],
			..Default::default()
		};
		state.structures.push(CollectionStructure::new(TOWNHALL, BASE));
		state
			.minerals
			.push(MineralSite::new(SITE, BASE + Point2::new(-7.0, 0.0)));
		state.gas.push(GasSite::new(GAS_TAGS, BASE + Point2::new(0.0, -8.0)));
		state.harvesters.push(Harvester::new(WORKER_TAGS, worker_pos));

		let settings = MiningSettings::default();
		let mut targets = MiningTargets::new();
		targets.refresh(&state.minerals, &state.expansions, BASE, settings.mining_radius);

		let mut ledger = Ledger::new();
		ledger.assign(WORKER_TAGS, SiteKind::Mineral, SITE, 2).unwrap();

		Self {
			state,
			ledger,
			targets,
			settings,
		}
	}
	fn worker(&mut self) -> &mut Harvester {
		self.state.harvesters.get_mut(WORKER_TAGS).unwrap()
	}
	fn mineral_target(&self) -> Point2 {
		self.targets.get(BASE + Point2::new(-7.0, 0.0)).unwrap()
	}
	fn run(&self, miner: &mut SpeedMiner) -> Vec<Command> {
		let mut commander = Commander::default();
		miner.execute(
			&self.state,
			&self.ledger,
			&self.targets,
			&self.settings,
			&FxHashSet::default(),
			&mut commander,
		);
		commander.get(WORKER_TAGS).to_vec()
	}
}

#[test]
fn approaching_worker_is_boosted_near_mineral() {
	let setup = Setup::new(BASE + Point2::new(-4.5, 0.0));
	let target = setup.mineral_target();
	assert!((target.x - (BASE.x - 7.0 + 1.35)).abs() < 1e-3);

	let commands = setup.run(&mut SpeedMiner::new());
	assert_eq!(
		commands,
		vec![
			Command::move_to(target, false),
			Command::smart(Target::Tag(SITE), true),
		]
	);
}

#[test]
fn approaching_worker_far_away_is_left_alone() {
	let mut setup = Setup::new(BASE + Point2::new(0.0, 3.0));
	setup.worker().orders = vec![UnitOrder::new(AbilityId::HarvestGather, Target::Tag(SITE))];

	assert!(setup.run(&mut SpeedMiner::new()).is_empty());
}

#[test]
fn returning_worker_is_boosted_near_townhall() {
	let mut setup = Setup::new(BASE + Point2::new(-4.0, 0.0));
	setup.worker().carrying = Carrying::Minerals;
	setup.worker().orders = vec![UnitOrder::new(AbilityId::HarvestReturn, Target::None)];

	let mut miner = SpeedMiner::new();
	let commands = setup.run(&mut miner);
	let drop_off = BASE.towards(BASE + Point2::new(-4.0, 0.0), 2.75 * 1.08);

	assert_eq!(
		commands,
		vec![
			Command::move_to(drop_off, false),
			Command::smart(Target::Tag(TOWNHALL), true),
		]
	);
	assert_eq!(miner.tied(WORKER_TAGS), Some(TOWNHALL));
}

#[test]
fn carrying_worker_far_from_townhall_is_sent_back() {
	let mut setup = Setup::new(BASE + Point2::new(-6.0, 0.0));
	setup.worker().carrying = Carrying::Minerals;

	let commands = setup.run(&mut SpeedMiner::new());
	assert_eq!(commands, vec![Command::smart(Target::Tag(TOWNHALL), false)]);
}

#[test]
fn misassigned_worker_is_redirected() {
	let mut setup = Setup::new(BASE + Point2::new(-3.0, 0.0));
	setup.worker().orders = vec![UnitOrder::new(AbilityId::HarvestGather, Target::Tag(OTHER))];

	let commands = setup.run(&mut SpeedMiner::new());
	assert_eq!(commands, vec![Command::smart(Target::Tag(SITE), false)]);
}

#[test]
fn stalled_worker_is_restarted() {
	let mut setup = Setup::new(BASE + Point2::new(-3.0, 0.0));
	let stop = UnitOrder::new(AbilityId::HoldPosition, Target::None);
	setup.worker().orders = vec![stop, stop];

	assert_eq!(setup.run(&mut SpeedMiner::new()), vec![Command::gather(SITE, false)]);

	setup.worker().carrying = Carrying::Minerals;
	assert_eq!(
		setup.run(&mut SpeedMiner::new()),
		vec![Command::return_resource(false)]
	);
}

#[test]
fn no_boost_when_floating_minerals() {
	let mut setup = Setup::new(BASE + Point2::new(-4.5, 0.0));
	setup.state.economy.minerals = 1500;

	assert_eq!(setup.run(&mut SpeedMiner::new()), vec![Command::gather(SITE, false)]);

	// already gathering, nothing to repeat
	setup.worker().orders = vec![UnitOrder::new(AbilityId::HarvestGather, Target::Tag(SITE))];
	assert!(setup.run(&mut SpeedMiner::new()).is_empty());
}

#[test]
fn gas_worker_is_boosted_only_on_the_way_back() {
	let mut setup = Setup::new(BASE + Point2::new(0.0, -4.0));
	setup.ledger.release(WORKER_TAGS);
	setup
		.ledger
		.assign(WORKER_TAGS, SiteKind::Gas, GAS_TAGS, 3)
		.unwrap();

	// straight into the building
	assert_eq!(setup.run(&mut SpeedMiner::new()), vec![Command::gather(GAS_TAGS, false)]);
	setup.worker().orders = vec![UnitOrder::new(AbilityId::HarvestGather, Target::Tag(GAS_TAGS))];
	assert!(setup.run(&mut SpeedMiner::new()).is_empty());

	setup.worker().carrying = Carrying::Vespene;
	setup.worker().orders = vec![UnitOrder::new(AbilityId::HarvestReturn, Target::None)];
	let drop_off = BASE.towards(BASE + Point2::new(0.0, -4.0), 2.75 * 1.08);
	assert_eq!(
		setup.run(&mut SpeedMiner::new()),
		vec![
			Command::move_to(drop_off, false),
			Command::smart(Target::Tag(TOWNHALL), true),
		]
	);
}

#[test]
fn plain_gas_mode_only_keeps_worker_on_building() {
	let mut setup = Setup::new(BASE + Point2::new(0.0, -4.0));
	setup.settings = MiningSettings::new().gas_mode(GasMode::Plain);
	setup.ledger.release(WORKER_TAGS);
	setup
		.ledger
		.assign(WORKER_TAGS, SiteKind::Gas, GAS_TAGS, 3)
		.unwrap();

	assert_eq!(setup.run(&mut SpeedMiner::new()), vec![Command::gather(GAS_TAGS, false)]);

	// bringing gas back to townhall is fine as well
	setup.worker().orders = vec![UnitOrder::new(AbilityId::Smart, Target::Tag(TOWNHALL))];
	assert!(setup.run(&mut SpeedMiner::new()).is_empty());
}

#[test]
fn destroyed_townhall_is_replaced() {
	let mut setup = Setup::new(BASE + Point2::new(-4.0, 0.0));
	setup.worker().carrying = Carrying::Minerals;
	let other = BASE + Point2::new(-20.0, 0.0);
	setup.state.structures.push(CollectionStructure::new(TOWNHALL + 1, other));

	let mut miner = SpeedMiner::new();
	miner.tie(WORKER_TAGS, TOWNHALL);
	setup.state.structures.remove(TOWNHALL);

	let commands = setup.run(&mut miner);
	assert_eq!(commands, vec![Command::smart(Target::Tag(TOWNHALL + 1), false)]);
	assert_eq!(miner.tied(WORKER_TAGS), Some(TOWNHALL + 1));
}

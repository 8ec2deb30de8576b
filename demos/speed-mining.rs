#[macro_use]
extern crate log;

use clap::Parser;
use rustc_hash::FxHashMap;
use sc2_speedmine::prelude::*;

#[derive(Parser)]
#[clap(version, author)]
struct Args {
	/// Number of game loops to simulate
	#[clap(short, long, default_value = "4032")]
	loops: u32,
	/// Number of workers at start
	#[clap(short, long, default_value = "12")]
	workers: usize,
	/// Build gas building next to the base
	#[clap(long)]
	gas: bool,
	/// How gas workers are managed
	#[clap(long, default_value = "Boosted")]
	gas_mode: GasMode,
	#[clap(long, default_value = "3")]
	workers_per_gas: usize,
	/// Logging level (off, error, warn, info, debug, trace)
	#[clap(long, default_value = "info")]
	log_level: log::LevelFilter,
}

// Rough values of the game on `Faster` speed
const WORKER_SPEED: f32 = 3.94 / 22.4;
const MINING_LOOPS: u32 = 64;
const GAS_LOOPS: u32 = 32;
const CARRY: u32 = 5;
const CARRY_GAS: u32 = 4;

const TOWNHALL: u64 = 1;
const GAS: u64 = 2;

/// Very simple model of one base: workers walk at constant speed and never collide.
#[derive(Default)]
struct ToyWorld {
	game_loop: u32,
	workers: Units<Harvester>,
	minerals: Units<MineralSite>,
	gas: Units<GasSite>,
	townhall: CollectionStructure,
	minerals_bank: u32,
	vespene_bank: u32,
	// Loop when worker started harvesting
	harvesting: FxHashMap<u64, u32>,
	// Resource worker should go back to after return
	last_site: FxHashMap<u64, u64>,
}

impl ToyWorld {
	fn new(args: &Args) -> Self {
		let base = Point2::new(50.5, 50.5);
		let mut world = Self {
			townhall: CollectionStructure::new(TOWNHALL, base),
			..Default::default()
		};
		let fields: [(f32, f32); 8] = [
			(-7.0, -3.0),
			(-7.0, -2.0),
			(-7.5, -1.0),
			(-7.5, 0.0),
			(-7.5, 1.0),
			(-7.0, 2.0),
			(-7.0, 3.0),
			(-6.5, 4.0),
		];
		world.minerals = fields
			.iter()
			.enumerate()
			.map(|(i, &offset)| MineralSite::new(100 + i as u64, base + Point2::from(offset)))
			.collect();
		if args.gas {
			world.gas.push(GasSite::new(GAS, base + Point2::new(0.0, -7.5)));
		}
		world.workers = (0..args.workers as u64)
			.map(|i| Harvester::new(1000 + i, base + Point2::new(-3.0, i as f32 * 0.3 - 1.5)))
			.collect();
		world
	}

	fn site_position(&self, tag: u64) -> Option<(Point2, f32)> {
		if tag == TOWNHALL {
			return Some((self.townhall.position, self.townhall.radius));
		}
		self.minerals
			.get(tag)
			.map(|m| (m.position, m.radius))
			.or_else(|| self.gas.get(tag).map(|g| (g.position, g.radius)))
	}

	fn advance(&mut self) {
		self.game_loop += 1;
		let tags = self.workers.tags().copied().collect::<Vec<_>>();
		for tag in tags {
			self.advance_worker(tag);
		}
	}

	fn advance_worker(&mut self, tag: u64) {
		let mut w = match self.workers.remove(tag) {
			Some(w) => w,
			None => return,
		};
		if let Some(order) = w.orders.first().copied() {
			match (order.ability, order.target) {
				(AbilityId::MoveMove, Target::Pos(p)) => {
					if walk(&mut w, p, 0.0) {
						w.orders.remove(0);
					}
				}
				(AbilityId::HarvestGather, Target::Tag(site)) => self.gather(&mut w, site),
				(AbilityId::HarvestReturn, _) => self.bring_back(&mut w),
				_ => {
					w.orders.remove(0);
				}
			}
		}
		self.workers.push(w);
	}

	fn gather(&mut self, w: &mut Harvester, site: u64) {
		let (pos, radius) = match self.site_position(site) {
			Some(s) => s,
			None => {
				w.orders.clear();
				return;
			}
		};
		let range = radius + w.radius;
		if !walk(w, pos, range) {
			return;
		}
		let started = *self.harvesting.entry(w.tag).or_insert(self.game_loop);
		let is_gas = self.gas.contains_tag(site);
		let needed = if is_gas { GAS_LOOPS } else { MINING_LOOPS };
		if self.game_loop - started < needed {
			return;
		}

		self.harvesting.remove(&w.tag);
		if is_gas {
			w.carrying = Carrying::Vespene;
		} else {
			w.carrying = Carrying::Minerals;
			if let Some(m) = self.minerals.get_mut(site) {
				m.mineral_contents = m.mineral_contents.map(|c| c.saturating_sub(CARRY));
			}
		}
		self.last_site.insert(w.tag, site);
		w.orders = vec![UnitOrder::new(AbilityId::HarvestReturn, Target::None)];
	}

	fn bring_back(&mut self, w: &mut Harvester) {
		if !w.is_carrying_resource() {
			w.orders.remove(0);
			return;
		}
		let range = self.townhall.radius + w.radius;
		if !walk(w, self.townhall.position, range) {
			return;
		}
		match w.carrying {
			Carrying::Minerals => self.minerals_bank += CARRY,
			Carrying::Vespene => self.vespene_bank += CARRY_GAS,
			Carrying::Nothing => {}
		}
		w.carrying = Carrying::Nothing;
		w.orders = match self.last_site.get(&w.tag) {
			Some(&site) => vec![UnitOrder::new(AbilityId::HarvestGather, Target::Tag(site))],
			None => vec![],
		};
	}
}

/// Moves worker towards `target` until it's `range` away. Returns `true` when arrived.
fn walk(w: &mut Harvester, target: Point2, range: f32) -> bool {
	let distance = w.position.distance(target) - range;
	if distance <= WORKER_SPEED {
		if distance > 0.0 {
			w.position = w.position.towards(target, distance);
		}
		return true;
	}
	w.position = w.position.towards(target, WORKER_SPEED);
	false
}

impl World for ToyWorld {
	fn game_loop(&self) -> u32 {
		self.game_loop
	}
	fn harvester_snapshot(&self) -> Units<Harvester> {
		self.workers.clone()
	}
	fn mineral_site_snapshot(&self) -> Units<MineralSite> {
		self.minerals.clone()
	}
	fn gas_site_snapshot(&self) -> Units<GasSite> {
		self.gas.clone()
	}
	fn collection_structure_snapshot(&self) -> Units<CollectionStructure> {
		std::iter::once(self.townhall.clone()).collect()
	}
	fn expansion_locations(&self) -> Vec<Point2> {
		vec![self.townhall.position]
	}
	fn start_location(&self) -> Point2 {
		self.townhall.position
	}
	fn economy(&self) -> Economy {
		Economy {
			minerals: self.minerals_bank,
			supply_used: self.workers.len() as u32,
		}
	}
	fn issue_command(&mut self, tag: u64, command: Command) -> MiningResult<()> {
		let site = match command.target {
			Target::Tag(t) => Some(t),
			_ => None,
		};
		// right click on resource or townhall is translated like the game does
		let ability = match (command.ability, site) {
			(AbilityId::Smart, Some(TOWNHALL)) => AbilityId::HarvestReturn,
			(AbilityId::Smart, Some(_)) => AbilityId::HarvestGather,
			(ability, _) => ability,
		};
		let w = self
			.workers
			.get_mut(tag)
			.ok_or_else(|| format!("Worker {} doesn't exist", tag))?;
		let order = UnitOrder::new(ability, command.target);

		if command.queue {
			w.orders.push(order);
		} else {
			self.harvesting.remove(&tag);
			w.orders = vec![order];
		}
		Ok(())
	}
}

fn main() -> MiningResult<()> {
	let args = Args::parse();
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
		})
		.level(args.log_level)
		.chain(std::io::stdout())
		.apply()?;

	let mut world = ToyWorld::new(&args);
	let settings = MiningSettings::new()
		.gas_mode(args.gas_mode)
		.workers_per_gas(args.workers_per_gas);
	let mut manager = MiningManager::new(settings);
	manager.on_start(&world);

	for _ in 0..args.loops {
		manager.simulate_step(&mut world)?;
		world.advance();

		if world.game_loop % 672 == 0 {
			info!(
				"{:.0}s: {} minerals, {} gas",
				world.game_loop as f32 / 22.4,
				world.minerals_bank,
				world.vespene_bank
			);
		}
	}

	println!(
		"Collected {} minerals and {} gas in {} loops with {} workers",
		world.minerals_bank, world.vespene_bank, args.loops, args.workers
	);
	Ok(())
}

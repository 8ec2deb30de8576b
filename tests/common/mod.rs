#![allow(dead_code)]

use sc2_speedmine::prelude::*;
use std::f32::consts::PI;

/// World which doesn't simulate anything, only reports what tests put in it
/// and records commands it receives.
#[derive(Debug, Default, Clone)]
pub struct ScriptedWorld {
	pub game_loop: u32,
	pub harvesters: Units<Harvester>,
	pub minerals: Units<MineralSite>,
	pub gas: Units<GasSite>,
	pub structures: Units<CollectionStructure>,
	pub expansions: Vec<Point2>,
	pub start_location: Point2,
	pub economy: Economy,
	pub commands: Vec<(u64, Command)>,
	/// Commands for this worker are refused.
	pub refused: Option<u64>,
}

impl World for ScriptedWorld {
	fn game_loop(&self) -> u32 {
		self.game_loop
	}
	fn harvester_snapshot(&self) -> Units<Harvester> {
		self.harvesters.clone()
	}
	fn mineral_site_snapshot(&self) -> Units<MineralSite> {
		self.minerals.clone()
	}
	fn gas_site_snapshot(&self) -> Units<GasSite> {
		self.gas.clone()
	}
	fn collection_structure_snapshot(&self) -> Units<CollectionStructure> {
		self.structures.clone()
	}
	fn expansion_locations(&self) -> Vec<Point2> {
		self.expansions.clone()
	}
	fn start_location(&self) -> Point2 {
		self.start_location
	}
	fn economy(&self) -> Economy {
		self.economy
	}
	fn issue_command(&mut self, tag: u64, command: Command) -> MiningResult<()> {
		if self.refused == Some(tag) {
			return Err(format!("Worker {} can't take commands", tag).into());
		}
		self.commands.push((tag, command));
		Ok(())
	}
}

pub const TOWNHALL: u64 = 1;
pub const MINERAL_TAGS: u64 = 100;
pub const GAS_TAGS: u64 = 200;
pub const WORKER_TAGS: u64 = 1000;

/// Base center used by most tests.
pub const BASE: Point2 = Point2::new(50.0, 50.0);
/// Seconds after opening spread.
pub const LATE: u32 = 1000;

/// Points evenly spread on circle around `center`.
pub fn ring(center: Point2, radius: f32, count: usize) -> Vec<Point2> {
	(0..count)
		.map(|i| {
			let angle = 2.0 * PI * i as f32 / count as f32;
			center + Point2::new(angle.cos(), angle.sin()) * radius
		})
		.collect()
}

impl ScriptedWorld {
	/// Main base with a ready townhall, `minerals` fields around it and no workers.
	pub fn with_base(minerals: usize) -> Self {
		let mut world = Self {
			start_location: BASE,
			expansions: vec![BASE, Point2::new(90.0, 90.0)],
			..Default::default()
		};
		world.structures.push(CollectionStructure::new(TOWNHALL, BASE));
		world.minerals = ring(BASE, 7.0, minerals)
			.into_iter()
			.enumerate()
			.map(|(i, pos)| MineralSite::new(MINERAL_TAGS + i as u64, pos))
			.collect();
		world
	}
	/// Adds ready gas building next to the base.
	pub fn add_gas(&mut self, tag: u64) {
		self.gas.push(GasSite::new(tag, BASE + Point2::new(0.0, -8.0)));
	}
	/// Adds `count` idle workers standing next to townhall.
	pub fn add_workers(&mut self, count: usize) -> Vec<u64> {
		let first = self.harvesters.tags().max().map_or(WORKER_TAGS, |&t| t + 1);
		(first..first + count as u64)
			.map(|tag| {
				self.harvesters.push(Harvester::new(tag, BASE + Point2::new(0.0, 3.0)));
				tag
			})
			.collect()
	}
	pub fn worker_mut(&mut self, tag: u64) -> &mut Harvester {
		self.harvesters.get_mut(tag).expect("no such worker")
	}
	pub fn mineral_mut(&mut self, tag: u64) -> &mut MineralSite {
		self.minerals.get_mut(tag).expect("no such mineral")
	}
	/// Commands received by given worker, in order.
	pub fn commands_of(&self, tag: u64) -> Vec<Command> {
		self.commands
			.iter()
			.filter(|(t, _)| *t == tag)
			.map(|(_, c)| *c)
			.collect()
	}
	pub fn take_commands(&mut self) -> Vec<(u64, Command)> {
		std::mem::take(&mut self.commands)
	}
}

//! Data structures for issuing worker commands.

use crate::{geometry::Point2, ids::AbilityId, unit::Harvester, units::FxIndexMap, MiningResult, World};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Target of ability used by unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Target {
	/// Ability target is position (move, ...).
	Pos(Point2),
	/// Ability target is unit (gather, smart, ...).
	Tag(u64),
	/// Ability don't require target (return resource, stop, ...).
	None,
}

/// Single intent for one worker, passed to [`World::issue_command`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
	pub ability: AbilityId,
	pub target: Target,
	/// Command is appended to the order queue instead of replacing it.
	pub queue: bool,
}
impl Command {
	pub fn new(ability: AbilityId, target: Target, queue: bool) -> Self {
		Self {
			ability,
			target,
			queue,
		}
	}
	/// `Smart` ability (This is equivalent of right click).
	pub fn smart(target: Target, queue: bool) -> Self {
		Self::new(AbilityId::Smart, target, queue)
	}
	/// Move to given point.
	pub fn move_to(pos: Point2, queue: bool) -> Self {
		Self::new(AbilityId::MoveMove, Target::Pos(pos), queue)
	}
	/// Gather given resource.
	pub fn gather(resource: u64, queue: bool) -> Self {
		Self::new(AbilityId::HarvestGather, Target::Tag(resource), queue)
	}
	/// Return carried resource to closest base.
	pub fn return_resource(queue: bool) -> Self {
		Self::new(AbilityId::HarvestReturn, Target::None, queue)
	}
}
impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.ability)?;
		match self.target {
			Target::Pos(pos) => write!(f, "({:.2}, {:.2})", pos.x, pos.y)?,
			Target::Tag(tag) => write!(f, "(#{})", tag)?,
			Target::None => {}
		}
		if self.queue {
			write!(f, " [queued]")?;
		}
		Ok(())
	}
}

/// Collects commands issued during one step and flushes them to the [`World`] in issue order.
#[derive(Debug, Default, Clone)]
pub struct Commander {
	commands: FxIndexMap<u64, Vec<Command>>,
}
impl Commander {
	/// Buffers command for given worker.
	///
	/// Non-queued command repeating what worker is already doing is dropped,
	/// so the same condition observed on consecutive steps doesn't reset worker's order.
	pub fn command(&mut self, unit: &Harvester, command: Command) {
		if !command.queue {
			if let Some(order) = unit.orders.first() {
				if command.ability == order.ability && command.target == order.target {
					return;
				}
			}
		}

		self.commands.entry(unit.tag).or_default().push(command);
	}
	/// Commands buffered for given worker so far.
	pub fn get(&self, tag: u64) -> &[Command] {
		self.commands.get(&tag).map(Vec::as_slice).unwrap_or(&[])
	}
	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
	/// Number of workers received commands.
	pub fn len(&self) -> usize {
		self.commands.len()
	}
	/// Sends all buffered commands to the world and clears buffer.
	///
	/// Refused command doesn't stop the rest from being sent,
	/// the first refusal is returned after everything was tried.
	pub fn flush<W: World + ?Sized>(&mut self, world: &mut W) -> MiningResult<usize> {
		let mut sent = 0;
		let mut first_error = None;
		for (tag, commands) in self.commands.drain(..) {
			for command in commands {
				match world.issue_command(tag, command) {
					Ok(()) => sent += 1,
					Err(e) => {
						warn!("Worker {} refused command {}: {}", tag, command, e);
						first_error.get_or_insert(e);
					}
				}
			}
		}
		match first_error {
			Some(e) => Err(e),
			None => Ok(sent),
		}
	}
}

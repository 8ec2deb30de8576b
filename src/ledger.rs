//! Bookkeeping of which worker harvests which resource.
//!
//! [`Ledger`] keeps two pairs of maps (worker → site and site → workers), one pair for minerals
//! and one for gas. The only way to change them is through methods which update both sides,
//! so the maps can't disagree and a worker can't end up on two sites at once.

use crate::units::{FxIndexMap, FxIndexSet};
use std::{error::Error, fmt};

/// Kind of resource site.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SiteKind {
	Mineral,
	Gas,
}

/// Assignment of a worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
	pub kind: SiteKind,
	pub site: u64,
}

/// Reason [`Ledger::assign`] refused an assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignError {
	/// Worker is already assigned somewhere.
	AlreadyAssigned { harvester: u64, current: Assignment },
	/// Site already has as many workers as allowed.
	SiteFull { site: u64, capacity: usize },
}
impl fmt::Display for AssignError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AssignError::AlreadyAssigned { harvester, current } => write!(
				f,
				"worker {} is already assigned to {:?} {}",
				harvester, current.kind, current.site
			),
			AssignError::SiteFull { site, capacity } => {
				write!(f, "site {} is full ({} workers)", site, capacity)
			}
		}
	}
}
impl Error for AssignError {}

/// One direction pair of maps for a single kind of resource.
#[derive(Debug, Default, Clone)]
struct Assignments {
	by_harvester: FxIndexMap<u64, u64>,
	by_site: FxIndexMap<u64, FxIndexSet<u64>>,
}
impl Assignments {
	fn count(&self, site: u64) -> usize {
		self.by_site.get(&site).map_or(0, |ws| ws.len())
	}
	fn insert(&mut self, harvester: u64, site: u64) {
		self.by_harvester.insert(harvester, site);
		self.by_site.entry(site).or_default().insert(harvester);
	}
	fn remove_harvester(&mut self, harvester: u64) -> Option<u64> {
		let site = self.by_harvester.shift_remove(&harvester)?;
		if let Some(ws) = self.by_site.get_mut(&site) {
			ws.shift_remove(&harvester);
			if ws.is_empty() {
				self.by_site.shift_remove(&site);
			}
		}
		Some(site)
	}
	fn remove_site(&mut self, site: u64) -> Vec<u64> {
		let released = self
			.by_site
			.shift_remove(&site)
			.map(|ws| ws.into_iter().collect::<Vec<_>>())
			.unwrap_or_default();
		for w in &released {
			self.by_harvester.shift_remove(w);
		}
		released
	}
	fn is_consistent(&self) -> bool {
		self.by_harvester
			.iter()
			.all(|(w, s)| self.by_site.get(s).map_or(false, |ws| ws.contains(w)))
			&& self.by_site.iter().all(|(s, ws)| {
				!ws.is_empty() && ws.iter().all(|w| self.by_harvester.get(w) == Some(s))
			})
	}
}

/// Bidirectional assignment table between workers and resource sites.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
	minerals: Assignments,
	gas: Assignments,
}
impl Ledger {
	pub fn new() -> Self {
		Self::default()
	}

	fn side(&self, kind: SiteKind) -> &Assignments {
		match kind {
			SiteKind::Mineral => &self.minerals,
			SiteKind::Gas => &self.gas,
		}
	}
	fn side_mut(&mut self, kind: SiteKind) -> &mut Assignments {
		match kind {
			SiteKind::Mineral => &mut self.minerals,
			SiteKind::Gas => &mut self.gas,
		}
	}

	/// Assigns worker to site if worker is free and site has less than `capacity` workers.
	pub fn assign(
		&mut self,
		harvester: u64,
		kind: SiteKind,
		site: u64,
		capacity: usize,
	) -> Result<(), AssignError> {
		if let Some(current) = self.assignment(harvester) {
			return Err(AssignError::AlreadyAssigned { harvester, current });
		}
		if self.count(kind, site) >= capacity {
			return Err(AssignError::SiteFull { site, capacity });
		}
		self.side_mut(kind).insert(harvester, site);
		Ok(())
	}
	/// Removes worker from whichever site it was assigned to.
	pub fn release(&mut self, harvester: u64) -> Option<Assignment> {
		if let Some(site) = self.minerals.remove_harvester(harvester) {
			return Some(Assignment {
				kind: SiteKind::Mineral,
				site,
			});
		}
		self.gas.remove_harvester(harvester).map(|site| Assignment {
			kind: SiteKind::Gas,
			site,
		})
	}
	/// Forgets the site and returns all workers that were assigned to it.
	pub fn release_site(&mut self, kind: SiteKind, site: u64) -> Vec<u64> {
		self.side_mut(kind).remove_site(site)
	}
	/// Releases most recently assigned workers of site until it has at most `capacity` of them.
	pub fn evict_surplus(&mut self, kind: SiteKind, site: u64, capacity: usize) -> Vec<u64> {
		let side = self.side_mut(kind);
		let mut evicted = Vec::new();
		while side.count(site) > capacity {
			let last = side.by_site.get(&site).and_then(|ws| ws.last().copied());
			match last {
				Some(w) => {
					side.remove_harvester(w);
					evicted.push(w);
				}
				None => break,
			}
		}
		evicted
	}

	/// Returns where worker is assigned.
	pub fn assignment(&self, harvester: u64) -> Option<Assignment> {
		if let Some(&site) = self.minerals.by_harvester.get(&harvester) {
			return Some(Assignment {
				kind: SiteKind::Mineral,
				site,
			});
		}
		self.gas.by_harvester.get(&harvester).map(|&site| Assignment {
			kind: SiteKind::Gas,
			site,
		})
	}
	pub fn is_assigned(&self, harvester: u64) -> bool {
		self.assignment(harvester).is_some()
	}
	/// Number of workers assigned to site.
	pub fn count(&self, kind: SiteKind, site: u64) -> usize {
		self.side(kind).count(site)
	}
	/// Workers assigned to site in order of assignment.
	pub fn harvesters_of(&self, kind: SiteKind, site: u64) -> impl Iterator<Item = u64> + '_ {
		self.side(kind).by_site.get(&site).into_iter().flatten().copied()
	}
	/// All sites of given kind having at least one worker.
	pub fn sites(&self, kind: SiteKind) -> impl Iterator<Item = u64> + '_ {
		self.side(kind).by_site.keys().copied()
	}
	/// All workers assigned to sites of given kind.
	pub fn harvesters(&self, kind: SiteKind) -> impl Iterator<Item = u64> + '_ {
		self.side(kind).by_harvester.keys().copied()
	}
	/// Total number of workers assigned to minerals.
	pub fn mineral_assignments(&self) -> usize {
		self.minerals.by_harvester.len()
	}
	/// Total number of workers assigned to gas.
	pub fn gas_assignments(&self) -> usize {
		self.gas.by_harvester.len()
	}
	pub fn is_empty(&self) -> bool {
		self.minerals.by_harvester.is_empty() && self.gas.by_harvester.is_empty()
	}
	/// Checks that both directions of every map agree
	/// and no worker is assigned to minerals and gas simultaneously.
	pub fn is_consistent(&self) -> bool {
		self.minerals.is_consistent()
			&& self.gas.is_consistent()
			&& self
				.minerals
				.by_harvester
				.keys()
				.all(|w| !self.gas.by_harvester.contains_key(w))
	}
}

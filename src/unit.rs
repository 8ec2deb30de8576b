//! Read-only snapshots of units the mining controller looks at.
//!
//! All of them are rebuilt by the [`World`](crate::World) every step,
//! the controller never keeps them between steps, only their tags.

use crate::{action::Target, geometry::Point2, ids::AbilityId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common data of every unit snapshot.
pub trait Tagged {
	/// Unique and constant tag of the unit.
	fn tag(&self) -> u64;
	/// Position on 2D grid.
	fn position(&self) -> Point2;
	/// Radius of the unit.
	fn radius(&self) -> f32;
}

/// The display type of resource. Can be accessed through
/// [`display_type`](MineralSite::display_type) field.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayType {
	/// Fully visible.
	Visible,
	/// Dimmed version of unit left behind after entering fog of war.
	Snapshot,
	/// Fully hidden.
	Hidden,
}
impl Default for DisplayType {
	fn default() -> Self {
		DisplayType::Visible
	}
}

/// What worker holds in hands right now.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Carrying {
	Nothing,
	Minerals,
	Vespene,
}
impl Default for Carrying {
	fn default() -> Self {
		Carrying::Nothing
	}
}

/// Order given to unit. All current orders of unit stored in [`orders`](Harvester::orders) field.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitOrder {
	/// Ability unit is using.
	pub ability: AbilityId,
	/// Target of unit's ability.
	pub target: Target,
}
impl UnitOrder {
	pub fn new(ability: AbilityId, target: Target) -> Self {
		Self { ability, target }
	}
}

/// Worker unit which can be assigned to minerals or gas.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Harvester {
	pub tag: u64,
	pub position: Point2,
	pub radius: f32,
	/// Resource worker is carrying.
	///
	/// Note: the game doesn't report gas harvested from rich geysers.
	pub carrying: Carrying,
	/// Health of worker in range `[0, 1]`.
	pub health_percentage: f32,
	/// Current orders of worker, first one is executing.
	pub orders: Vec<UnitOrder>,
}
impl Harvester {
	pub fn new(tag: u64, position: Point2) -> Self {
		Self {
			tag,
			position,
			radius: 0.375,
			carrying: Carrying::Nothing,
			health_percentage: 1.0,
			orders: Vec::new(),
		}
	}
	/// Checks if worker is carrying minerals.
	pub fn is_carrying_minerals(&self) -> bool {
		self.carrying.is_minerals()
	}
	/// Checks if worker is carrying vespene gas.
	pub fn is_carrying_vespene(&self) -> bool {
		self.carrying.is_vespene()
	}
	/// Checks if worker is carrying any resource.
	pub fn is_carrying_resource(&self) -> bool {
		!self.carrying.is_nothing()
	}
	/// Returns target of first unit's order.
	pub fn target(&self) -> Target {
		self.orders.first().map_or(Target::None, |order| order.target)
	}
	/// Returns target tag of unit's order if any.
	pub fn target_tag(&self) -> Option<u64> {
		match self.target() {
			Target::Tag(tag) => Some(tag),
			_ => None,
		}
	}
	/// Returns ability of first unit's order.
	pub fn ordered_ability(&self) -> Option<AbilityId> {
		self.orders.first().map(|order| order.ability)
	}
	/// Checks if unit don't have any orders currently.
	pub fn is_idle(&self) -> bool {
		self.orders.is_empty()
	}
	/// Checks if unit is using given ability.
	pub fn is_using(&self, ability: AbilityId) -> bool {
		self.ordered_ability() == Some(ability)
	}
	/// Checks if unit is currently moving.
	pub fn is_moving(&self) -> bool {
		self.is_using(AbilityId::MoveMove)
	}
	/// Checks if worker is currently gathering resource.
	pub fn is_gathering(&self) -> bool {
		self.is_using(AbilityId::HarvestGather)
	}
	/// Checks if worker is currently returning resource closest base.
	pub fn is_returning(&self) -> bool {
		self.is_using(AbilityId::HarvestReturn)
	}
	/// Checks if worker is currently gathering or returning resources.
	pub fn is_collecting(&self) -> bool {
		self.ordered_ability().map_or(false, AbilityId::is_collecting)
	}
}

/// Mineral field.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MineralSite {
	pub tag: u64,
	pub position: Point2,
	pub radius: f32,
	pub display_type: DisplayType,
	/// Amount of minerals left in mineral field.
	///
	/// Note: Not populated for snapshots.
	pub mineral_contents: Option<u32>,
}
impl MineralSite {
	pub fn new(tag: u64, position: Point2) -> Self {
		Self {
			tag,
			position,
			radius: 1.125,
			display_type: DisplayType::Visible,
			mineral_contents: Some(1800),
		}
	}
	/// Checks if mineral field is currently visible.
	pub fn is_visible(&self) -> bool {
		self.display_type.is_visible()
	}
	/// Checks if mineral field is only remembered from the last time it was seen.
	pub fn is_snapshot(&self) -> bool {
		self.display_type.is_snapshot()
	}
	/// Checks if mineral field is known to be mined out.
	pub fn is_depleted(&self) -> bool {
		self.mineral_contents == Some(0)
	}
}

/// Own gas building (extractor, refinery or assimilator).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GasSite {
	pub tag: u64,
	pub position: Point2,
	pub radius: f32,
	/// The progress of building construction. Value from `0` to `1`.
	pub build_progress: f32,
	/// Amount of vespene gas left in building.
	pub vespene_contents: Option<u32>,
}
impl GasSite {
	pub fn new(tag: u64, position: Point2) -> Self {
		Self {
			tag,
			position,
			radius: 1.5,
			build_progress: 1.0,
			vespene_contents: Some(2250),
		}
	}
	/// Checks if building is fully constructed.
	pub fn is_ready(&self) -> bool {
		self.build_progress >= 1.0
	}
	/// Checks if there's still gas to harvest.
	pub fn has_vespene(&self) -> bool {
		self.vespene_contents.map_or(false, |v| v > 0)
	}
}

/// Own townhall where workers bring resources.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollectionStructure {
	pub tag: u64,
	pub position: Point2,
	pub radius: f32,
	/// The progress of building construction. Value from `0` to `1`.
	pub build_progress: f32,
}
impl CollectionStructure {
	pub fn new(tag: u64, position: Point2) -> Self {
		Self {
			tag,
			position,
			radius: 2.75,
			build_progress: 1.0,
		}
	}
	/// Checks if building is fully constructed.
	pub fn is_ready(&self) -> bool {
		self.build_progress >= 1.0
	}
}

macro_rules! impl_tagged {
	($($unit:ty),+) => {
		$(
			impl Tagged for $unit {
				#[inline]
				fn tag(&self) -> u64 {
					self.tag
				}
				#[inline]
				fn position(&self) -> Point2 {
					self.position
				}
				#[inline]
				fn radius(&self) -> f32 {
					self.radius
				}
			}
			impl From<&$unit> for Point2 {
				#[inline]
				fn from(u: &$unit) -> Self {
					u.position
				}
			}
		)+
	};
}

impl_tagged!(Harvester, MineralSite, GasSite, CollectionStructure);

//! Ability ids used by harvesting orders and commands.
//!
//! Numeric values match `stableid.json`, so raw ids coming from the game can be converted
//! with [`FromPrimitive`](num_traits::FromPrimitive) or parsed from strings.
#![allow(missing_docs)]

use num_traits::FromPrimitive;

#[variant_checkers]
#[derive(Debug, FromPrimitive, ToPrimitive, FromStr, Copy, Clone, PartialEq, Eq, Hash)]
#[enum_from_str(use_primitives)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityId {
	Null = 0,
	Smart = 1,
	Stop = 4,
	MoveMove = 16,
	HoldPosition = 18,
	Attack = 23,
	HarvestGather = 3666,
	HarvestReturn = 3667,
}

impl AbilityId {
	/// Converts raw id reported by the game, mapping unknown ids to [`Null`](Self::Null).
	pub fn from_raw(id: u32) -> Self {
		Self::from_u32(id).unwrap_or(AbilityId::Null)
	}
	/// Checks if ability is one of the harvesting cycle abilities.
	pub fn is_collecting(self) -> bool {
		matches!(self, AbilityId::HarvestGather | AbilityId::HarvestReturn)
	}
}

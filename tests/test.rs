#[macro_use]
extern crate speedmine_macro;
#[macro_use]
extern crate num_derive;

use num_traits::FromPrimitive;
use sc2_speedmine::{ids::AbilityId, settings::GasMode};
use speedmine_macro::ParseEnumError;

#[derive(Debug, PartialEq, FromPrimitive, FromStr)]
#[enum_from_str(use_primitives)]
enum MyEnum {
	Variant0,
	Variant1 = -1001,
	Variant2,
	Variant3 = 2002,
}

#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, FromStr)]
enum Phase {
	Opening,
	LateGame,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn check_enum_err() {
		assert_eq!("Variant4".parse::<MyEnum>(), Err(ParseEnumError));
		assert!("Variant4".parse::<MyEnum>().is_err());
		assert_eq!("4".parse::<MyEnum>(), Err(ParseEnumError));
		assert_eq!("1".parse::<Phase>(), Err(ParseEnumError));
	}
	#[test]
	fn check_enum_ok() {
		assert_eq!("Variant1".parse::<MyEnum>(), Ok(MyEnum::Variant1));
		assert_eq!("Variant2".parse::<MyEnum>(), Ok(MyEnum::Variant2));
		assert_eq!("late_game".parse::<Phase>(), Ok(Phase::LateGame));
	}
	#[test]
	fn check_enum_ok3() {
		assert_eq!("0".parse::<MyEnum>(), Ok(MyEnum::Variant0));
		assert_eq!("-1000".parse::<MyEnum>(), Ok(MyEnum::Variant2));
		assert_eq!("2002".parse::<MyEnum>(), Ok(MyEnum::Variant3));
	}
	#[test]
	fn check_variants() {
		assert!(Phase::Opening.is_opening());
		assert!(!Phase::Opening.is_late_game());
		assert!(AbilityId::HarvestGather.is_harvest_gather());
	}
	#[test]
	fn check_library_enums() {
		assert_eq!("HarvestGather".parse::<AbilityId>(), Ok(AbilityId::HarvestGather));
		assert_eq!("harvest_return".parse::<AbilityId>(), Ok(AbilityId::HarvestReturn));
		assert_eq!("16".parse::<AbilityId>(), Ok(AbilityId::MoveMove));
		assert_eq!(AbilityId::from_raw(99999), AbilityId::Null);
		assert_eq!(AbilityId::from_u32(3667), Some(AbilityId::HarvestReturn));

		assert_eq!("plain".parse::<GasMode>(), Ok(GasMode::Plain));
		assert_eq!("0".parse::<GasMode>(), Ok(GasMode::Boosted));
		assert!(GasMode::default().is_boosted());
	}
}

//! Default values of [`MiningSettings`](crate::settings::MiningSettings) and other game constants.

/// Game loops per second of game time on `Faster` speed.
pub const GAME_LOOPS_PER_SECOND: f32 = 22.4;

/// Distance from mineral center at which worker can start its gather without slowing down.
pub const MINING_RADIUS: f32 = 1.35;
/// Mineral fields further than this from every townhall don't belong to any base.
pub const BASE_RANGE: f32 = 10.0;
/// Townhall counts as a working base once it's that much complete.
pub const BASE_PROGRESS: f32 = 0.9;

pub const WORKERS_PER_MINERAL: usize = 2;
pub const WORKERS_PER_MINERAL_SPREAD: usize = 1;
pub const WORKERS_PER_GAS: usize = 3;
/// Opening spread lasts until this game time (in seconds)...
pub const SPREAD_TIME: f32 = 5.0;
/// ...or until this many mineral assignments were made.
pub const SPREAD_ASSIGNMENTS: usize = 9;

/// Drop-off point lies this many townhall radii away from its center.
pub const RETURN_DISTANCE_FACTOR: f32 = 1.08;
pub const MINERAL_BOOST_BAND: (f32, f32) = (0.75, 2.0);
pub const RETURN_BOOST_BAND: (f32, f32) = (0.75, 2.0);

/// Boosting is pointless when maxed out...
pub const BOOST_SUPPLY_LIMIT: u32 = 198;
/// ...or floating resources.
pub const BOOST_BANK_LIMIT: u32 = 1000;

/// Worker inside gas building disappears from observation for a while,
/// so it's released only after missing that many game loops.
pub const MISSING_GRACE_LOOPS: u32 = 64;

/// Workers below this health aren't handed out to other managers if possible.
pub const SELECT_HEALTH: f32 = 0.5;

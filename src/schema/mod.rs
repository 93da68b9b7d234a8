//! The record catalog. Each record is declared in the order its fields are
//! written and decoded through `#[derive(Decode)]`.

mod cargo;
mod dyson;
mod enums;
mod factory;
mod game;
mod geometry;
mod logistics;
mod monster;
mod planet;
mod player;
mod power;
mod stats;
mod storage;

pub use self::cargo::*;
pub use self::dyson::*;
pub use self::enums::*;
pub use self::factory::*;
pub use self::game::*;
pub use self::geometry::*;
pub use self::logistics::*;
pub use self::monster::*;
pub use self::planet::*;
pub use self::player::*;
pub use self::power::*;
pub use self::stats::*;
pub use self::storage::*;

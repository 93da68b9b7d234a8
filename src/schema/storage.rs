use super::StorageType;
use crate::{pool::live, Decode, Slots};

/// A chest, the mecha inventory, or one of the mecha's fuel and warper slots
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 1)]
pub struct StorageComponent {
    pub id: i32,
    pub entity_id: i32,
    pub previous: i32,
    pub next: i32,
    pub bottom: i32,
    pub top: i32,
    #[dsv(width = "i32")]
    pub kind: StorageType,
    pub grid_size: i32,
    pub bans: i32,
    #[dsv(len = "grid_size")]
    pub grids: Vec<StorageGrid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StorageGrid {
    pub item_id: i32,
    pub filter: i32,
    pub count: i32,
    pub stack_size: i32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct TankComponent {
    pub id: i32,
    pub entity_id: i32,
    pub last_tank_id: i32,
    pub next_tank_id: i32,
    pub belt0: i32,
    pub belt1: i32,
    pub belt2: i32,
    pub belt3: i32,
    pub is_output0: bool,
    pub is_output1: bool,
    pub is_output2: bool,
    pub is_output3: bool,
    pub fluid_storage_count: i32,
    pub current_count: i32,
    pub fluid_id: i32,
    pub output_switch: bool,
    pub input_switch: bool,
    pub is_bottom: bool,
}

/// An occupied storage slot. Each one is written with its grid size ahead of
/// the component itself.
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizedStorage {
    pub size: i32,
    pub storage: StorageComponent,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct FactoryStorage {
    pub storage_cursor: i32,
    pub storage_capacity: i32,
    pub storage_recycle_cursor: i32,
    #[dsv(index_gated, len = "live(storage_cursor)")]
    pub storage_pool: Slots<SizedStorage>,
    #[dsv(recycle, len = "storage_recycle_cursor")]
    pub storage_recycle: Vec<i32>,
    pub tank_capacity: i32,
    pub tank_cursor: i32,
    pub tank_recycle_cursor: i32,
    #[dsv(len = "live(tank_cursor)")]
    pub tank_pool: Vec<TankComponent>,
    #[dsv(recycle, len = "tank_recycle_cursor")]
    pub tank_recycle: Vec<i32>,
}

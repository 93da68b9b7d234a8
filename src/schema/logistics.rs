use super::{LogisticStorage, Quaternion, Vector3, VectorLF3};
use crate::{pool::live, Decode, Slots};

/// Interstellar logistics. Only the version tag is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct GalacticTransport {}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PlanetTransport {
    pub station_cursor: i32,
    pub station_capacity: i32,
    pub station_recycle_cursor: i32,
    #[dsv(index_gated, len = "live(station_cursor)")]
    pub station_pool: Slots<StationComponent>,
    #[dsv(recycle, len = "station_recycle_cursor")]
    pub station_recycle: Vec<i32>,
}

/// A planetary or interstellar logistics station
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 2)]
pub struct StationComponent {
    pub id: i32,
    pub gid: i32,
    pub entity_id: i32,
    pub planet_id: i32,
    pub pc_id: i32,
    pub gene: i32,
    pub drone_dock: Vector3,
    pub ship_dock_pos: Vector3,
    pub ship_dock_rot: Quaternion,
    pub is_stellar: bool,

    /// Four bytes wide even though it only signals presence
    pub name_is_included_flag: i32,

    /// Present when the flag is nonzero. The game writes 0 or 1 and its
    /// reader requires a positive flag, so negative flags diverge.
    #[dsv(when = "name_is_included_flag != 0")]
    pub name: Option<String>,
    pub energy: i64,
    pub energy_per_tick: i64,
    pub energy_max: i64,
    pub warper_count: i32,
    pub warper_max_count: i32,
    pub idle_drone_count: i32,
    pub work_drone_count: i32,
    pub work_drone_array_size: i32,
    #[dsv(len = "work_drone_count")]
    pub work_drone_datas: Vec<DroneData>,
    #[dsv(len = "work_drone_count")]
    pub work_drone_orders: Vec<LocalLogisticOrder>,
    pub idle_ship_count: i32,
    pub work_ship_count: i32,
    pub idle_ship_indices: u64,
    pub work_ship_indices: u64,
    pub array_size: i32,
    #[dsv(len = "work_ship_count")]
    pub work_ship_datas: Vec<ShipData>,
    #[dsv(len = "work_ship_count")]
    pub work_ship_orders: Vec<RemoteLogisticOrder>,
    #[dsv(prefixed)]
    pub storage: Vec<StationStore>,
    #[dsv(prefixed)]
    pub slots: Vec<SlotData>,
    pub local_pair_process: i32,
    pub remote_pair_process: i32,
    pub next_ship_index: i32,
    pub is_collector: bool,
    #[dsv(prefixed)]
    pub collection_ids: Vec<i32>,
    #[dsv(prefixed)]
    pub collection_per_tick: Vec<f32>,
    #[dsv(prefixed)]
    pub current_collections: Vec<f32>,
    pub collect_speed: i32,
    pub trip_range_drones: f64,
    pub trip_range_ships: f64,
    pub include_orbit_collector: bool,
    pub warp_enable_dist: f64,
    pub warper_necessary: bool,
    pub delivery_drones: i32,
    pub delivery_ships: i32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct DroneData {
    pub begin: Vector3,
    pub end: Vector3,
    pub end_id: i32,
    pub direction: f32,
    pub maxt: f32,
    pub t: f32,
    pub item_id: i32,
    pub item_count: i32,
    pub gene: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct LocalLogisticOrder {
    pub other_station_id: i32,
    pub this_index: i32,
    pub other_index: i32,
    pub item_id: i32,
    pub this_ordered: i32,
    pub other_ordered: i32,
}

/// A logistics vessel in flight. Positions are in universe space.
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct ShipData {
    pub stage: i32,
    pub planet_a: i32,
    pub planet_b: i32,
    pub u_pos: VectorLF3,
    pub u_vel: Vector3,
    pub u_speed: f32,
    pub warp_state: f32,
    pub u_rot: Quaternion,
    pub u_angular_vel: Vector3,
    pub u_angular_speed: f32,
    pub p_pos_temp: VectorLF3,
    pub p_rot_temp: Quaternion,
    pub other_g_id: i32,
    pub direction: i32,
    pub t: f32,
    pub item_id: i32,
    pub item_count: i32,
    pub gene: i32,
    pub ship_index: i32,
    pub warper_cnt: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct RemoteLogisticOrder {
    pub other_station_g_id: i32,
    pub this_index: i32,
    pub other_index: i32,
    pub item_id: i32,
    pub this_ordered: i32,
    pub other_ordered: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct StationStore {
    pub item_id: i32,
    pub count: i32,
    pub local_order: i32,
    pub remote_order: i32,
    pub max: i32,
    #[dsv(width = "i32")]
    pub local_logic: LogisticStorage,
    #[dsv(width = "i32")]
    pub remote_logic: LogisticStorage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotData {
    pub dir: i32,
    pub belt_id: i32,
    pub storage_idx: i32,
    pub counter: i32,
}

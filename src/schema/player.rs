use super::{MovementState, NaviStage, Quaternion, StorageComponent, Vector3, VectorLF3};
use crate::Decode;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 1)]
pub struct Player {
    pub planet_id: i32,
    pub position: Vector3,
    pub u_position: VectorLF3,
    pub u_rotation: Quaternion,
    #[dsv(width = "i32")]
    pub movement_state: MovementState,
    pub warp_state: f32,
    pub warp_command: bool,
    pub u_velocity: VectorLF3,
    pub inhand_item_id: i32,
    pub inhand_item_count: i32,
    pub mecha: Mecha,
    pub package: StorageComponent,
    pub navigation: PlayerNavigation,
    pub sand_count: i32,
}

/// The player's mech: energy core, upgrades, replicator and drones
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct Mecha {
    pub core_energy_cap: f64,
    pub core_energy: f64,
    pub core_power_gen: f64,
    pub reactor_power_gen: f64,
    pub reactor_energy: f64,
    pub reactor_item_id: i32,
    pub reactor_storage: StorageComponent,
    pub warp_storage: StorageComponent,
    pub walk_power: f64,
    pub jump_energy: f64,
    pub thrust_power_per_acc: f64,
    pub warp_keeping_power_per_speed: f64,
    pub warp_start_power_per_speed: f64,
    pub mining_power: f64,
    pub replicate_power: f64,
    pub research_power: f64,
    pub drone_eject_energy: f64,
    pub drone_energy_per_meter: f64,
    pub core_level: i32,
    pub thruster_level: i32,
    pub mining_speed: f32,
    pub replicate_speed: f32,
    pub walk_speed: f32,
    pub jump_speed: f32,
    pub max_sail_speed: f32,
    pub max_warp_speed: f32,
    pub build_area: f32,
    pub forge: MechaForge,
    pub lab: MechaLab,
    pub drone_count: i32,
    pub drone_speed: f32,
    pub drone_movement: i32,
    #[dsv(len = "drone_count")]
    pub drones: Vec<MechaDrone>,
}

/// The replicator queue
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct MechaForge {
    #[dsv(prefixed)]
    pub tasks: Vec<ForgeTask>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct ForgeTask {
    pub recipe_id: i32,
    pub count: i32,
    pub tick: i32,
    pub tick_spend: i32,
    pub num_item: i32,
    pub num_product: i32,
    #[dsv(parallel, len = "num_item")]
    pub item_ids: Vec<i32>,
    #[dsv(parallel, len = "num_item")]
    pub item_counts: Vec<i32>,
    #[dsv(parallel, len = "num_item")]
    pub served: Vec<i32>,
    #[dsv(parallel, len = "num_product")]
    pub product_ids: Vec<i32>,
    #[dsv(parallel, len = "num_product")]
    pub product_counts: Vec<i32>,
    #[dsv(parallel, len = "num_product")]
    pub produced: Vec<i32>,
    pub parent_task_index: i32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct MechaLab {
    #[dsv(prefixed)]
    pub item_points: BTreeMap<i32, i32>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct MechaDrone {
    pub stage: i32,
    pub position: Vector3,
    pub target: Vector3,
    pub forward: Vector3,
    pub speed: f32,
    pub movement: i32,
    pub target_object: i32,
    pub progress: f32,
    pub initial_vector: Vector3,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PlayerNavigation {
    pub navigating: bool,
    pub navi_astro_id: i32,
    pub navi_target: VectorLF3,
    pub use_fly: bool,
    pub use_sail: bool,
    pub use_warp: bool,
    #[dsv(width = "i32")]
    pub stage: NaviStage,
    pub fly_threshold: f64,
    pub sail_threshold: f64,
    pub warp_threshold: f64,
    pub max_sail_speed: f64,
}

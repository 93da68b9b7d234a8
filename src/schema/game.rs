use super::{DysonSphere, GalacticTransport, GameStatData, PlanetFactory, Player, Quaternion, VectorLF3};
use crate::{Decode, Slots};
use std::collections::BTreeMap;

/// The root of the save graph
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 2)]
pub struct GameData {
    pub game_name: String,
    pub game_desc: GameDesc,
    pub game_tick: i64,
    pub preferences: GamePrefsData,
    pub history: GameHistoryData,
    pub hide_player_model: bool,
    pub disable_controller: bool,
    pub statistics: GameStatData,
    pub planet_id: i32,
    pub main_player: Player,
    pub factory_count: i32,
    pub galactic_transport: GalacticTransport,
    #[dsv(len = "factory_count")]
    pub factories: Vec<PlanetFactory>,
    pub galaxy_star_count: i32,

    /// One slot per star. Stars without a Dyson sphere are empty.
    #[dsv(index_gated, len = "galaxy_star_count")]
    pub dyson_spheres: Slots<DysonSphere>,
}

impl GameData {
    /// The factory built on the given planet
    pub fn factory(&self, planet_id: i32) -> Option<&PlanetFactory> {
        self.factories.iter().find(|x| x.planet_id == planet_id)
    }
}

/// Galaxy generation parameters
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 2)]
pub struct GameDesc {
    pub galaxy_algo: i32,
    pub galaxy_seed: i32,
    pub star_count: i32,
    pub player_proto: i32,
    pub resource_multiplier: f32,
    #[dsv(prefixed)]
    pub theme_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 2)]
pub struct GamePrefsData {
    pub camera_u_pos: VectorLF3,
    pub camera_u_rot: Quaternion,
    pub reform_cursor_size: i32,
    #[dsv(prefixed)]
    pub replicator_multipliers: BTreeMap<i32, i32>,
    pub detail_power: bool,
    pub detail_vein: bool,
    pub detail_space_guide: bool,
    pub detail_sign: bool,
    pub detail_icon: bool,
    #[dsv(prefixed)]
    pub tutorial_showing: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TechState {
    pub tech_proto_index: i32,
    pub unlocked: bool,
    pub cur_level: i32,
    pub max_level: i32,
    pub hash_uploaded: i64,
    pub hash_needed: i64,
}

/// Research progress and the upgrades it unlocked
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 2)]
pub struct GameHistoryData {
    #[dsv(prefixed)]
    pub recipe_unlocked: Vec<i32>,
    #[dsv(prefixed)]
    pub tutorial_unlocked: Vec<i32>,
    #[dsv(prefixed)]
    pub feature_keys: Vec<i32>,
    #[dsv(prefixed)]
    pub tech_states: Vec<TechState>,
    pub auto_manage_lab_items: bool,
    pub current_tech: i32,
    #[dsv(prefixed)]
    pub tech_queue: Vec<i32>,
    pub universe_observe_level: i32,
    pub solar_sail_life: f32,
    pub solar_energy_loss_rate: f32,
    pub use_ion_layer: bool,
    pub inserter_stack_count: i32,
    pub logistic_drone_speed: f32,
    pub logistic_drone_speed_scale: f32,
    pub logistic_drone_carries: i32,
    pub logistic_ship_sail_speed: f32,
    pub logistic_ship_warp_speed: f32,
    pub logistic_ship_speed_scale: f32,
    pub logistic_ship_warp_drive: bool,
    pub logistic_ship_carries: i32,
    pub mining_cost_rate: f32,
    pub mining_speed_scale: f32,
    pub storage_level: i32,
    pub lab_level: i32,
    pub tech_speed: i32,
    pub dyson_node_latitude: f32,
    pub universe_matrix_point_uploaded: i64,
    pub mission_accomplished: bool,
}

use super::Vector3;
use crate::{pool::live, Decode};

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PowerGeneratorComponent {
    pub id: i32,
    pub entity_id: i32,
    pub network_id: i32,
    pub photovoltaic: bool,
    pub wind: bool,
    pub gamma: bool,
    pub gen_energy_per_tick: i64,
    pub use_fuel_per_tick: i64,
    pub fuel_mask: i16,
    pub fuel_energy: i64,
    pub cur_fuel_id: i16,
    pub fuel_id: i16,
    pub fuel_count: i16,
    pub fuel_heat: i64,
    pub catalyst_id: i32,
    pub catalyst_point: i32,
    pub product_id: i32,
    pub product_count: f32,
    pub product_heat: i64,
    pub warmup: f32,
    pub ion_enhance: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PowerNodeComponent {
    pub id: i32,
    pub entity_id: i32,
    pub network_id: i32,
    pub is_charger: bool,
    pub work_energy_per_tick: i32,
    pub idle_energy_per_tick: i32,
    pub required_energy: i32,
    pub power_point: Vector3,
    pub connect_distance: f32,
    pub cover_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PowerConsumerComponent {
    pub id: i32,
    pub entity_id: i32,
    pub network_id: i32,
    pub plug_pos: Vector3,
    pub required_energy: i64,
    pub served_energy: i64,
    pub work_energy_per_tick: i64,
    pub idle_energy_per_tick: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PowerAccumulatorComponent {
    pub id: i32,
    pub entity_id: i32,
    pub network_id: i32,
    pub input_energy_per_tick: i64,
    pub output_energy_per_tick: i64,
    pub cur_energy: i64,
    pub max_energy: i64,
}

/// Charges and discharges accumulator items
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 1)]
pub struct PowerExchangerComponent {
    pub id: i32,
    pub entity_id: i32,
    pub network_id: i32,
    pub empty_count: i16,
    pub full_count: i16,
    pub target_state: f32,
    pub state: f32,
    pub energy_per_tick: i64,
    pub cur_pool_energy: i64,
    pub pool_max_energy: i64,
    pub empty_id: i32,
    pub full_id: i32,
    pub belt0: i32,
    pub belt1: i32,
    pub belt2: i32,
    pub belt3: i32,
    pub is_output0: bool,
    pub is_output1: bool,
    pub is_output2: bool,
    pub is_output3: bool,
    pub output_slot: i32,
    pub input_slot: i32,
    pub output_rectify: i32,
    pub input_rectify: i32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PowerNetworkNode {
    pub id: i32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub conn_distance2: f32,
    pub cover_radius2: f32,
    pub gen_id: i32,
    pub acc_id: i32,
    pub exc_id: i32,
    pub num_conn_ids_for_load: i32,
    pub num_line_ids_for_load: i32,
    pub num_consumers: i32,
    #[dsv(len = "num_conn_ids_for_load")]
    pub conn_ids_for_load: Vec<i32>,
    #[dsv(len = "num_line_ids_for_load")]
    pub line_ids_for_load: Vec<i32>,
    #[dsv(len = "num_consumers")]
    pub consumers: Vec<i32>,
}

/// A connected grid and the ids of the components attached to it
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PowerNetwork {
    pub id: i32,
    pub num_nodes: i32,
    pub num_consumers: i32,
    pub num_generators: i32,
    pub num_accumulators: i32,
    pub num_exchangers: i32,
    #[dsv(len = "num_nodes")]
    pub nodes: Vec<PowerNetworkNode>,
    #[dsv(len = "num_consumers")]
    pub consumers: Vec<i32>,
    #[dsv(len = "num_generators")]
    pub generators: Vec<i32>,
    #[dsv(len = "num_accumulators")]
    pub accumulators: Vec<i32>,
    #[dsv(len = "num_exchangers")]
    pub exchangers: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PowerSystem {
    pub generator_capacity: i32,
    pub gen_cursor: i32,
    pub gen_recycle_cursor: i32,
    #[dsv(len = "live(gen_cursor)")]
    pub gen_pool: Vec<PowerGeneratorComponent>,
    #[dsv(recycle, len = "gen_recycle_cursor")]
    pub gen_recycle: Vec<i32>,

    pub node_capacity: i32,
    pub node_cursor: i32,
    pub node_recycle_cursor: i32,
    #[dsv(len = "live(node_cursor)")]
    pub node_pool: Vec<PowerNodeComponent>,
    #[dsv(recycle, len = "node_recycle_cursor")]
    pub node_recycle: Vec<i32>,

    pub consumer_capacity: i32,
    pub consumer_cursor: i32,
    pub consumer_recycle_cursor: i32,
    #[dsv(len = "live(consumer_cursor)")]
    pub consumer_pool: Vec<PowerConsumerComponent>,
    #[dsv(recycle, len = "consumer_recycle_cursor")]
    pub consumer_recycle: Vec<i32>,

    pub accumulator_capacity: i32,
    pub acc_cursor: i32,
    pub acc_recycle_cursor: i32,
    #[dsv(len = "live(acc_cursor)")]
    pub acc_pool: Vec<PowerAccumulatorComponent>,
    #[dsv(recycle, len = "acc_recycle_cursor")]
    pub acc_recycle: Vec<i32>,

    pub exchanger_capacity: i32,
    pub exc_cursor: i32,
    pub exc_recycle_cursor: i32,
    #[dsv(len = "live(exc_cursor)")]
    pub exc_pool: Vec<PowerExchangerComponent>,
    #[dsv(recycle, len = "exc_recycle_cursor")]
    pub exc_recycle: Vec<i32>,

    pub network_capacity: i32,
    pub net_cursor: i32,
    pub net_recycle_cursor: i32,

    /// Slot zero is written here, so the whole cursor is gated
    #[dsv(flag_gated, len = "net_cursor")]
    pub net_pool: Vec<PowerNetwork>,
    #[dsv(recycle, len = "net_recycle_cursor")]
    pub net_recycle: Vec<i32>,
}

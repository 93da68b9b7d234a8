use super::{Quaternion, Vector3};
use crate::{pool::live, Decode, Slots};

/// Items riding on belts
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct CargoContainer {
    pub pool_capacity: i32,
    pub cursor: i32,
    pub recycle_begin: i32,
    pub recycle_end: i32,

    /// Unlike other pools, every slot up to the cursor is written
    #[dsv(len = "cursor")]
    pub cargo_pool: Vec<Cargo>,

    /// A ring buffer spanning the whole capacity
    #[dsv(recycle, len = "pool_capacity")]
    pub recycle_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cargo {
    pub item: i32,
    pub position: Vector3,
    pub rotation: Quaternion,
}

#[derive(Debug, Clone, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct BeltComponent {
    pub id: i32,
    pub entity_id: i32,
    pub speed: i32,
    pub seg_path_id: i32,
    pub seg_index: i32,
    pub seg_pivot_offset: i32,
    pub seg_length: i32,
    pub output_id: i32,
    pub back_input_id: i32,
    pub left_input_id: i32,
    pub right_input_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct SplitterComponent {
    pub id: i32,
    pub entity_id: i32,
    pub belt_a: i32,
    pub belt_b: i32,
    pub belt_c: i32,
    pub belt_d: i32,
    pub input0: i32,
    pub input1: i32,
    pub input2: i32,
    pub input3: i32,
    pub output0: i32,
    pub output1: i32,
    pub output2: i32,
    pub output3: i32,
    pub in_priority: bool,
    pub out_priority: bool,
    pub out_filter: i32,
}

/// A run of connected belts and the cargo buffer moving along it
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct CargoPath {
    pub id: i32,
    pub capacity: i32,
    pub buffer_length: i32,
    pub chunk_capacity: i32,
    pub chunk_count: i32,
    pub update_len: i32,
    pub closed: bool,
    pub output_path_id_for_import: i32,
    pub output_index: i32,
    pub num_belts: i32,
    pub num_input_paths: i32,
    #[dsv(bytes, len = "buffer_length")]
    pub buffer: Vec<u8>,

    /// Three integers per chunk
    #[dsv(len = "chunk_count.saturating_mul(3)")]
    pub chunks: Vec<i32>,
    #[dsv(parallel, len = "buffer_length")]
    pub point_pos: Vec<Vector3>,
    #[dsv(parallel, len = "buffer_length")]
    pub point_rot: Vec<Quaternion>,
    #[dsv(len = "num_belts")]
    pub belts: Vec<i32>,
    #[dsv(len = "num_input_paths")]
    pub input_paths: Vec<i32>,
}

/// Belts, splitters and the paths they form. Note that the cursor precedes
/// the capacity here.
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct CargoTraffic {
    pub belt_cursor: i32,
    pub belt_capacity: i32,
    pub belt_recycle_cursor: i32,
    pub splitter_cursor: i32,
    pub splitter_capacity: i32,
    pub splitter_recycle_cursor: i32,
    pub path_cursor: i32,
    pub path_capacity: i32,
    pub path_recycle_cursor: i32,
    #[dsv(len = "live(belt_cursor)")]
    pub belt_pool: Vec<BeltComponent>,
    #[dsv(recycle, len = "belt_recycle_cursor")]
    pub belt_recycle: Vec<i32>,
    #[dsv(len = "live(splitter_cursor)")]
    pub splitter_pool: Vec<SplitterComponent>,
    #[dsv(recycle, len = "splitter_recycle_cursor")]
    pub splitter_recycle: Vec<i32>,
    #[dsv(index_gated, len = "live(path_cursor)")]
    pub path_pool: Slots<CargoPath>,
    #[dsv(recycle, len = "path_recycle_cursor")]
    pub path_recycle: Vec<i32>,
}

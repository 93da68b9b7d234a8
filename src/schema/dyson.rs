//! Dyson swarms and spheres. A star has at most one sphere, which owns the
//! swarm of solar sails orbiting it and the shell layers built around it.

use super::{IntVector2, Quaternion, Vector3, VectorLF3};
use crate::{pool::live, Decode, Slots};

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 2)]
pub struct DysonSphere {
    pub rand_seed: i32,
    pub swarm: DysonSwarm,
    #[dsv(expect = 1212)]
    pub twelve_twelve: i32,
    pub layer_count: i32,
    pub num_layers: i32,
    #[dsv(index_gated, len = "live(num_layers)")]
    pub layers: Slots<DysonSphereLayer>,
    pub rocket_capacity: i32,
    pub rocket_cursor: i32,
    pub rocket_recycle_cursor: i32,
    #[dsv(len = "live(rocket_cursor)")]
    pub rocket_pool: Vec<DysonRocket>,
    #[dsv(recycle, len = "rocket_recycle_cursor")]
    pub rocket_recycle: Vec<i32>,
    pub auto_node_count: i32,
    pub num_auto_nodes: i32,

    /// Every nonzero flag is followed by a node. The game writes 0 or 1 and
    /// its reader requires a positive flag, so negative flags diverge.
    #[dsv(flag_gated, len = "num_auto_nodes")]
    pub auto_nodes: Vec<AutoNode>,
    pub nrd_capacity: i32,
    pub nrd_cursor: i32,
    pub nrd_recycle_cursor: i32,

    /// Node render data writes every slot up to the cursor
    #[dsv(len = "nrd_cursor")]
    pub nrd_pool: Vec<DysonNodeRData>,
    #[dsv(recycle, len = "nrd_recycle_cursor")]
    pub nrd_recycle: Vec<i32>,
}

impl DysonSphere {
    /// Number of solar sails written for the swarm
    pub fn sail_count(&self) -> usize {
        self.swarm.sail_pool.len()
    }

    /// Number of nodes across every layer
    pub fn node_count(&self) -> usize {
        self.layers.records.iter().map(|x| x.node_pool.len()).sum()
    }
}

/// A node that construction drones are sent to automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AutoNode {
    pub layer_id: i32,
    pub node_id: i32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 4)]
pub struct DysonSwarm {
    pub rand_seed: i32,
    pub sail_capacity: i32,
    pub sail_cursor: i32,
    pub sail_recycle_cursor: i32,
    #[dsv(len = "sail_cursor")]
    pub sail_pool: Vec<DysonSail>,
    #[dsv(len = "sail_cursor")]
    pub sail_infos: Vec<DysonSailInfo>,
    #[dsv(recycle, len = "sail_recycle_cursor")]
    pub sail_recycle: Vec<i32>,
    pub orbit_capacity: i32,
    pub orbit_cursor: i32,
    #[dsv(len = "live(orbit_cursor)")]
    pub orbits: Vec<SailOrbit>,

    /// The count is written ahead of the queue's cursor and ending
    pub num_expiry_order: i32,
    pub expiry_cursor: i32,
    pub expiry_ending: i32,
    #[dsv(len = "num_expiry_order")]
    pub expiry_order: Vec<ExpiryOrder>,
    pub num_absorb_order: i32,
    pub absorb_cursor: i32,
    pub absorb_ending: i32,
    #[dsv(len = "num_absorb_order")]
    pub absorb_order: Vec<AbsorbOrder>,
    pub bullet_capacity: i32,
    pub bullet_cursor: i32,
    pub bullet_recycle_cursor: i32,
    #[dsv(len = "live(bullet_cursor)")]
    pub bullet_pool: Vec<SailBullet>,
    #[dsv(recycle, len = "bullet_recycle_cursor")]
    pub bullet_recycle: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DysonSail {
    pub st: f32,
    pub p: Vector3,
    pub v: Vector3,
    pub gs: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DysonSailInfo {
    pub orbit: u32,
    pub node: u32,
    pub kill: u32,
    pub posr: Vector3,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct SailOrbit {
    pub id: i32,
    pub radius: f32,
    pub rotation: Quaternion,
    pub up: Vector3,
    pub count: i32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpiryOrder {
    pub time: i64,
    pub index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AbsorbOrder {
    pub time: i64,
    pub index: i32,
    pub layer: i32,
    pub node: i32,
}

/// A sail fired from an ejector that has yet to reach its orbit
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct SailBullet {
    pub id: i32,
    pub t: f32,
    pub maxt: f32,
    pub state: i32,
    pub r_begin: Vector3,
    pub r_end: Vector3,
    pub l_begin: Vector3,
    pub u_end_vel: Vector3,
    pub u_begin: VectorLF3,
    pub u_end: VectorLF3,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct DysonSphereLayer {
    pub id: i32,
    pub orbit_radius: f32,
    pub orbit_rotation: Quaternion,
    pub orbit_angular_speed: f32,
    pub current_angle: f32,
    pub current_rotation: Quaternion,
    pub next_rotation: Quaternion,
    pub grid_mode: i32,
    pub node_capacity: i32,
    pub node_cursor: i32,
    pub node_recycle_cursor: i32,
    #[dsv(index_gated, len = "live(node_cursor)")]
    pub node_pool: Slots<DysonNode>,
    #[dsv(recycle, len = "node_recycle_cursor")]
    pub node_recycle: Vec<i32>,
    pub frame_capacity: i32,
    pub frame_cursor: i32,
    pub frame_recycle_cursor: i32,
    #[dsv(index_gated, len = "live(frame_cursor)")]
    pub frame_pool: Slots<DysonFrame>,
    #[dsv(recycle, len = "frame_recycle_cursor")]
    pub frame_recycle: Vec<i32>,
    pub shell_capacity: i32,
    pub shell_cursor: i32,
    pub shell_recycle_cursor: i32,
    #[dsv(index_gated, len = "live(shell_cursor)")]
    pub shell_pool: Slots<DysonShell>,
    #[dsv(recycle, len = "shell_recycle_cursor")]
    pub shell_recycle: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 4)]
pub struct DysonNode {
    pub id: i32,
    pub proto_id: i32,
    pub layer_id: i32,
    pub in_use: bool,
    pub reserved: bool,
    pub pos: Vector3,
    pub sp: i32,
    pub sp_max: i32,
    pub sp_ordered: i32,
    pub cp_ordered: i32,
    pub rid: i32,
    pub frame_turn: i32,
    pub shell_turn: i32,
    pub sp_req: i32,
    pub cp_req: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct DysonFrame {
    pub id: i32,
    pub proto_id: i32,
    pub layer_id: i32,
    pub reserved: bool,
    pub node_id: i32,
    pub node_id2: i32,
    pub euler: bool,
    pub sp_a: i32,
    pub sp_b: i32,
    pub sp_max: i32,
}

/// A shell panel spanning a polygon of nodes
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct DysonShell {
    pub id: i32,
    pub proto_id: i32,
    pub layer_id: i32,
    pub rand_seed: i32,
    #[dsv(prefixed)]
    pub polygon: Vec<Vector3>,
    #[dsv(prefixed)]
    pub node_ids: Vec<i32>,
    pub vertex_count: i32,
    pub triangle_count: i32,
    #[dsv(prefixed)]
    pub verts: Vec<Vector3>,
    #[dsv(prefixed)]
    pub pq_arr: Vec<IntVector2>,
    #[dsv(prefixed)]
    pub tris: Vec<i32>,
    #[dsv(prefixed)]
    pub v_adjs: Vec<i32>,
    #[dsv(prefixed)]
    pub vert_attr: Vec<i32>,
    #[dsv(prefixed)]
    pub vertsq: Vec<i32>,
    #[dsv(prefixed)]
    pub vertsq_offset: Vec<i32>,
    #[dsv(prefixed)]
    pub nodecps: Vec<i32>,
    #[dsv(prefixed)]
    pub vertcps: Vec<i32>,
    pub vert_recycle_array_size: i32,
    pub vert_recycle_cursor: i32,
    #[dsv(recycle, len = "vert_recycle_cursor")]
    pub vert_recycle: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct DysonRocket {
    pub id: i32,
    pub node_layer_id: i32,
    pub node_id: i32,
    pub planet_id: i32,
    pub t: f32,
    pub u_speed: f32,
    pub u_pos: VectorLF3,
    pub u_rot: Quaternion,
    pub u_vel: Vector3,
    pub launch: Vector3,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct DysonNodeRData {
    pub id: i32,
    pub layer_id: i32,
    pub pos: Vector3,
    pub angular_vel: f32,
    pub layer_rot: Quaternion,
}

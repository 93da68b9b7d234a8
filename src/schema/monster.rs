use super::{MonsterState, Vector3};
use crate::{pool::live, Decode};

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct MonsterComponent {
    pub id: i32,
    pub entity_id: i32,
    pub walk_speed: f32,
    pub point0: Vector3,
    pub point1: Vector3,
    pub point2: Vector3,
    pub direction: i32,
    pub stop_time: f32,
    pub t: f32,
    pub stop_current_time: f32,
    #[dsv(width = "i32")]
    pub monster_state: MonsterState,
    pub step_distance: f32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct MonsterSystem {
    pub monster_capacity: i32,
    pub monster_cursor: i32,
    pub monster_recycle_cursor: i32,
    #[dsv(len = "live(monster_cursor)")]
    pub monster_pool: Vec<MonsterComponent>,
    #[dsv(recycle, len = "monster_recycle_cursor")]
    pub monster_recycle: Vec<i32>,
}

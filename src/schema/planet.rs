use super::{
    CargoContainer, CargoTraffic, FactoryStorage, FactorySystem, MonsterSystem, PlanetTransport,
    PowerSystem, Quaternion, Vector3, VeinType,
};
use crate::{pool::live, Decode};

/// Everything built on, or growing on, a single planet
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 1)]
pub struct PlanetFactory {
    pub planet_id: i32,
    pub planet: PlanetData,
    pub entity_capacity: i32,
    pub entity_cursor: i32,
    pub entity_recycle_cursor: i32,
    #[dsv(len = "live(entity_cursor)")]
    pub entity_pool: Vec<EntityData>,
    #[dsv(len = "live(entity_cursor)")]
    pub entity_anim_pool: Vec<AnimData>,
    #[dsv(len = "live(entity_cursor)")]
    pub entity_sign_pool: Vec<SignData>,

    /// Sixteen connection slots per entity
    #[dsv(len = "live(entity_cursor).saturating_mul(16)")]
    pub entity_conn_pool: Vec<i32>,
    #[dsv(recycle, len = "entity_recycle_cursor")]
    pub entity_recycle: Vec<i32>,
    pub prebuild_capacity: i32,
    pub prebuild_cursor: i32,
    pub prebuild_recycle_cursor: i32,
    #[dsv(len = "live(prebuild_cursor)")]
    pub prebuild_pool: Vec<PrebuildData>,
    #[dsv(len = "live(prebuild_cursor).saturating_mul(16)")]
    pub prebuild_conn_pool: Vec<i32>,
    #[dsv(recycle, len = "prebuild_recycle_cursor")]
    pub prebuild_recycle: Vec<i32>,
    pub vege_capacity: i32,
    pub vege_cursor: i32,
    pub vege_recycle_cursor: i32,
    #[dsv(len = "live(vege_cursor)")]
    pub vege_pool: Vec<VegeData>,
    #[dsv(recycle, len = "vege_recycle_cursor")]
    pub vege_recycle: Vec<i32>,
    pub vein_capacity: i32,
    pub vein_cursor: i32,
    pub vein_recycle_cursor: i32,
    #[dsv(len = "live(vein_cursor)")]
    pub vein_pool: Vec<VeinData>,
    #[dsv(recycle, len = "vein_recycle_cursor")]
    pub vein_recycle: Vec<i32>,
    #[dsv(len = "live(vein_cursor)")]
    pub vein_anim_pool: Vec<AnimData>,
    pub cargo_container: CargoContainer,
    pub cargo_traffic: CargoTraffic,
    pub factory_storage: FactoryStorage,
    pub power_system: PowerSystem,
    pub factory_system: FactorySystem,
    pub transport: PlanetTransport,
    pub monster_system: MonsterSystem,
    pub platform_system: PlatformSystem,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlanetData {
    #[dsv(bytes, prefixed)]
    pub mod_data: Vec<u8>,

    /// Total amount of each resource, indexed by [`VeinType`] value
    #[dsv(prefixed)]
    pub vein_amounts: Vec<i64>,
    #[dsv(prefixed)]
    pub vein_groups: Vec<VeinGroup>,
}

impl PlanetData {
    /// The resources present on the planet alongside their total amount
    ///
    /// ```rust
    /// use dsv::{PlanetData, VeinType};
    ///
    /// let planet = PlanetData {
    ///     mod_data: Vec::new(),
    ///     vein_amounts: vec![0, 1200, 0, 0, 0, 0, 0, 50_000],
    ///     vein_groups: Vec::new(),
    /// };
    ///
    /// let totals: Vec<_> = planet.vein_totals().collect();
    /// assert_eq!(totals, vec![(VeinType::Iron, 1200), (VeinType::Oil, 50_000)]);
    /// ```
    pub fn vein_totals(&self) -> impl Iterator<Item = (VeinType, i64)> + '_ {
        self.vein_amounts
            .iter()
            .enumerate()
            .filter(|(_, amount)| **amount != 0)
            .map(|(i, amount)| (VeinType::from(i as i32), *amount))
    }
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VeinGroup {
    #[dsv(width = "i32")]
    pub kind: VeinType,
    pub pos: Vector3,
    pub count: i32,
    pub amount: i64,
}

/// A placed building. Component ids are zero when the entity lacks that
/// component.
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0, tag = "u8")]
pub struct EntityData {
    pub id: i32,
    pub proto_id: i16,
    pub model_index: i16,
    pub pos: Vector3,
    pub rot: Quaternion,
    pub belt_id: i32,
    pub splitter_id: i32,
    pub storage_id: i32,
    pub tank_id: i32,
    pub miner_id: i32,
    pub inserter_id: i32,
    pub assembler_id: i32,
    pub fractionate_id: i32,
    pub ejector_id: i32,
    pub silo_id: i32,
    pub lab_id: i32,
    pub station_id: i32,
    pub power_node_id: i32,
    pub power_gen_id: i32,
    pub power_con_id: i32,
    pub power_acc_id: i32,
    pub power_exc_id: i32,
    pub monster_id: i32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnimData {
    pub time: f32,
    pub prepare_length: f32,
    pub working_length: f32,
    pub state: u32,
    pub power: f32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignData {
    pub sign_type: u32,
    pub icon_type: u32,
    pub icon_id0: u32,
    pub icon_id1: u32,
    pub icon_id2: u32,
    pub icon_id3: u32,
    pub count0: f32,
    pub count1: f32,
    pub count2: f32,
    pub count3: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// A building that has been placed but not yet constructed
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0, tag = "u8")]
pub struct PrebuildData {
    pub id: i32,
    pub proto_id: i16,
    pub model_index: i16,
    pub pos: Vector3,
    pub rot: Quaternion,
    pub pos2: Vector3,
    pub rot2: Quaternion,
    pub up_entity: i32,
    pub pick_offset: i16,
    pub insert_offset: i16,
    pub recipe_id: i32,
    pub filter_id: i32,
    #[dsv(prefixed)]
    pub ref_arr: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0, tag = "u8")]
pub struct VegeData {
    pub id: i32,
    pub proto_id: i16,
    pub model_index: i16,
    pub hp: i16,
    pub pos: Vector3,
    pub rot: Quaternion,
    pub scl: Vector3,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0, tag = "u8")]
pub struct VeinData {
    pub id: i32,
    #[dsv(width = "i16")]
    pub kind: VeinType,
    pub model_index: i16,
    pub group_index: i16,
    pub amount: i32,
    pub product_id: i32,
    pub pos: Vector3,
    pub miner_count: i32,
    pub miner_id0: i32,
    pub miner_id1: i32,
    pub miner_id2: i32,
    pub miner_id3: i32,
}

/// Terrain reshaping (foundations) laid on the planet
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PlatformSystem {
    #[dsv(bytes, prefixed)]
    pub reform_data: Vec<u8>,
    #[dsv(prefixed)]
    pub reform_offsets: Vec<u32>,
}

use super::{InserterStage, MinerType, Quaternion, RecipeType, Vector3, WorkState};
use crate::{pool::live, Decode, Error, Reader};

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct MinerComponent {
    pub id: i32,
    pub entity_id: i32,
    pub pc_id: i32,
    #[dsv(width = "i32")]
    pub kind: MinerType,
    pub speed: i32,
    pub time: i32,
    pub period: i32,
    pub insert_target: i32,
    #[dsv(width = "i32")]
    pub workstate: WorkState,
    #[dsv(prefixed)]
    pub veins: Vec<i32>,
    pub current_vein_index: i32,
    pub minimum_vein_amount: i32,
    pub product_id: i32,
    pub product_count: i32,
    pub seed: u32,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct InserterComponent {
    pub id: i32,
    pub entity_id: i32,
    pub pc_id: i32,
    #[dsv(width = "i32")]
    pub stage: InserterStage,
    pub speed: i32,
    pub time: i32,
    pub stt: i32,
    pub delay: i32,
    pub pick_target: i32,
    pub insert_target: i32,
    pub care_needs: bool,
    pub can_stack: bool,
    pub pick_offset: i16,
    pub insert_offset: i16,
    pub filter: i32,
    pub item_id: i32,
    pub stack_count: i32,
    pub stack_size: i32,
    pub pos2: Vector3,
    pub rot2: Quaternion,
    pub t1: i16,
    pub t2: i16,
}

/// Item flow of a recipe in progress. Every list carries its own length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RecipeState {
    #[dsv(prefixed)]
    pub requires: Vec<i32>,
    #[dsv(prefixed)]
    pub require_counts: Vec<i32>,
    #[dsv(prefixed)]
    pub served: Vec<i32>,
    #[dsv(prefixed)]
    pub needs: Vec<i32>,
    #[dsv(prefixed)]
    pub products: Vec<i32>,
    #[dsv(prefixed)]
    pub product_counts: Vec<i32>,
    #[dsv(prefixed)]
    pub produced: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssemblerRecipe {
    #[dsv(width = "i32")]
    pub recipe_type: RecipeType,
    pub time_spend: i32,
    pub state: RecipeState,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct AssemblerComponent {
    pub id: i32,
    pub entity_id: i32,
    pub pc_id: i32,
    pub replicating: bool,
    pub outputing: bool,
    pub speed: i32,
    pub time: i32,
    pub recipe_id: i32,

    /// Only written for assemblers with a recipe selected
    #[dsv(when = "recipe_id > 0")]
    pub recipe: Option<AssemblerRecipe>,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct FractionateComponent {
    pub id: i32,
    pub entity_id: i32,
    pub pc_id: i32,
    pub belt0: i32,
    pub belt1: i32,
    pub belt2: i32,
    pub is_output0: bool,
    pub is_output1: bool,
    pub is_output2: bool,
    pub is_working: bool,
    pub produce_prob: f32,
    pub need: i32,
    pub product: i32,
    pub need_curr_count: i32,
    pub product_curr_count: i32,
    pub ori_product_curr_count: i32,
    pub progress: i32,
    pub is_rand: bool,
    pub fractionate_success: bool,
    pub need_max_count: i32,
    pub product_max_count: i32,
    pub ori_product_max_count: i32,
    pub seed: u32,
}

/// EM rail ejector
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct EjectorComponent {
    pub id: i32,
    pub entity_id: i32,
    pub planet_id: i32,
    pub pc_id: i32,
    pub direction: i32,
    pub time: i32,
    pub fired: bool,
    pub charge_spend: i32,
    pub cold_spend: i32,
    pub bullet_id: i32,
    pub bullet_count: i32,
    pub orbit_id: i32,
    pub pivot_y: f32,
    pub muzzle_y: f32,
    pub local_pos_n: Vector3,
    pub local_alt: f32,
    pub local_rot: Quaternion,
    pub local_dir: Vector3,
}

/// Vertical launching silo
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct SiloComponent {
    pub id: i32,
    pub entity_id: i32,
    pub planet_id: i32,
    pub pc_id: i32,
    pub direction: i32,
    pub time: i32,
    pub fired: bool,
    pub charge_spend: i32,
    pub cold_spend: i32,
    pub bullet_id: i32,
    pub bullet_count: i32,
    pub auto_index: i32,
    pub has_node: bool,
    pub local_pos: Vector3,
    pub local_rot: Quaternion,
}

#[derive(Debug, Clone, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabResearch {
    #[dsv(prefixed)]
    pub matrix_points: Vec<i32>,
    #[dsv(prefixed)]
    pub matrix_served: Vec<i32>,
    #[dsv(prefixed)]
    pub needs: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabRecipe {
    pub time_spend: i32,
    pub state: RecipeState,
}

/// What a lab is busy with
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LabWork {
    Idle,
    Research(LabResearch),
    Recipe(LabRecipe),
}

impl LabWork {
    /// Reads the tail of a lab. Research mode takes precedence over a
    /// selected recipe.
    pub fn decode_for(
        reader: &mut Reader<'_>,
        research_mode: bool,
        recipe_id: i32,
    ) -> Result<LabWork, Error> {
        if research_mode {
            LabResearch::decode(reader).map(LabWork::Research)
        } else if recipe_id > 0 {
            LabRecipe::decode(reader).map(LabWork::Recipe)
        } else {
            Ok(LabWork::Idle)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct LabComponent {
    pub id: i32,
    pub entity_id: i32,
    pub pc_id: i32,
    pub next_lab_id: i32,
    pub replicating: bool,
    pub outputing: bool,
    pub time: i32,
    pub hash_bytes: i32,
    pub research_mode: bool,
    pub recipe_id: i32,
    pub tech_id: i32,
    #[dsv(with = "LabWork::decode_for(reader, research_mode, recipe_id)")]
    pub work: LabWork,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct FactorySystem {
    pub miner_capacity: i32,
    pub miner_cursor: i32,
    pub miner_recycle_cursor: i32,
    #[dsv(len = "live(miner_cursor)")]
    pub miner_pool: Vec<MinerComponent>,
    #[dsv(recycle, len = "miner_recycle_cursor")]
    pub miner_recycle: Vec<i32>,

    pub inserter_capacity: i32,
    pub inserter_cursor: i32,
    pub inserter_recycle_cursor: i32,
    #[dsv(len = "live(inserter_cursor)")]
    pub inserter_pool: Vec<InserterComponent>,
    #[dsv(recycle, len = "inserter_recycle_cursor")]
    pub inserter_recycle: Vec<i32>,

    pub assembler_capacity: i32,
    pub assembler_cursor: i32,
    pub assembler_recycle_cursor: i32,
    #[dsv(len = "live(assembler_cursor)")]
    pub assembler_pool: Vec<AssemblerComponent>,
    #[dsv(recycle, len = "assembler_recycle_cursor")]
    pub assembler_recycle: Vec<i32>,

    pub fractionate_capacity: i32,
    pub fractionate_cursor: i32,
    pub fractionate_recycle_cursor: i32,
    #[dsv(len = "live(fractionate_cursor)")]
    pub fractionate_pool: Vec<FractionateComponent>,
    #[dsv(recycle, len = "fractionate_recycle_cursor")]
    pub fractionate_recycle: Vec<i32>,

    pub ejector_capacity: i32,
    pub ejector_cursor: i32,
    pub ejector_recycle_cursor: i32,
    #[dsv(len = "live(ejector_cursor)")]
    pub ejector_pool: Vec<EjectorComponent>,
    #[dsv(recycle, len = "ejector_recycle_cursor")]
    pub ejector_recycle: Vec<i32>,

    pub silo_capacity: i32,
    pub silo_cursor: i32,
    pub silo_recycle_cursor: i32,
    #[dsv(len = "live(silo_cursor)")]
    pub silo_pool: Vec<SiloComponent>,
    #[dsv(recycle, len = "silo_recycle_cursor")]
    pub silo_recycle: Vec<i32>,

    pub lab_capacity: i32,
    pub lab_cursor: i32,
    pub lab_recycle_cursor: i32,
    #[dsv(len = "live(lab_cursor)")]
    pub lab_pool: Vec<LabComponent>,
    #[dsv(recycle, len = "lab_recycle_cursor")]
    pub lab_recycle: Vec<i32>,
}

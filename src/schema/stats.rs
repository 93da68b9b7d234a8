use crate::{pool::live, Decode};

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct GameStatData {
    #[dsv(prefixed)]
    pub tech_hashed_history: Vec<i32>,
    pub production: ProductionStatistics,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct ProductionStatistics {
    #[dsv(prefixed)]
    pub factory_stat_pool: Vec<FactoryProductionStat>,
    #[dsv(prefixed)]
    pub first_create_ids: Vec<i32>,
    #[dsv(prefixed)]
    pub favorite_ids: Vec<i32>,
}

/// Production and power history of a single factory
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 1)]
pub struct FactoryProductionStat {
    pub product_capacity: i32,
    pub product_cursor: i32,
    #[dsv(len = "live(product_cursor)")]
    pub product_pool: Vec<ProductStat>,

    /// A factory tracks at most five power statistics
    #[dsv(prefixed, limit = 5)]
    pub power_pool: Vec<PowerStat>,
    #[dsv(prefixed)]
    pub product_indices: Vec<i32>,
    pub energy_consumption: i64,
}

#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct ProductStat {
    #[dsv(prefixed)]
    pub count: Vec<i32>,
    #[dsv(prefixed)]
    pub cursor: Vec<i32>,
    #[dsv(prefixed)]
    pub total: Vec<i32>,
    pub item_id: i32,
}

/// Unlike `ProductStat`, no item id is written
#[derive(Debug, Clone, PartialEq, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[dsv(version = 0)]
pub struct PowerStat {
    #[dsv(prefixed)]
    pub energy: Vec<i64>,
    #[dsv(prefixed)]
    pub cursor: Vec<i32>,
    #[dsv(prefixed)]
    pub total: Vec<i64>,
}

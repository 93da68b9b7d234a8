//! Enumerations stored as plain integers. The wire width is chosen by the
//! field that holds the enum, so these only convert from an already decoded
//! `i32`. Values outside the known set are kept as `Other`.

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $value:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum $name {
            $($variant,)*
            Other(i32),
        }

        impl $name {
            /// The integer written to the save
            pub fn value(&self) -> i32 {
                match *self {
                    $($name::$variant => $value,)*
                    $name::Other(x) => x,
                }
            }
        }

        impl From<i32> for $name {
            fn from(x: i32) -> Self {
                match x {
                    $($value => $name::$variant,)*
                    x => $name::Other(x),
                }
            }
        }
    };
}

wire_enum! {
    /// How a storage container treats its contents
    pub enum StorageType {
        Default = 0,
        Fuel = 1,
        Filtered = 9,
    }
}

wire_enum! {
    pub enum NaviStage {
        None = 0,
        Departure = 1,
        OriginOrbit = 2,
        AccOrbit = 3,
        Space = 4,
        DestOrbit = 5,
        Approaching = 6,
    }
}

wire_enum! {
    pub enum MovementState {
        Walk = 0,
        Drift = 1,
        Fly = 2,
        Sail = 3,
    }
}

wire_enum! {
    /// A planetary resource. Doubles as the index into a planet's vein
    /// amount table.
    pub enum VeinType {
        None = 0,
        Iron = 1,
        Copper = 2,
        Silicium = 3,
        Titanium = 4,
        Stone = 5,
        Coal = 6,
        Oil = 7,
        Fireice = 8,
        Diamond = 9,
        Fractal = 10,
        Crysrub = 11,
        Grat = 12,
        Bamboo = 13,
        Mag = 14,
    }
}

/// Converts an oil vein amount into the extraction rate shown in game
pub const OIL_SPEED_MULTIPLIER: f64 = 4e-5;

impl VeinType {
    /// The resource name as displayed in game
    pub fn display_name(&self) -> &'static str {
        match *self {
            VeinType::None => "None",
            VeinType::Iron => "Iron Ore",
            VeinType::Copper => "Copper Ore",
            VeinType::Silicium => "Silicon Ore",
            VeinType::Titanium => "Titanium Ore",
            VeinType::Stone => "Stone Ore",
            VeinType::Coal => "Coal Ore",
            VeinType::Oil => "Crude Oil",
            VeinType::Fireice => "Fire Ice",
            VeinType::Diamond => "Kimberlite Ore",
            VeinType::Fractal => "Fractal Silicon",
            VeinType::Crysrub => "Crysrub",
            VeinType::Grat => "Optical Grating Crystal",
            VeinType::Bamboo => "Bamboo",
            VeinType::Mag => "Unipolar Magnet",
            VeinType::Other(_) => "Unknown",
        }
    }

    /// Scales a raw vein amount into the unit the game displays
    pub fn display_amount(&self, amount: i64) -> f64 {
        match *self {
            VeinType::Oil => amount as f64 * OIL_SPEED_MULTIPLIER,
            _ => amount as f64,
        }
    }
}

wire_enum! {
    pub enum MinerType {
        None = 0,
        Water = 1,
        Vein = 2,
        Oil = 3,
    }
}

wire_enum! {
    pub enum WorkState {
        Idle = 0,
        Running = 1,
        Outputing = 2,
        Lack = 3,
        Full = 4,
    }
}

wire_enum! {
    pub enum InserterStage {
        Picking = 0,
        Sending = 1,
        Inserting = 2,
        Returning = 3,
    }
}

wire_enum! {
    pub enum RecipeType {
        None = 0,
        Smelt = 1,
        Chemical = 2,
        Refine = 3,
        Assemble = 4,
        Particle = 5,
        Exchange = 6,
        PhotonStore = 7,
        Fractionate = 8,
        Research = 15,
    }
}

wire_enum! {
    pub enum LogisticStorage {
        None = 0,
        Supply = 1,
        Demand = 2,
    }
}

wire_enum! {
    pub enum MonsterState {
        Null = 0,
        Stopped = 1,
        Wandering = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(0, StorageType::Default)]
    #[case(1, StorageType::Fuel)]
    #[case(9, StorageType::Filtered)]
    #[case(2, StorageType::Other(2))]
    fn test_storage_type_gaps(#[case] raw: i32, #[case] expected: StorageType) {
        let actual = StorageType::from(raw);
        assert_eq!(actual, expected);
        assert_eq!(actual.value(), raw);
    }

    #[rstest]
    #[case(15, RecipeType::Research)]
    #[case(9, RecipeType::Other(9))]
    fn test_recipe_type(#[case] raw: i32, #[case] expected: RecipeType) {
        assert_eq!(RecipeType::from(raw), expected);
    }

    #[test]
    fn test_vein_display() {
        assert_eq!(VeinType::from(7).display_name(), "Crude Oil");
        assert!((VeinType::Oil.display_amount(50_000) - 2.0).abs() < 1e-9);
        assert_eq!(VeinType::Iron.display_amount(50_000), 50_000.0);
        assert_eq!(VeinType::from(99).display_name(), "Unknown");
    }
}

use crate::Decode;

/// 2D integer vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntVector2 {
    pub x: i32,
    pub y: i32,
}

/// 3D single precision vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 3D double precision vector, used for positions in universe space
#[derive(Debug, Clone, Copy, PartialEq, Default, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VectorLF3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

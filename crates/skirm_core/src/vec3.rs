use std::fmt::Display;

/// Simple 3d coordinate math struct for battlescape positions (z is the level).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct IVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Sugar macro
#[macro_export]
macro_rules! v {
    ($x: expr, $y: expr, $z: expr) => {
        IVec3::new($x, $y, $z)
    };
}

impl IVec3 {
    pub const ZERO: IVec3 = IVec3 { x: 0, y: 0, z: 0 };
    pub const ONE: IVec3 = IVec3 { x: 1, y: 1, z: 1 };
    pub const X: IVec3 = IVec3 { x: 1, y: 0, z: 0 };
    pub const Y: IVec3 = IVec3 { x: 0, y: 1, z: 0 };
    pub const Z: IVec3 = IVec3 { x: 0, y: 0, z: 1 };
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
    pub fn splat(v: i32) -> Self {
        v!(v, v, v)
    }
    pub fn length(&self) -> i32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }
    pub fn min(&self, min: Self) -> IVec3 {
        Self {
            x: self.x.min(min.x),
            y: self.y.min(min.y),
            z: self.z.min(min.z),
        }
    }
    pub fn max(&self, max: Self) -> IVec3 {
        Self {
            x: self.x.max(max.x),
            y: self.y.max(max.y),
            z: self.z.max(max.z),
        }
    }
}

impl Display for IVec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl std::ops::Add for IVec3 {
    type Output = IVec3;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl std::ops::Sub for IVec3 {
    type Output = IVec3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl std::ops::Mul<i32> for IVec3 {
    type Output = IVec3;

    fn mul(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl std::ops::Neg for IVec3 {
    type Output = IVec3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

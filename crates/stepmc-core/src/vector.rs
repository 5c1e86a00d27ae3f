//! Small vector value types used by the kinematics surface.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A three-component Cartesian vector.
///
/// Carries no unit information of its own; the owning API documents
/// whether components are native or external units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Construct from components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Component-wise scaling by `1 / factor`.
    ///
    /// This is the shape every unit conversion takes: native value
    /// divided by a [`units`](crate::units) constant.
    pub fn scaled_down(self, factor: f64) -> Vec3 {
        Vec3::new(self.x / factor, self.y / factor, self.z / factor)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A spatial vector plus a fourth component.
///
/// Used for position + global time and for momentum + total energy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FourVector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// Time or total-energy component.
    pub t: f64,
}

impl FourVector {
    /// Construct from a spatial vector and a fourth component.
    pub fn new(spatial: Vec3, t: f64) -> Self {
        Self {
            x: spatial.x,
            y: spatial.y,
            z: spatial.z,
            t,
        }
    }

    /// The spatial part.
    pub fn spatial(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_down_divides_each_component() {
        let v = Vec3::new(10.0, 20.0, 30.0).scaled_down(10.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn four_vector_round_trips_spatial_part() {
        let p = FourVector::new(Vec3::new(1.0, 2.0, 3.0), 4.0);
        assert_eq!(p.spatial(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.t, 4.0);
    }
}

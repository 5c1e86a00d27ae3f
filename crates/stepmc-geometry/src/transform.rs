//! Affine frame transforms between the global frame and a volume's
//! local frame.

use stepmc_core::Vec3;

/// Selects what an affine transform is applied to.
///
/// Mirrors the classic `iflag` argument of the G3 `gmtod`/`gdtom`
/// routines, made unrepresentable-when-wrong: there is no third value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformMode {
    /// Transform a point: rotation plus translation.
    Position,
    /// Transform a free vector / direction cosines: rotation only.
    Direction,
}

/// A rigid affine transform `local = R · global + t`.
///
/// The convention matches the touchable's accumulated transform: it
/// maps *global* coordinates into the *local* frame of the touchable's
/// current volume. Use [`inverse`](AffineTransform::inverse) for the
/// local→global direction.
///
/// Rows of `rotation` are the local basis vectors expressed in global
/// coordinates, so `R` is orthogonal and the inverse rotation is the
/// transpose.
#[derive(Clone, Debug, PartialEq)]
pub struct AffineTransform {
    rotation: [[f64; 3]; 3],
    translation: Vec3,
}

impl AffineTransform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: Vec3::ZERO,
        }
    }

    /// Construct from a rotation matrix and a translation vector.
    ///
    /// The rotation must be orthogonal; this is not checked here because
    /// transforms are produced by composing the constructors below.
    pub fn new(rotation: [[f64; 3]; 3], translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// A pure translation: `local = global + t`.
    pub fn translation(t: Vec3) -> Self {
        Self {
            rotation: Self::identity().rotation,
            translation: t,
        }
    }

    /// Rotation about the global Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            rotation: [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]],
            translation: Vec3::ZERO,
        }
    }

    /// Rotation about the global X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            rotation: [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]],
            translation: Vec3::ZERO,
        }
    }

    /// Apply the rotation only.
    fn rotate(&self, v: Vec3) -> Vec3 {
        let r = &self.rotation;
        Vec3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }

    /// Transform a point from the source frame to the target frame.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotate(p) + self.translation
    }

    /// Transform a free vector (direction cosines); translation is
    /// ignored.
    pub fn transform_axis(&self, v: Vec3) -> Vec3 {
        self.rotate(v)
    }

    /// Apply according to `mode`.
    pub fn apply(&self, v: Vec3, mode: TransformMode) -> Vec3 {
        match mode {
            TransformMode::Position => self.transform_point(v),
            TransformMode::Direction => self.transform_axis(v),
        }
    }

    /// The inverse transform: `global = Rᵀ · (local - t)`.
    pub fn inverse(&self) -> AffineTransform {
        let r = &self.rotation;
        let rt = [
            [r[0][0], r[1][0], r[2][0]],
            [r[0][1], r[1][1], r[2][1]],
            [r[0][2], r[1][2], r[2][2]],
        ];
        let inv = AffineTransform {
            rotation: rt,
            translation: Vec3::ZERO,
        };
        let t = inv.rotate(self.translation);
        AffineTransform {
            rotation: rt,
            translation: t * -1.0,
        }
    }

    /// Compose: apply `self` first, then `next`.
    ///
    /// Used when accumulating a touchable's transform down the volume
    /// chain.
    pub fn then(&self, next: &AffineTransform) -> AffineTransform {
        let r1 = &self.rotation;
        let r2 = &next.rotation;
        let mut rotation = [[0.0; 3]; 3];
        for (i, row) in rotation.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = r2[i][0] * r1[0][j] + r2[i][1] * r1[1][j] + r2[i][2] * r1[2][j];
            }
        }
        AffineTransform {
            rotation,
            translation: next.rotate(self.translation) + next.translation,
        }
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).norm() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(AffineTransform::identity().transform_point(p), p);
    }

    #[test]
    fn translation_ignored_for_directions() {
        let t = AffineTransform::translation(Vec3::new(5.0, 5.0, 5.0));
        let v = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(t.transform_axis(v), v);
        assert_eq!(t.transform_point(v), Vec3::new(5.0, 5.0, 6.0));
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let t = AffineTransform::rotation_z(std::f64::consts::FRAC_PI_2);
        assert_close(
            t.transform_point(Vec3::new(1.0, 0.0, 0.0)),
            Vec3::new(0.0, -1.0, 0.0),
        );
    }

    #[test]
    fn compose_matches_sequential_application() {
        let a = AffineTransform::rotation_z(0.3);
        let b = AffineTransform::translation(Vec3::new(1.0, 2.0, 3.0));
        let p = Vec3::new(0.5, -1.5, 2.0);
        let composed = a.then(&b);
        assert_close(
            composed.transform_point(p),
            b.transform_point(a.transform_point(p)),
        );
    }

    proptest! {
        #[test]
        fn inverse_round_trips_points(
            angle in -3.14f64..3.14,
            tx in -100.0f64..100.0,
            ty in -100.0f64..100.0,
            tz in -100.0f64..100.0,
            px in -1000.0f64..1000.0,
            py in -1000.0f64..1000.0,
            pz in -1000.0f64..1000.0,
        ) {
            let t = AffineTransform::rotation_z(angle)
                .then(&AffineTransform::translation(Vec3::new(tx, ty, tz)));
            let p = Vec3::new(px, py, pz);
            let back = t.inverse().transform_point(t.transform_point(p));
            prop_assert!((back - p).norm() < 1e-6);
        }

        #[test]
        fn inverse_round_trips_directions(
            angle in -3.14f64..3.14,
            tilt in -3.14f64..3.14,
            vx in -1.0f64..1.0,
            vy in -1.0f64..1.0,
            vz in -1.0f64..1.0,
        ) {
            let t = AffineTransform::rotation_x(tilt)
                .then(&AffineTransform::rotation_z(angle))
                .then(&AffineTransform::translation(Vec3::new(9.0, -4.0, 2.0)));
            let v = Vec3::new(vx, vy, vz);
            let back = t.inverse().transform_axis(t.transform_axis(v));
            prop_assert!((back - v).norm() < 1e-9);
        }
    }
}

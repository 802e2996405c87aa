use bevy_math::{Mat3, Quat, Vec3};

/// Local forward axis. Bodies swim toward their -Z, like a camera.
pub const LOCAL_FORWARD: Vec3 = Vec3::NEG_Z;

#[inline]
pub fn forward_of(rotation: Quat) -> Vec3 {
    rotation * LOCAL_FORWARD
}

/// Rotation whose forward axis points along `direction`, keeping `up` as close
/// to the local +Y as possible.
///
/// Returns `None` when the direction is degenerate (zero length, not finite, or
/// parallel to `up`); callers keep their previous orientation in that case.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    let back = (-direction).try_normalize()?;
    let right = up.cross(back).try_normalize()?;
    let up = back.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, back)))
}

/// `look_rotation` from a position toward a point, with world up.
#[inline]
pub fn look_at(from: Vec3, target: Vec3) -> Option<Quat> {
    look_rotation(target - from, Vec3::Y)
}

/// Clamp the vertical component into the depth band. Depths are negative-down,
/// so `shallowest >= deepest`.
#[inline]
pub fn clamp_depth(point: Vec3, shallowest: f32, deepest: f32) -> Vec3 {
    debug_assert!(deepest <= shallowest, "depth band is inverted: [{deepest}, {shallowest}]");
    Vec3::new(point.x, point.y.clamp(deepest, shallowest), point.z)
}

/// Horizontal (XZ) unit direction from `from` toward `to`, or zero when the two
/// points share a vertical line.
#[inline]
pub fn planar_direction(from: Vec3, to: Vec3) -> Vec3 {
    let d = to - from;
    Vec3::new(d.x, 0.0, d.z).normalize_or_zero()
}

/// Position and orientation of a body, as read from or written to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn forward(&self) -> Vec3 {
        forward_of(self.rotation)
    }

    /// Transform a point from the body's local frame into the world.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.translation + self.rotation * local
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

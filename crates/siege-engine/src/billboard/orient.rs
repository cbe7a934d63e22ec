use glam::{Quat, Vec3};

/// Horizontal distances below this are treated as "viewpoint straight above/below".
const MIN_HORIZONTAL: f32 = 1e-4;

/// Rotation about the vertical axis that turns `base` toward `toward`, as seen from `from`.
///
/// `base` is expected to be a horizontal unit vector. Returns `None` when the
/// viewpoint sits directly above or below `from`: the horizontal direction has
/// no length and any normalization would produce NaN.
pub fn facing_rotation(base: Vec3, from: Vec3, toward: Vec3) -> Option<Quat> {
    let mut dir = toward - from;
    dir.y = 0.0;

    if dir.length() < MIN_HORIZONTAL {
        return None;
    }
    let dir = dir.normalize();

    let angle = base.dot(dir).clamp(-1.0, 1.0).acos();

    // Parallel or opposite directions give a zero cross product; any vertical
    // axis works for 0 or pi.
    let axis = base.cross(dir);
    let axis = if axis.length_squared() < 1e-12 {
        Vec3::Y
    } else {
        axis.normalize()
    };

    Some(Quat::from_axis_angle(axis, angle))
}

//! Small vector helpers shared by the parsers and geometry builders.

use glam::{Mat3, Quat, Vec3};

/// Find any unit vector perpendicular to `v`.
///
/// Returns `Vec3::X` for a (near) zero input.
pub(crate) fn find_perpendicular(v: Vec3) -> Vec3 {
    if v.length_squared() < 1e-8 {
        return Vec3::X;
    }
    let candidate = if v.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    v.cross(candidate).normalize()
}

/// Rotation taking the +Z axis onto `axis`.
pub(crate) fn rotation_onto(axis: Vec3) -> Quat {
    axis.try_normalize()
        .map_or(Quat::IDENTITY, |dir| Quat::from_rotation_arc(Vec3::Z, dir))
}

/// Orientation for an object at `eye` whose local -Z looks at `target`,
/// with world +Z kept up where possible.
pub(crate) fn look_at(eye: Vec3, target: Vec3) -> Quat {
    let Some(forward) = (target - eye).try_normalize() else {
        return Quat::IDENTITY;
    };
    let right = forward
        .cross(Vec3::Z)
        .try_normalize()
        .unwrap_or_else(|| find_perpendicular(forward));
    let up = right.cross(forward);
    Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_is_unit_and_orthogonal() {
        for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(1.0, 2.0, -3.0)] {
            let p = find_perpendicular(v);
            assert!((p.length() - 1.0).abs() < 1e-6);
            assert!(p.dot(v).abs() < 1e-5);
        }
        assert_eq!(find_perpendicular(Vec3::ZERO), Vec3::X);
    }

    #[test]
    fn rotation_maps_z_onto_axis() {
        for axis in [Vec3::X, -Vec3::Z, Vec3::new(0.3, -2.0, 1.0)] {
            let rotated = rotation_onto(axis) * Vec3::Z;
            assert!((rotated - axis.normalize()).length() < 1e-5);
        }
    }

    #[test]
    fn look_at_points_minus_z_at_target() {
        let eye = Vec3::new(15.0, 0.0, 15.0);
        let q = look_at(eye, Vec3::ZERO);
        let view = q * Vec3::NEG_Z;
        assert!((view - (-eye).normalize()).length() < 1e-5);
        // Looking straight down still yields a valid rotation.
        let down = look_at(Vec3::Z * 10.0, Vec3::ZERO) * Vec3::NEG_Z;
        assert!((down + Vec3::Z).length() < 1e-5);
    }
}

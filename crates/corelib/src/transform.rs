use crate::{CoreError, CoreResult, Matrix4};

/// Object placement: translation plus per-axis scale, no rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: [f32; 3],
    pub scale: [f32; 3],
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            translation: [0.0; 3],
            scale: [1.0; 3],
        }
    }

    #[inline]
    pub fn from_ts(translation: impl Into<[f32; 3]>, scale: impl Into<[f32; 3]>) -> Self {
        Self {
            translation: translation.into(),
            scale: scale.into(),
        }
    }

    #[inline]
    pub fn uniform_scale(translation: impl Into<[f32; 3]>, scale: f32) -> Self {
        Self::from_ts(translation, [scale; 3])
    }

    /// Model matrix: scale the identity, then put the offset in the last
    /// column. Equivalent to `T * S` since there is no rotation.
    pub fn matrix(&self) -> Matrix4 {
        let scaled = Matrix4::scale(&Matrix4::IDENTITY, self.scale);
        let m = Matrix4::translate(&scaled, self.translation);
        log::trace!("model matrix for {:?}:\n{}", self, m);
        m
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Parses `"x,y,z"`, or a single number broadcast to all three axes.
pub fn parse_vec3(s: &str) -> CoreResult<[f32; 3]> {
    let bad = || CoreError::ParseVector(s.to_owned());
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| bad())?;
    match parts.as_slice() {
        [v] => Ok([*v; 3]),
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_matches_glam_trs_without_rotation() {
        let t = Transform::from_ts([0.2, -0.6, 0.0], glam::Vec3::splat(0.06));
        let expected = glam::Mat4::from_scale_rotation_translation(
            glam::Vec3::splat(0.06),
            glam::Quat::IDENTITY,
            glam::vec3(0.2, -0.6, 0.0),
        );
        assert!(t.matrix().abs_diff_eq(&expected.into(), 1e-6));
    }

    #[test]
    fn model_maps_origin_to_translation() {
        let t = Transform::uniform_scale([1.5, -0.5, -1.0], 0.6);
        let p = t.matrix().transform_point3([0.0, 0.0, 0.0]);
        assert_eq!(p, [1.5, -0.5, -1.0]);
        let q = t.matrix().transform_point3([1.0, 0.0, 0.0]);
        assert!((q[0] - 2.1).abs() < 1e-6);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default(), Transform::identity());
    }

    #[test]
    fn parse_vec3_forms() {
        assert_eq!(parse_vec3("1,2,3").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(parse_vec3(" 0.5 , -1 ,2 ").unwrap(), [0.5, -1.0, 2.0]);
        assert_eq!(parse_vec3("0.25").unwrap(), [0.25; 3]);
        assert!(matches!(parse_vec3("1,2"), Err(CoreError::ParseVector(_))));
        assert!(parse_vec3("a,b,c").is_err());
        assert!(parse_vec3("").is_err());
    }
}

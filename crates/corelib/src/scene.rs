//! Placement of the demo's meshes in world space.

use crate::{Matrix4, Transform};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub transform: Transform,
}

impl SceneObject {
    pub const fn new(name: &'static str, transform: Transform) -> Self {
        Self { name, transform }
    }

    #[inline]
    pub fn model(&self) -> Matrix4 {
        self.transform.matrix()
    }

    /// `projection * view * model`.
    #[inline]
    pub fn mvp(&self, view: Matrix4, projection: Matrix4) -> Matrix4 {
        projection * view * self.model()
    }
}

/// The four objects drawn each frame, in draw order.
pub fn demo_objects() -> [SceneObject; 4] {
    [
        SceneObject::new("cottage", Transform::uniform_scale([0.2, -0.6, 0.0], 0.06)),
        SceneObject::new("human", Transform::uniform_scale([0.0, -0.35, 2.0], 0.001)),
        SceneObject::new("wolf_1", Transform::uniform_scale([1.5, -0.5, -1.0], 0.6)),
        SceneObject::new("wolf_2", Transform::uniform_scale([-1.5, -0.5, -2.0], 0.6)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_objects_are_placed() {
        let objs = demo_objects();
        let names: Vec<_> = objs.iter().map(|o| o.name).collect();
        assert_eq!(names, ["cottage", "human", "wolf_1", "wolf_2"]);

        let wolf = objs[3].model();
        assert_eq!(wolf.col(3), [-1.5, -0.5, -2.0, 1.0]);
        assert_eq!(wolf.diagonal(), [0.6, 0.6, 0.6, 1.0]);
    }

    #[test]
    fn mvp_applies_model_first() {
        let obj = SceneObject::new("probe", Transform::uniform_scale([1.0, 0.0, 0.0], 2.0));
        let view = Matrix4::translate(&Matrix4::IDENTITY, [0.0, 0.0, -5.0]);
        let mvp = obj.mvp(view, Matrix4::IDENTITY);
        assert_eq!(mvp.transform_point3([1.0, 0.0, 0.0]), [3.0, 0.0, -5.0]);

        let proj: Matrix4 =
            glam::Mat4::perspective_rh_gl(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0).into();
        let ours = obj.mvp(view, proj);
        let theirs = glam::Mat4::from(proj) * glam::Mat4::from(view) * glam::Mat4::from(obj.model());
        assert!(ours.abs_diff_eq(&theirs.into(), 1e-5));
    }
}

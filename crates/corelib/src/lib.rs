//! Core math shared by the demo: column-major `Matrix4`, per-object
//! `Transform`, and the demo scene placements.

use thiserror::Error;

pub mod mat4;
pub mod scene;
pub mod transform;

pub use mat4::Matrix4;
pub use transform::{Transform, parse_vec3};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Matrix4 index ({row}, {col}) out of range")]
    IndexOutOfRange { row: usize, col: usize },
    #[error("Invalid vector '{0}': expected 'x,y,z' or a single number")]
    ParseVector(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

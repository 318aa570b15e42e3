//! Column-major 4x4 transform matrix.
//!
//! Element `(row, col)` lives at linear index `row + col * 4`, so the backing
//! array can be uploaded as a GL/wgpu uniform without transposing.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::{CoreError, CoreResult};

/// 4x4 `f32` matrix, column-major.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Matrix4 {
    m: [f32; 16],
}

#[inline(always)]
const fn linear(row: usize, col: usize) -> usize {
    row + col * 4
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::identity();
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Ones where `i % 5 == 0` (positions 0, 5, 10, 15), zeros elsewhere.
    pub const fn identity() -> Self {
        let mut m = [0.0; 16];
        let mut i = 0;
        while i < 16 {
            if i % 5 == 0 {
                m[i] = 1.0;
            }
            i += 1;
        }
        Self { m }
    }

    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    #[inline]
    pub const fn as_cols_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Raw bytes for a `mat4` uniform (64 bytes, column-major).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Element at `(row, col)`.
    ///
    /// Only the linear index is bounds checked (in release builds), so
    /// `row > 3` silently addresses the next column. Use [`Matrix4::get`]
    /// for indices that come from outside.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> &f32 {
        debug_assert!(row < 4 && col < 4, "Matrix4 index ({row}, {col})");
        &self.m[linear(row, col)]
    }

    #[inline(always)]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        debug_assert!(row < 4 && col < 4, "Matrix4 index ({row}, {col})");
        &mut self.m[linear(row, col)]
    }

    /// Checked read of `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> CoreResult<f32> {
        check_index(row, col)?;
        Ok(self.m[linear(row, col)])
    }

    /// Checked mutable access to `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> CoreResult<&mut f32> {
        check_index(row, col)?;
        Ok(&mut self.m[linear(row, col)])
    }

    #[inline]
    pub fn col(&self, col: usize) -> [f32; 4] {
        let base = linear(0, col);
        [self.m[base], self.m[base + 1], self.m[base + 2], self.m[base + 3]]
    }

    #[inline]
    pub fn row(&self, row: usize) -> [f32; 4] {
        [
            self[(row, 0)],
            self[(row, 1)],
            self[(row, 2)],
            self[(row, 3)],
        ]
    }

    #[inline]
    pub fn diagonal(&self) -> [f32; 4] {
        [self.m[0], self.m[5], self.m[10], self.m[15]]
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Copy of `mat` with `translation` added to the top three entries of the
    /// last column.
    ///
    /// This is not `mat * T(translation)`: the offset is not run through the
    /// existing rotation/scale. Starting from identity the two coincide.
    pub fn translate(mat: &Self, translation: impl Into<[f32; 3]>) -> Self {
        let [tx, ty, tz] = translation.into();
        let mut out = *mat;
        out[(0, 3)] += tx;
        out[(1, 3)] += ty;
        out[(2, 3)] += tz;
        out
    }

    /// Copy of `mat` with the first three diagonal entries multiplied by
    /// `scale`.
    ///
    /// Off-diagonal terms (rotation, translation) are left alone, so this
    /// only matches `mat * S(scale)` for an axis-aligned `mat`.
    pub fn scale(mat: &Self, scale: impl Into<[f32; 3]>) -> Self {
        let [sx, sy, sz] = scale.into();
        let mut out = *mat;
        out[(0, 0)] *= sx;
        out[(1, 1)] *= sy;
        out[(2, 2)] *= sz;
        out
    }

    /// `self * v` for a homogeneous column vector.
    pub fn mul_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (i, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|k| self[(i, k)] * v[k]).sum();
        }
        out
    }

    /// Transforms a point (`w = 1`). No perspective divide.
    pub fn transform_point3(&self, p: [f32; 3]) -> [f32; 3] {
        let [x, y, z, _] = self.mul_vec4([p[0], p[1], p[2], 1.0]);
        [x, y, z]
    }

    /// Transforms a direction (`w = 0`), ignoring translation.
    pub fn transform_vector3(&self, v: [f32; 3]) -> [f32; 3] {
        let [x, y, z, _] = self.mul_vec4([v[0], v[1], v[2], 0.0]);
        [x, y, z]
    }

    /// True if every element differs by at most `max_abs_diff`.
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= max_abs_diff)
    }
}

fn check_index(row: usize, col: usize) -> CoreResult<()> {
    if row < 4 && col < 4 {
        Ok(())
    } else {
        log::debug!("rejected Matrix4 index ({row}, {col})");
        Err(CoreError::IndexOutOfRange { row, col })
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f32;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        self.at(row, col)
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        self.at_mut(row, col)
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    /// `C(i, j) = sum_k A(i, k) * B(k, j)`.
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = acc;
            }
        }
        out
    }
}

impl Mul<[f32; 4]> for Matrix4 {
    type Output = [f32; 4];

    #[inline]
    fn mul(self, rhs: [f32; 4]) -> [f32; 4] {
        self.mul_vec4(rhs)
    }
}

impl Add for Matrix4 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Matrix4 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl AddAssign for Matrix4 {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.m.iter_mut().zip(rhs.m) {
            *a += b;
        }
    }
}

impl SubAssign for Matrix4 {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.m.iter_mut().zip(rhs.m) {
            *a -= b;
        }
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        glam::Mat4::from_cols_array(&m.m)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            let [a, b, c, d] = self.row(i);
            writeln!(f, "[{a:>10.4} {b:>10.4} {c:>10.4} {d:>10.4}]")?;
        }
        Ok(())
    }
}

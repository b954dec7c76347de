//! Flat data for uniform uploads.
//!
//! Graphics APIs receive matrices and vectors as flat arrays of floats, with matrices in
//! column-major order. [`Uniform`] exposes that representation for all [`Matrix`] and [`Vector`]
//! types, and [`flatten`] concatenates several values for uploading uniform arrays.
//!
//! ```
//! use oogl_linalg::{uniform, vec3, Mat4f, Uniform};
//!
//! let model = Mat4f::translation(vec3(1.0, 2.0, 3.0));
//! assert_eq!(&model.as_flat()[12..], &[1.0, 2.0, 3.0, 1.0]);
//!
//! let mut buf = [0.0; 16];
//! model.write_flat(&mut buf)?;
//! assert_eq!(buf[..], *model.as_flat());
//!
//! let palette = uniform::flatten(&[vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)]);
//! assert_eq!(palette, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
//! # Ok::<_, oogl_linalg::Error>(())
//! ```

use crate::{Error, Matrix, Result, Vector};

/// Values that can be uploaded as a flat sequence of scalars.
pub trait Uniform {
    /// The scalar type of the flat representation.
    type Element: Copy;

    /// Number of scalars in the flat representation.
    const COMPONENTS: usize;

    /// Returns the flat representation, in upload order.
    fn as_flat(&self) -> &[Self::Element];

    /// Copies the flat representation into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `out` does not hold exactly [`Self::COMPONENTS`]
    /// elements. `out` is left unchanged in that case.
    fn write_flat(&self, out: &mut [Self::Element]) -> Result<()> {
        if out.len() != Self::COMPONENTS {
            log::trace!(
                "cannot write {} components into a buffer of {}",
                Self::COMPONENTS,
                out.len()
            );
            return Err(Error::SizeMismatch {
                expected: Self::COMPONENTS,
                actual: out.len(),
            });
        }

        out.copy_from_slice(self.as_flat());
        Ok(())
    }

    /// Returns the flat representation as raw bytes in native endianness.
    fn as_bytes(&self) -> &[u8]
    where
        Self: bytemuck::Pod,
    {
        bytemuck::bytes_of(self)
    }
}

impl<T: Copy, const N: usize> Uniform for Vector<T, N> {
    type Element = T;
    const COMPONENTS: usize = N;

    #[inline]
    fn as_flat(&self) -> &[T] {
        self.as_array()
    }
}

impl<T: Copy, const N: usize> Uniform for Matrix<T, N> {
    type Element = T;
    const COMPONENTS: usize = N * N;

    #[inline]
    fn as_flat(&self) -> &[T] {
        Matrix::as_flat(self)
    }
}

/// Concatenates the flat representations of `values`, for uploading a uniform array.
pub fn flatten<U: Uniform>(values: &[U]) -> Vec<U::Element> {
    let mut out = Vec::with_capacity(values.len() * U::COMPONENTS);
    for value in values {
        out.extend_from_slice(value.as_flat());
    }
    out
}

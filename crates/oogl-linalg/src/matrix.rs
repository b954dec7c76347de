use std::{array, fmt};

use crate::{Error, Number, One, Result, Vector, Zero};

mod ops;
mod transform;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A square, column-major matrix with `N` rows and `N` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_slice`] copies `N * N` elements in column-major order out of a slice. This is
///   the same order [`Matrix::as_flat`] returns them in.
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] take an array of rows or columns, which
///   allows writing matrices down in their natural reading order.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] and [`Matrix::scaling`] create diagonal matrices.
/// - Rotation, scaling and translation transforms have dedicated constructors, such as
///   [`Matrix::rotation`], [`Matrix::rotation_axis`] and [`Matrix::translation`].
///
/// Additionally, two constants are defined:
///
/// - [`Matrix::ZERO`] is the null matrix, with every element set to 0.
/// - `Matrix::IDENTITY` has 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for tuples of `(usize, usize)`. The first
/// element of the tuple is the *row*, the second is the *column*. Indices are 0-based. Element
/// `(i, j)` is stored at position `j * N + i` of the flat data.
///
/// ```
/// # use oogl_linalg::*;
/// let mut mat = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0])?;
/// assert_eq!(mat[(1, 0)], 2.0);
/// assert_eq!(mat[(0, 1)], 3.0);
///
/// mat.put(0, 1, 7.0);
/// assert_eq!(mat.as_flat(), &[1.0, 2.0, 7.0, 4.0]);
/// # Ok::<_, Error>(())
/// ```
///
/// Indexing out of bounds will panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// # Mutating and Non-Mutating Operations
///
/// Most operations come in two forms. The mutating form modifies the matrix in place and returns
/// `&mut Self` to allow chaining. The non-mutating form takes `self` by value and returns the
/// result:
///
/// | in place                       | new value                |
/// |--------------------------------|--------------------------|
/// | [`Matrix::transpose`]          | [`Matrix::transposed`]   |
/// | [`Matrix::add_in_place`]       | [`Matrix::plus`]         |
/// | [`Matrix::subtract_in_place`]  | [`Matrix::minus`]        |
/// | [`Matrix::scale_in_place`]     | [`Matrix::scale`]        |
/// | `Matrix::invert`               | `Matrix::inverse`        |
///
/// [`Matrix::transform`] and [`Matrix::compose`] compute matrix-vector and matrix-matrix
/// products. All of them are also available as operators.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| (row * 10 + col) as f32);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0],
    ///     [10.0, 11.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Mat2f::IDENTITY;
    /// assert_eq!(mat.get(1, 1), Some(&1.0));
    /// assert_eq!(mat.get(1, 0), Some(&0.0));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Replaces the element at `(row, col)` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn put(&mut self, row: usize, col: usize, value: T) -> &mut Self {
        self[(row, col)] = value;
        self
    }

    /// Returns the elements of this matrix as a flat slice in column-major order.
    ///
    /// This is the layout expected by OpenGL's `glUniformMatrix*` functions when their `transpose`
    /// argument is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(mat.as_flat(), &[1.0, 3.0, 2.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_flat(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements of this matrix as a mutable flat slice in column-major order.
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }
}

impl<T: Copy, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] by copying `N * N` elements, in column-major order, out of `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `elements` does not hold exactly `N * N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Mat2f::from_slice(&[1.0, 0.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(mat, Mat2f::IDENTITY);
    ///
    /// let err = Mat3f::from_slice(&[1.0, 0.0, 0.0, 1.0]).unwrap_err();
    /// assert_eq!(err, Error::InvalidDimension { expected: 9, actual: 4 });
    /// ```
    pub fn from_slice(elements: &[T]) -> Result<Self> {
        if elements.len() != N * N {
            log::trace!(
                "rejecting {} elements for a {}x{} matrix",
                elements.len(),
                N,
                N
            );
            return Err(Error::InvalidDimension {
                expected: N * N,
                actual: elements.len(),
            });
        }

        Ok(Self::from_fn(|row, col| elements[col * N + row]))
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(mat[(0, 1)], 2.0);
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Matrix::from_columns(rows).transposed()
    }

    /// Returns column `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, N> {
        self.0[col].into()
    }

    /// Returns row `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, N> {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Swaps the rows and columns of this matrix in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mut mat = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// mat.transpose();
    /// assert_eq!(mat.as_flat(), &[1.0, 3.0, 2.0, 4.0]);
    /// ```
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Returns the transpose of this matrix, leaving `self` unchanged.
    pub fn transposed(self) -> Self {
        Self::from_fn(|row, col| self[(col, row)])
    }
}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// The null matrix, with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);
}

impl<T: Zero + One> Matrix<T, 2> {
    /// The 2x2 identity matrix.
    pub const IDENTITY: Self = Self([[T::ONE, T::ZERO], [T::ZERO, T::ONE]]);
}

impl<T: Zero + One> Matrix<T, 3> {
    /// The 3x3 identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T: Zero + One> Matrix<T, 4> {
    /// The 4x4 identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T: Number, const N: usize> Matrix<T, N> {
    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let diag = Matrix::from_diagonal([1.0, 2.0, 3.0]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    ///     [0.0, 0.0, 3.0],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Adds `rhs` to `self` element-wise, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mut mat = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// mat.add_in_place(Mat2f::from_slice(&[4.0, 3.0, 2.0, 1.0]).unwrap());
    /// assert_eq!(mat.as_flat(), &[5.0, 5.0, 5.0, 5.0]);
    /// ```
    pub fn add_in_place(&mut self, rhs: Self) -> &mut Self {
        *self += rhs;
        self
    }

    /// Subtracts `rhs` from `self` element-wise, in place.
    pub fn subtract_in_place(&mut self, rhs: Self) -> &mut Self {
        *self -= rhs;
        self
    }

    /// Multiplies every element of `self` by `factor`, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mut mat = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// mat.scale_in_place(2.0).transpose();
    /// assert_eq!(mat.as_flat(), &[2.0, 6.0, 4.0, 8.0]);
    /// ```
    pub fn scale_in_place(&mut self, factor: T) -> &mut Self {
        *self *= factor;
        self
    }

    /// Returns the element-wise sum of `self` and `rhs`.
    #[inline]
    pub fn plus(self, rhs: Self) -> Self {
        self + rhs
    }

    /// Returns the element-wise difference of `self` and `rhs`.
    #[inline]
    pub fn minus(self, rhs: Self) -> Self {
        self - rhs
    }

    /// Returns `self` with every element multiplied by `factor`.
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        self * factor
    }

    /// Multiplies `vector`, treated as a column, by this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Mat2f::from_slice(&[2.0, 0.0, 0.0, 2.0]).unwrap();
    /// assert_eq!(mat.transform(vec2(2.0, 2.0)), vec2(4.0, 4.0));
    /// ```
    #[inline]
    pub fn transform(self, vector: Vector<T, N>) -> Vector<T, N> {
        self * vector
    }

    /// Computes the matrix product `self * rhs`.
    ///
    /// The resulting transform applies `rhs` first, then `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let m1 = Mat2f::from_slice(&[2.0, 0.0, 0.0, 2.0]).unwrap();
    /// let m2 = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m1.compose(m2).as_flat(), &[2.0, 4.0, 6.0, 8.0]);
    /// ```
    #[inline]
    pub fn compose(self, rhs: Self) -> Self {
        self * rhs
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }

    /// Divides the adjugate by `det`, failing if `det` is zero.
    fn inverse_from_adjugate(det: T, adjugate: impl FnOnce() -> Self) -> Result<Self> {
        if det == T::ZERO {
            log::debug!("attempt to invert a singular {}x{} matrix", N, N);
            return Err(Error::SingularMatrix);
        }
        Ok(adjugate() * (T::ONE / det))
    }
}

/// Sign of the cofactor at `(row, col)`.
fn cofactor_sign<T: Number>(row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 {
        T::ONE
    } else {
        -T::ONE
    }
}

impl<T: Number> Matrix<T, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(mat.determinant(), -2.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Returns the *adjugate* (transposed cofactor matrix) of this matrix.
    pub fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        Matrix::from_columns([[d, -c], [-b, a]])
    }
}

macro_rules! cofactor_impls {
    ($($n:literal => $minor:ident),+) => {
        $(
            impl<T: Number> Matrix<T, $n> {
                /// Returns the matrix that remains after removing row `row` and column `col`.
                ///
                /// # Panics
                ///
                /// Panics if `row` or `col` is out of bounds.
                pub fn minor(&self, row: usize, col: usize) -> $minor<T> {
                    assert!(row < $n && col < $n, "minor ({}, {}) out of bounds", row, col);
                    Matrix::from_fn(|r, c| {
                        self[(r + usize::from(r >= row), c + usize::from(c >= col))]
                    })
                }

                /// Returns the cofactor of the element at `(row, col)`: the signed determinant
                /// of its [minor](Self::minor).
                pub fn cofactor(&self, row: usize, col: usize) -> T {
                    cofactor_sign::<T>(row, col) * self.minor(row, col).determinant()
                }

                /// Returns the [determinant] of the matrix, computed by cofactor expansion along
                /// the first row.
                ///
                /// [determinant]: https://en.wikipedia.org/wiki/Determinant
                pub fn determinant(&self) -> T {
                    (0..$n).fold(T::ZERO, |acc, col| acc + self[(0, col)] * self.cofactor(0, col))
                }

                /// Returns the *adjugate* (transposed cofactor matrix) of this matrix.
                pub fn adjugate(&self) -> Self {
                    Self::from_fn(|row, col| self.cofactor(col, row))
                }
            }
        )+
    };
}
cofactor_impls!(3 => Mat2, 4 => Mat3);

macro_rules! inverse_impls {
    ($($n:literal),+) => {
        $(
            impl<T: Number> Matrix<T, $n> {
                /// Returns the inverse of this matrix, computed as its adjugate divided by its
                /// determinant.
                ///
                /// # Errors
                ///
                /// Returns [`Error::SingularMatrix`] if the determinant of `self` is exactly zero.
                /// No tolerance is applied: a nearly singular matrix, whose determinant only
                /// rounds to a tiny nonzero value, is inverted and yields very large elements.
                /// Check [`determinant`](Self::determinant) against a tolerance first if such
                /// inputs have to be rejected.
                pub fn inverse(&self) -> Result<Self> {
                    Self::inverse_from_adjugate(self.determinant(), || self.adjugate())
                }

                /// Inverts this matrix in place.
                ///
                /// # Errors
                ///
                /// Returns [`Error::SingularMatrix`] if the determinant of `self` is exactly zero.
                /// `self` is left unchanged in that case. Nearly singular matrices are inverted,
                /// as described for [`inverse`](Self::inverse).
                pub fn invert(&mut self) -> Result<&mut Self> {
                    *self = self.inverse()?;
                    Ok(self)
                }
            }
        )+
    };
}
inverse_impls!(2, 3, 4);

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    /// Creates a matrix from an array of columns.
    #[inline]
    fn from(columns: [[T; N]; N]) -> Self {
        Self(columns)
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Matrix<T, N> {
    type Error = Error;

    fn try_from(elements: &[T]) -> Result<Self> {
        Self::from_slice(elements)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const N: usize>(&'a Matrix<T, N>, usize);
        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..N {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::vec2;

    #[test]
    fn column_major_layout() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let mat = Mat3f::from_slice(&data).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(mat.get(i, j), Some(&data[j * 3 + i]));
            }
        }
        assert_eq!(mat.column(1), [4.0, 5.0, 6.0]);
        assert_eq!(mat.row(1), [2.0, 5.0, 8.0]);
        assert_eq!(mat.diagonal(), [1.0, 5.0, 9.0]);
        assert_eq!(mat.as_flat(), &data);
    }

    #[test]
    fn from_slice_copies() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0];
        let mat = Mat2f::try_from(&data[..]).unwrap();
        data[0] = 100.0;
        assert_eq!(mat[(0, 0)], 1.0);

        assert_eq!(
            Mat4f::from_slice(&data),
            Err(Error::InvalidDimension {
                expected: 16,
                actual: 4
            })
        );
    }

    #[test]
    fn put_chains() {
        let mut mat = Mat2f::from_slice(&[3.0, 3.0, 0.0, 3.0]).unwrap();
        mat.put(0, 1, 3.0).put(1, 1, 5.0);
        assert_eq!(mat.as_flat(), &[3.0, 3.0, 3.0, 5.0]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.0]]");

        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0.0, 1.0],
    [2.0, 3.0],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat3f::IDENTITY, Mat3f::from_diagonal([1.0, 1.0, 1.0]));
        assert_eq!(Mat4f::IDENTITY, Mat4f::from_diagonal([1.0; 4]));

        // Mutating a copy leaves the constant alone.
        let mut id = Mat2f::IDENTITY;
        id.put(0, 1, 5.0);
        assert_eq!(Mat2f::IDENTITY.as_flat(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn element_access() {
        let mut mat = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        *mat.get_mut(1, 0).unwrap() = 5.0;
        assert_eq!(mat[(1, 0)], 5.0);
        assert_eq!(mat.get_mut(0, 2), None);
        assert_eq!(mat.get_mut(2, 0), None);

        mat.as_flat_mut()[3] = 8.0;
        assert_eq!(mat[(1, 1)], 8.0);
        assert_eq!(mat.as_flat(), &[1.0, 5.0, 3.0, 8.0]);
    }

    #[test]
    fn map_trace() {
        let mat = Mat3f::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        assert_eq!(mat.trace(), 15.0);
        assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
        assert_eq!(Mat2f::ZERO.trace(), 0.0);

        let doubled = mat.map(|elem| elem * 2.0);
        assert_eq!(doubled, mat.scale(2.0));
        assert_eq!(doubled.trace(), 30.0);

        let rounded: Mat2<i32> = Mat2f::from_slice(&[1.4, -2.6, 3.0, 0.5])
            .unwrap()
            .map(|e| e.round() as i32);
        assert_eq!(rounded.as_flat(), &[1, -3, 3, 1]);
    }

    #[test]
    fn transpose() {
        let mut mat = Mat3f::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        let original = mat;
        assert_eq!(
            mat.transposed().as_flat(),
            &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]
        );
        assert_eq!(mat, original);
        mat.transpose().transpose();
        assert_eq!(mat, original);
    }

    #[test]
    fn add_subtract() {
        let mut mat = Mat2f::from_slice(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        let k = Mat2f::from_slice(&[4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(mat.minus(k).as_flat(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(mat.plus(k).as_flat(), &[9.0, 8.0, 7.0, 6.0]);
        mat.subtract_in_place(k).subtract_in_place(k);
        assert_eq!(mat.as_flat(), &[-3.0, -1.0, 1.0, 3.0]);
        assert_eq!(-mat, mat.scale(-1.0));
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);
        let vec = vec2(4.0, 5.0);
        assert_eq!(mat.transform(vec), [5.0, 8.0 + 15.0]);
        assert_eq!(mat * vec, mat.transform(vec));
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        let b = Matrix::from_rows([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]);
        let c = a.compose(b);
        assert_eq!(c[(0, 1)], 1.0 * 8.0 + 2.0 * 5.0 + 3.0 * 2.0);
        assert_eq!(c[(2, 0)], 7.0 * 9.0 + 8.0 * 6.0 + 9.0 * 3.0);
        assert_eq!(a.compose(Mat3f::IDENTITY), a);
        assert_eq!(Mat3f::IDENTITY.compose(a), a);

        let mut d = a;
        d *= b;
        assert_eq!(d, c);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_eq!(testmat.determinant(), 54.0);
        assert_eq!(testmat.transposed().determinant(), 54.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0,  5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0,  0.0],
        ]);
        assert_eq!(testmat.determinant(), 30.0);
    }

    #[test]
    fn minor() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(mat.minor(0, 0), Matrix::from_rows([[5.0, 6.0], [8.0, 9.0]]));
        assert_eq!(mat.minor(1, 2), Matrix::from_rows([[1.0, 2.0], [7.0, 8.0]]));
        assert_eq!(mat.cofactor(0, 1), -(4.0 * 9.0 - 6.0 * 7.0));
    }

    #[test]
    fn invert_2x2() {
        let mat = Mat2::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let inv = mat.inverse().unwrap();
        assert_eq!(inv.as_flat(), &[-2.0, 1.0, 1.5, -0.5]);
        assert_eq!(mat.compose(inv), Mat2::<f64>::IDENTITY);

        let mut m = mat;
        m.invert().unwrap().invert().unwrap();
        assert_eq!(m, mat);
    }

    #[test]
    fn invert_3x3_4x4() {
        #[rustfmt::skip]
        let mat3 = Matrix::from_rows([
            [2.0, 0.0, 1.0],
            [1.0, 3.0, 2.0],
            [1.0, 1.0, 2.0],
        ]);
        let inv3 = mat3.inverse().unwrap();
        assert_relative_eq!(mat3.compose(inv3), Mat3::<f64>::IDENTITY, epsilon = 1e-12);

        #[rustfmt::skip]
        let mat4 = Matrix::from_rows([
            [4.0, 0.0, 0.0, 1.0],
            [0.0, 2.0, 1.0, 0.0],
            [1.0, 0.0, 3.0, 0.0],
            [0.0, 1.0, 0.0, 5.0],
        ]);
        let inv4 = mat4.inverse().unwrap();
        assert_relative_eq!(inv4.compose(mat4), Mat4::<f64>::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(inv4.inverse().unwrap(), mat4, epsilon = 1e-12);
    }

    #[test]
    fn invert_singular() {
        assert_eq!(Mat2f::ZERO.inverse(), Err(Error::SingularMatrix));
        assert_eq!(Mat4f::ZERO.inverse(), Err(Error::SingularMatrix));

        let mut mat = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(mat.invert().map(|m| *m), Err(Error::SingularMatrix));
        assert_eq!(mat, Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]));
    }

    #[test]
    fn invert_nearly_singular() {
        // Mathematically singular, but rounding leaves a tiny nonzero determinant.
        #[rustfmt::skip]
        let mat = Mat3::<f64>::from_rows([
            [0.1, 0.2, 0.3],
            [0.4, 0.5, 0.6],
            [0.7, 0.8, 0.9],
        ]);
        let det = mat.determinant();
        assert_ne!(det, 0.0);
        assert!(det.abs() < 1e-12);

        let inv = mat.inverse().unwrap();
        assert!(inv.as_flat().iter().any(|elem| elem.abs() > 1e12));
    }
}

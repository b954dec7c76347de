//! Rotation, scaling and translation constructors.

use crate::{Float, Mat2, Mat3, Mat4, Matrix, Number, One, Result, Trig, Vec2, Vec3, Vector, Zero};

impl<T: Number, const N: usize> Matrix<T, N> {
    /// Creates a matrix that scales each axis by the matching component of `factors`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let scale = Mat3f::scaling(vec3(2.0, 3.0, 4.0));
    /// assert_eq!(scale * vec3(1.0, 1.0, 1.0), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn scaling(factors: Vector<T, N>) -> Self {
        Self::from_diagonal(factors)
    }
}

impl<T: Zero + One + Copy> Matrix<T, 2> {
    /// Embeds this matrix in the upper left corner of a 3x3 identity matrix.
    pub fn to_homogeneous(&self) -> Mat3<T> {
        Matrix::from_fn(|row, col| match (row, col) {
            (2, 2) => T::ONE,
            (2, _) | (_, 2) => T::ZERO,
            _ => self[(row, col)],
        })
    }
}

impl<T: Zero + One + Copy> Matrix<T, 3> {
    /// Embeds this matrix in the upper left corner of a 4x4 identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Mat3f::scaling(vec3(2.0, 2.0, 2.0)).to_homogeneous();
    /// assert_eq!(mat, Mat4f::scaling(vec4(2.0, 2.0, 2.0, 1.0)));
    /// ```
    pub fn to_homogeneous(&self) -> Mat4<T> {
        Matrix::from_fn(|row, col| match (row, col) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => self[(row, col)],
        })
    }
}

impl<T: Number + Trig> Matrix<T, 2> {
    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let rot = Mat2f::rotation(0.5);
    /// assert_eq!(rot.as_flat(), &[0.5f32.cos(), 0.5f32.sin(), -0.5f32.sin(), 0.5f32.cos()]);
    /// ```
    pub fn rotation(radians: T) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        Self::from_columns([[c, s], [-s, c]])
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation(-radians)
    }
}

impl<T: Number + Trig> Matrix<T, 3> {
    /// Creates a rotation by `radians` around the X axis.
    ///
    /// Rotations are counterclockwise when looking down the axis towards the origin.
    pub fn rotation_x(radians: T) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [l, o,  o],
            [o, c, -s],
            [o, s,  c],
        ]);
        mat
    }

    /// Creates a rotation by `radians` around the Y axis.
    pub fn rotation_y(radians: T) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [ c, o, s],
            [ o, l, o],
            [-s, o, c],
        ]);
        mat
    }

    /// Creates a rotation by `radians` around the Z axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let rot = Mat3f::rotation_z(std::f32::consts::FRAC_PI_2);
    /// assert_abs_diff_eq!(rot * Vec3f::X, Vec3f::Y, epsilon = 1e-6);
    /// ```
    pub fn rotation_z(radians: T) -> Self {
        Mat2::rotation(radians).to_homogeneous()
    }

    /// Creates a 2D rotation in homogeneous coordinates, to be applied to `vec3(x, y, 1)`.
    ///
    /// This is the same matrix as [`Matrix::rotation_z`]: rotating 2D points in the XY plane is
    /// a rotation around the Z axis.
    #[inline]
    pub fn rotation_2d(radians: T) -> Self {
        Self::rotation_z(radians)
    }
}

impl<T: Float> Matrix<T, 3> {
    /// Creates a rotation by `radians` around `axis`.
    ///
    /// `axis` does not have to be normalized. The rotation is counterclockwise when `axis` points
    /// towards the viewer (right-handed).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLength`][crate::Error::ZeroLength] if `axis` has a length of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let rot = Mat3f::rotation_axis(vec3(0.0, 0.0, 2.0), 0.3)?;
    /// assert_abs_diff_eq!(rot, Mat3f::rotation_z(0.3), epsilon = 1e-6);
    ///
    /// assert_eq!(Mat3f::rotation_axis(Vec3f::ZERO, 0.3), Err(Error::ZeroLength));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn rotation_axis(axis: Vec3<T>, radians: T) -> Result<Self> {
        let [x, y, z] = axis.try_normalized()?.into_array();
        let (s, c) = (radians.sin(), radians.cos());
        let t = T::ONE - c;

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [t * x * x + c,     t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c,     t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c    ],
        ]);
        Ok(mat)
    }
}

impl<T: Number> Matrix<T, 3> {
    /// Creates a 2D scaling in homogeneous coordinates.
    pub fn scaling_2d(factors: Vec2<T>) -> Self {
        Self::scaling(factors.extend(T::ONE))
    }

    /// Creates a 2D translation in homogeneous coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mat = Mat3f::translation(vec2(1.0, -2.0));
    /// assert_eq!(mat * vec3(1.0, 1.0, 1.0), vec3(2.0, -1.0, 1.0));
    ///
    /// // Directions (with a homogeneous component of 0) are not affected.
    /// assert_eq!(mat * vec3(1.0, 1.0, 0.0), vec3(1.0, 1.0, 0.0));
    /// ```
    pub fn translation(offset: Vec2<T>) -> Self {
        let mut mat = Self::IDENTITY;
        mat.put(0, 2, offset.x).put(1, 2, offset.y);
        mat
    }
}

impl<T: Number + Trig> Matrix<T, 4> {
    /// Creates a rotation by `radians` around the X axis, in homogeneous coordinates.
    pub fn rotation_x(radians: T) -> Self {
        Mat3::rotation_x(radians).to_homogeneous()
    }

    /// Creates a rotation by `radians` around the Y axis, in homogeneous coordinates.
    pub fn rotation_y(radians: T) -> Self {
        Mat3::rotation_y(radians).to_homogeneous()
    }

    /// Creates a rotation by `radians` around the Z axis, in homogeneous coordinates.
    pub fn rotation_z(radians: T) -> Self {
        Mat3::rotation_z(radians).to_homogeneous()
    }
}

impl<T: Float> Matrix<T, 4> {
    /// Creates a rotation by `radians` around `axis`, in homogeneous coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLength`][crate::Error::ZeroLength] if `axis` has a length of zero.
    pub fn rotation_axis(axis: Vec3<T>, radians: T) -> Result<Self> {
        Ok(Mat3::rotation_axis(axis, radians)?.to_homogeneous())
    }
}

impl<T: Number> Matrix<T, 4> {
    /// Creates a 3D scaling in homogeneous coordinates.
    pub fn scaling_3d(factors: Vec3<T>) -> Self {
        Self::scaling(factors.extend(T::ONE))
    }

    /// Creates a 3D translation in homogeneous coordinates.
    pub fn translation(offset: Vec3<T>) -> Self {
        let mut mat = Self::IDENTITY;
        mat.put(0, 3, offset.x)
            .put(1, 3, offset.y)
            .put(2, 3, offset.z);
        mat
    }
}

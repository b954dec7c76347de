use std::{array, fmt};

use crate::{Error, Float, Mat2, Number, One, Result, Sqrt, Zero};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from their
///   components.
/// - [`Vector::from_slice`] copies the components out of a slice, and fails if its length is not
///   `N`.
/// - [`Vector::splat`] and [`Vector::from_fn`] fill every component from a value or a closure.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is the null vector, and `Vector::X`, `Vector::Y`, `Vector::Z` and
///   `Vector::W` are unit vectors along the respective axis.
///
/// # Element Access
///
/// - Components can be accessed as fields `x`, `y`, `z` and `w`, as far as the dimension allows.
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays.
/// - [`Vector::as_flat`] returns the components as a slice, ready to be uploaded as a uniform.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector by copying `N` components out of `components`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `components` does not hold exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let v = Vec3f::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    ///
    /// let err = Vec3f::from_slice(&[1.0, 2.0]).unwrap_err();
    /// assert_eq!(err, Error::InvalidDimension { expected: 3, actual: 2 });
    /// ```
    pub fn from_slice(components: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        match <[T; N]>::try_from(components) {
            Ok(array) => Ok(Self(array)),
            Err(_) => {
                log::trace!(
                    "rejecting {} components for a {}-dimensional vector",
                    components.len(),
                    N
                );
                Err(Error::InvalidDimension {
                    expected: N,
                    actual: components.len(),
                })
            }
        }
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// assert_eq!(Vector::splat(2.0), vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns the components as a flat slice, in order.
    ///
    /// This is the data layout expected when uploading a vector as a uniform.
    #[inline]
    pub const fn as_flat(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the components as a slice.
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns a reference to the underlying components as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Adds `rhs` to `self` component-wise, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let mut v = vec2(1.0, 2.0);
    /// v.add_in_place(vec2(3.0, 4.0)).scale_in_place(2.0);
    /// assert_eq!(v, vec2(8.0, 12.0));
    /// ```
    pub fn add_in_place(&mut self, rhs: Self) -> &mut Self {
        *self += rhs;
        self
    }

    /// Subtracts `rhs` from `self` component-wise, in place.
    pub fn subtract_in_place(&mut self, rhs: Self) -> &mut Self {
        *self -= rhs;
        self
    }

    /// Multiplies every component of `self` by `factor`, in place.
    pub fn scale_in_place(&mut self, factor: T) -> &mut Self {
        *self *= factor;
        self
    }

    /// Returns the component-wise sum of `self` and `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let a = vec3(1.0, 2.0, 3.0);
    /// let b = vec3(4.0, 5.0, 6.0);
    /// assert_eq!(a.plus(b), vec3(5.0, 7.0, 9.0));
    /// assert_eq!(a, vec3(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn plus(self, rhs: Self) -> Self {
        self + rhs
    }

    /// Returns the component-wise difference of `self` and `rhs`.
    #[inline]
    pub fn minus(self, rhs: Self) -> Self {
        self - rhs
    }

    /// Returns `self` with every component multiplied by `factor`.
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        self * factor
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> T {
        self.dot(*self)
    }
}

impl<T: Number + Sqrt, const N: usize> Vector<T, N> {
    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Divides this vector by its length in place, turning it into a unit vector.
    ///
    /// A zero-length vector ends up with non-finite components. Use [`Vector::try_normalized`] if
    /// that case has to be detected.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns this vector divided by its length.
    ///
    /// A zero-length vector results in non-finite components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalized();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert!(Vec2f::ZERO.normalized().x.is_nan());
    /// ```
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Returns this vector divided by its length, or an error if its length is zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLength`] if the length of `self` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalized(), Ok(vec2(0.0, -1.0)));
    /// assert_eq!(Vec2f::ZERO.try_normalized(), Err(Error::ZeroLength));
    /// ```
    pub fn try_normalized(self) -> Result<Self> {
        let length = self.length();
        if length == T::ZERO {
            return Err(Error::ZeroLength);
        }
        Ok(self / length)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(1.0), vec3(-1.0, 2.0, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, value)
    }

    /// Rotates `self` counterclockwise by `radians`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// use approx::assert_abs_diff_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_abs_diff_eq!(Vec2f::X.rotate(FRAC_PI_2), Vec2f::Y, epsilon = 1e-6);
    /// ```
    pub fn rotate(self, radians: T) -> Self
    where
        T: Float,
    {
        Mat2::rotation(radians).transform(self)
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// Extending with `1` turns a point into homogeneous coordinates, extending with `0` does the
    /// same for a direction.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, value)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts
    /// its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oogl_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(components: &[T]) -> Result<Self> {
        Self::from_slice(components)
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two components.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three components.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four components.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0.0, 1.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);

        v.x = 7.0;
        assert_eq!(v[0], 7.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    fn from_slice() {
        assert_eq!(Vec4f::from_slice(&[1.0, 2.0, 3.0, 4.0]), Ok(vec4(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(
            Vec2f::from_slice(&[1.0, 2.0, 3.0]),
            Err(Error::InvalidDimension {
                expected: 2,
                actual: 3
            })
        );

        let mut data = vec![1.0, 2.0];
        let v = Vec2f::try_from(&data[..]).unwrap();
        data[0] = 100.0;
        assert_eq!(v, vec2(1.0, 2.0));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(0.5, 0.0, 1.0)), "(0.5, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn arithmetic_chains() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v.add_in_place(vec3(1.0, 1.0, 1.0))
            .subtract_in_place(vec3(0.0, 1.0, 2.0))
            .scale_in_place(3.0);
        assert_eq!(v, vec3(6.0, 6.0, 6.0));

        let a = vec2(1.0, 2.0);
        let b = vec2(0.5, 0.5);
        assert_eq!(a.plus(b).minus(b), a);
        assert_eq!(a.scale(2.0), vec2(2.0, 4.0));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(1.0, 3.0, -5.0)), 35.0);
        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);

        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn normalize() {
        let mut v = vec4(2.0, 0.0, 0.0, 0.0);
        v.normalize();
        assert_eq!(v, Vec4f::X);

        let v = vec2(3.0f64, 4.0).normalized();
        assert_abs_diff_eq!(v.length(), 1.0);

        let mut zero = Vec3f::ZERO;
        zero.normalize();
        assert!(zero.as_flat().iter().all(|c| !c.is_finite()));
        assert_eq!(Vec3f::ZERO.try_normalized(), Err(Error::ZeroLength));
    }

    #[test]
    fn rotate() {
        assert_abs_diff_eq!(Vec2f::Y.rotate(FRAC_PI_2), -Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::X.rotate(PI), -Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::X.rotate(-FRAC_PI_2), -Vec2f::Y, epsilon = 1e-6);
    }

    #[test]
    fn extend_truncate() {
        let v = vec2(1.0, 2.0).extend(3.0).extend(1.0);
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.truncate().truncate(), vec2(1.0, 2.0));
    }
}

//! [`approx`] support for [`Vector`] and [`Matrix`].
//!
//! Compound values are considered equal if every pair of corresponding elements is.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector};

macro_rules! approx_impls {
    ($($ty:ident),+) => {
        $(
            impl<T: AbsDiffEq, const N: usize> AbsDiffEq for $ty<T, N>
            where
                T::Epsilon: Copy,
            {
                type Epsilon = T::Epsilon;

                #[inline]
                fn default_epsilon() -> Self::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    self.as_flat()
                        .iter()
                        .zip(other.as_flat())
                        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
                }
            }

            impl<T: RelativeEq, const N: usize> RelativeEq for $ty<T, N>
            where
                T::Epsilon: Copy,
            {
                #[inline]
                fn default_max_relative() -> Self::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    self.as_flat()
                        .iter()
                        .zip(other.as_flat())
                        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
                }
            }

            impl<T: UlpsEq, const N: usize> UlpsEq for $ty<T, N>
            where
                T::Epsilon: Copy,
            {
                #[inline]
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                    self.as_flat()
                        .iter()
                        .zip(other.as_flat())
                        .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
                }
            }
        )+
    };
}
approx_impls!(Vector, Matrix);

#[cfg(test)]
mod tests {
    use approx::{abs_diff_eq, assert_relative_eq, assert_ulps_eq, relative_ne};

    use crate::{vec3, Mat2f, Vec3f};

    #[test]
    fn vectors() {
        let a = vec3(1.0, 2.0, 3.0);
        assert!(abs_diff_eq!(a, vec3(1.05, 2.0, 3.0), epsilon = 0.1));
        assert!(!abs_diff_eq!(a, vec3(1.0, 2.0, 3.5), epsilon = 0.1));
        assert_relative_eq!(Vec3f::X * 0.1 * 3.0, Vec3f::X * 0.3);
        assert_ulps_eq!(vec3(0.1f32 + 0.2, 0.0, 1.0), vec3(0.3, 0.0, 1.0));
    }

    #[test]
    fn matrices() {
        let m = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut n = m;
        n.put(1, 1, 4.0001);
        assert_relative_eq!(m, n, max_relative = 1e-4);
        assert!(relative_ne!(m, n, max_relative = 1e-6));
        assert!(relative_ne!(m, Mat2f::IDENTITY));
    }
}

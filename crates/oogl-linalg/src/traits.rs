use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support the trigonometric functions needed to build rotations.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types usable in [`Matrix`][crate::Matrix] and
/// [`Vector`][crate::Vector] transforms.
///
/// This is implemented for [`f32`] and [`f64`].
pub trait Float: Number + Trig + Sqrt + PartialOrd {}
impl<T> Float for T where T: Number + Trig + Sqrt + PartialOrd {}

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Trig for $types {
                #[inline]
                fn sin(self) -> Self {
                    <$types>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$types>::cos(self)
                }
            }

            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

//! Named component access (`v.x`, `v.y`, ...).

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! component_view {
    ($n:literal => $view:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: `Vector` is `repr(transparent)` over `[T; N]`, the view is `repr(C)`
                // with `N` fields of type `T` and a trailing ZST, so both have the same layout.
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `Deref` impl above.
                unsafe { mem::transmute(self) }
            }
        }
    };
}

component_view!(2 => XY);
component_view!(3 => XYZ);
component_view!(4 => XYZW);

//! Fixed-size linear algebra for preparing render transforms.
//!
//! # Overview
//!
//! This crate provides square [`Matrix`] types of size 2, 3 and 4, and [`Vector`] types with 2, 3
//! and 4 components, along with the operations needed to build and combine transforms on the CPU
//! before handing them to a graphics API.
//!
//! - All matrices are stored in a single, column-major, unpadded layout. This is the layout OpenGL
//!   and WebGL expect for uniform uploads, so [`Matrix::as_flat`] can be passed to them directly.
//! - Dimensions are const generics. Adding a 3x3 matrix to a 2x2 matrix, or transforming a
//!   [`Vec2`] with a [`Mat4`], does not compile.
//! - Every mutating operation (eg. [`Matrix::transpose`], [`Vector::normalize`]) has a
//!   non-mutating counterpart (eg. [`Matrix::transposed`], [`Vector::normalized`]). The mutating
//!   ones return `&mut Self`, so they can be chained.
//!
//! # Errors
//!
//! Operations that can fail at runtime return [`Result`] with the crate's [`Error`] type:
//! building a matrix or vector from a slice of the wrong length, writing flat data into a buffer of
//! the wrong length, inverting a singular matrix and normalizing a zero-length vector via
//! [`Vector::try_normalized`].
//!
//! # Approximate Comparison
//!
//! [`Matrix`] and [`Vector`] implement the traits of the [`approx`] crate, so their results can be
//! checked with `assert_relative_eq!` and friends.

mod compare;
mod error;
mod matrix;
mod traits;
pub mod uniform;
mod vector;

pub use error::{Error, Result};
pub use matrix::*;
pub use traits::*;
pub use uniform::Uniform;
pub use vector::*;

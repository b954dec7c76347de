//! Helpers for preparing render data for OpenGL-style graphics APIs.
//!
//! The math lives in [`linalg`]: fixed-size, column-major matrices and vectors whose flat data can
//! be handed to uniform upload functions as-is.
//!
//! ```
//! use oogl::linalg::{vec3, Mat4f};
//!
//! let model = Mat4f::translation(vec3(0.0, 0.0, -5.0)).compose(Mat4f::rotation_y(0.5));
//! let uniform_data: &[f32] = model.as_flat();
//! assert_eq!(uniform_data.len(), 16);
//! ```
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: Overrides the log filter installed by [`init_logger!`], using the syntax of
//!   [`env_logger`].

use log::LevelFilter;

pub use oogl_linalg as linalg;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .filter(Some("oogl_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and the `oogl` crates will log at *debug* level, unless `RUST_LOG` says
/// otherwise.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

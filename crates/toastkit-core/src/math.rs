//! Math types re-exported from [`glam`].
//!
//! Layout code works in `f32` logical points, so only the 2D types are exposed.
//!
//! ```
//! use toastkit_core::math::Vec2;
//!
//! let center = Vec2::new(150.0, 20.0);
//! assert_eq!(center * 2.0, Vec2::new(300.0, 40.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};

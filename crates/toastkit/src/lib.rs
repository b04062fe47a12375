//! Toastkit - transient, auto-dismissing toast overlays for retained-mode UIs
//!
//! A toast is a short message bubble laid over a host view, faded in, kept
//! visible for a while and faded out again:
//! - Flexbox layout via Taffy (fixed width, height clamped to a range)
//! - Top, middle or bottom placement with an optional side image
//! - One toast per host and tag; newer toasts replace older ones
//! - Deterministic, event-queue driven timing
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use toastkit::{SceneHost, ToastController, ToastOptions, ToastPosition, ToastRequest};
//!
//! let mut toasts = ToastController::new();
//! let root = toasts.add_host(SceneHost::new(375.0, 667.0));
//! toasts.screens_mut().set_root(root);
//!
//! let options = ToastOptions::builder().position(ToastPosition::Top).build();
//! let id = toasts
//!     .present(ToastRequest::new("Copied to clipboard").options(options))
//!     .unwrap();
//!
//! // In the event loop:
//! toasts.advance(Duration::from_millis(16));
//! assert!(toasts.host(root).unwrap().contains(id));
//! ```

pub mod animation;
pub mod color;
pub mod controller;
pub mod error;
pub mod host;
pub mod layout;
pub mod options;
pub mod queue;
pub mod screen;
pub mod text;
pub mod time;
pub mod toast;

pub use color::Color;
pub use controller::ToastController;
pub use error::{ToastError, ToastResult};
pub use host::{HostId, HostView, SceneHost, ToastView};
pub use layout::{LayoutError, TOAST_WIDTH, ToastLayout};
pub use options::{
    Font, FontFamily, ImagePosition, TextAlignment, ToastOptions, ToastOptionsBuilder,
    ToastPosition,
};
pub use screen::ScreenStack;
pub use text::{ApproximateTextMeasure, TextMeasure};
pub use toast::{
    DEFAULT_TOAST_TAG, Toast, ToastEvent, ToastId, ToastImage, ToastPhase, ToastRequest, ToastTag,
};

//! Test utilities for toastkit.
//!
//! [`RecordingHost`] is a [`HostView`] that records every call the controller
//! makes, so tests can assert on ordering (e.g. that a replaced toast is
//! detached before its successor is attached).
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use toastkit::{ToastController, ToastRequest};
//! use toastkit_test_utils::{HostCall, RecordingHost};
//!
//! let host = RecordingHost::new(375.0, 667.0);
//! let log = host.log();
//!
//! let mut toasts = ToastController::new();
//! let id = toasts.add_host(host);
//! let toast = toasts.present(ToastRequest::new("Hi").host(id)).unwrap();
//!
//! assert_eq!(log.lifecycle(), vec![HostCall::Attach(toast)]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use toastkit::{HostView, ToastId, ToastView};
use toastkit_core::geometry::Size;

/// Records a host call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Attach(ToastId),
    SetOpacity(ToastId, f32),
    Detach(ToastId),
}

impl HostCall {
    pub fn toast(&self) -> ToastId {
        match self {
            HostCall::Attach(id) | HostCall::SetOpacity(id, _) | HostCall::Detach(id) => *id,
        }
    }

    fn is_lifecycle(&self) -> bool {
        !matches!(self, HostCall::SetOpacity(..))
    }
}

#[derive(Debug, Default)]
struct HostState {
    calls: Vec<HostCall>,
    children: Vec<(ToastId, ToastView)>,
}

/// Shared handle to a [`RecordingHost`]'s call log.
///
/// Stays valid after the host has been moved into a controller.
#[derive(Debug, Clone, Default)]
pub struct HostLog {
    state: Arc<Mutex<HostState>>,
}

impl HostLog {
    /// Every recorded call, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().calls.clone()
    }

    /// Attach and detach calls only, in order.
    pub fn lifecycle(&self) -> Vec<HostCall> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.is_lifecycle())
            .cloned()
            .collect()
    }

    /// Ids of the toasts currently attached, oldest first.
    pub fn attached(&self) -> Vec<ToastId> {
        self.state.lock().children.iter().map(|(id, _)| *id).collect()
    }

    /// Current view of an attached toast.
    pub fn view(&self, toast: ToastId) -> Option<ToastView> {
        self.state
            .lock()
            .children
            .iter()
            .find(|(id, _)| *id == toast)
            .map(|(_, view)| view.clone())
    }

    /// Most recent opacity reported for `toast`.
    pub fn last_opacity(&self, toast: ToastId) -> Option<f32> {
        self.state.lock().calls.iter().rev().find_map(|call| match call {
            HostCall::SetOpacity(id, opacity) if *id == toast => Some(*opacity),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.state.lock().calls.clear();
    }
}

/// A [`HostView`] that records every call.
///
/// # Borrow Checking Pattern: Interior Mutability
///
/// The controller owns the host, so tests keep a [`HostLog`] handle sharing
/// the same `Mutex` to inspect it afterwards.
#[derive(Debug)]
pub struct RecordingHost {
    size: Size<f32>,
    log: HostLog,
}

impl RecordingHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            log: HostLog::default(),
        }
    }

    pub fn log(&self) -> HostLog {
        self.log.clone()
    }
}

impl HostView for RecordingHost {
    fn bounds(&self) -> Size<f32> {
        self.size
    }

    fn attach(&mut self, toast: ToastId, view: &ToastView) {
        let mut state = self.log.state.lock();
        state.calls.push(HostCall::Attach(toast));
        state.children.retain(|(id, _)| *id != toast);
        state.children.push((toast, view.clone()));
    }

    fn set_opacity(&mut self, toast: ToastId, opacity: f32) {
        let mut state = self.log.state.lock();
        state.calls.push(HostCall::SetOpacity(toast, opacity));
        if let Some((_, view)) = state.children.iter_mut().find(|(id, _)| *id == toast) {
            view.opacity = opacity;
        }
    }

    fn detach(&mut self, toast: ToastId) {
        let mut state = self.log.state.lock();
        state.calls.push(HostCall::Detach(toast));
        state.children.retain(|(id, _)| *id != toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toastkit::{ToastLayout, ToastOptions};
    use toastkit_core::geometry::Rect;

    fn view() -> ToastView {
        let layout = ToastLayout {
            frame: Rect::new(0.0, 0.0, 300.0, 30.0),
            label: Rect::new(8.0, 8.0, 284.0, 14.0),
            image: None,
        };
        ToastView::new("Hi", None, &ToastOptions::builtin(), &layout)
    }

    #[test]
    fn test_records_calls_in_order() {
        let mut host = RecordingHost::new(100.0, 100.0);
        let log = host.log();

        host.attach(ToastId(1), &view());
        host.set_opacity(ToastId(1), 0.5);
        host.detach(ToastId(1));

        assert_eq!(
            log.calls(),
            vec![
                HostCall::Attach(ToastId(1)),
                HostCall::SetOpacity(ToastId(1), 0.5),
                HostCall::Detach(ToastId(1)),
            ]
        );
        assert_eq!(log.lifecycle().len(), 2);
        assert_eq!(log.last_opacity(ToastId(1)), Some(0.5));
        assert!(log.attached().is_empty());
    }

    #[test]
    fn test_tracks_attached_views() {
        let mut host = RecordingHost::new(100.0, 100.0);
        let log = host.log();

        host.attach(ToastId(1), &view());
        host.set_opacity(ToastId(1), 1.0);
        assert_eq!(log.attached(), vec![ToastId(1)]);
        assert_eq!(log.view(ToastId(1)).unwrap().opacity, 1.0);

        log.clear();
        assert!(log.calls().is_empty());
        assert_eq!(log.attached(), vec![ToastId(1)]);
    }
}

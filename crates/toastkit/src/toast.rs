//! Toast identity, requests and per-instance state.

use std::time::Duration;

use toastkit_core::geometry::Size;

use crate::animation::Fade;
use crate::host::HostId;
use crate::layout::ToastLayout;
use crate::options::ToastOptions;
use crate::queue::EventKey;

/// Identifier of a toast, unique within the controller that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// Scopes the "one visible toast per host" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTag(pub u32);

/// Tag used when a request does not set one.
pub const DEFAULT_TOAST_TAG: ToastTag = ToastTag(3_091_990);

impl Default for ToastTag {
    fn default() -> Self {
        DEFAULT_TOAST_TAG
    }
}

/// An image shown next to the message.
///
/// The controller never decodes images; `key` is whatever the host uses to
/// look the image up, and `natural_size` drives the aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastImage {
    pub key: String,
    pub natural_size: Size<f32>,
}

impl ToastImage {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            natural_size: Size::new(width, height),
        }
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastPhase {
    /// Created but not attached. Also the phase of a toast waiting for another
    /// toast's fade-out.
    Created,
    /// Attached and fading in.
    Showing,
    /// Fully opaque, auto-hide timer running.
    Visible,
    /// Fading out.
    Hiding,
    /// Removed from its host for good.
    Detached,
}

impl ToastPhase {
    /// Whether the toast's view is currently in its host.
    pub fn is_attached(self) -> bool {
        matches!(self, Self::Showing | Self::Visible | Self::Hiding)
    }
}

/// Everything needed to create a toast.
///
/// # Example
///
/// ```
/// use toastkit::{ToastImage, ToastRequest, ToastTag};
///
/// let request = ToastRequest::new("Saved")
///     .image(ToastImage::new("check", 24.0, 24.0))
///     .tag(ToastTag(7));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    pub(crate) message: String,
    pub(crate) image: Option<ToastImage>,
    pub(crate) host: Option<HostId>,
    pub(crate) options: Option<ToastOptions>,
    pub(crate) tag: ToastTag,
}

impl ToastRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn image(mut self, image: ToastImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Attach to this host instead of the top of the screen stack.
    pub fn host(mut self, host: HostId) -> Self {
        self.host = Some(host);
        self
    }

    /// Use these options instead of the process-wide defaults.
    pub fn options(mut self, options: ToastOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn tag(mut self, tag: ToastTag) -> Self {
        self.tag = tag;
        self
    }
}

/// State of one toast owned by a [`ToastController`](crate::ToastController).
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    message: String,
    image: Option<ToastImage>,
    host: HostId,
    options: ToastOptions,
    tag: ToastTag,
    pub(crate) phase: ToastPhase,
    pub(crate) opacity: f32,
    pub(crate) layout: Option<ToastLayout>,
    pub(crate) fade: Option<Fade>,
    /// Pending fade completion.
    pub(crate) fade_event: Option<EventKey>,
    /// Pending auto-hide.
    pub(crate) auto_hide: Option<EventKey>,
    /// Toast to show once this one's fade-out completes. May be this toast.
    pub(crate) then_show: Option<ToastId>,
    /// Toast whose fade-out this one is waiting for.
    pub(crate) waiting_on: Option<ToastId>,
}

impl Toast {
    pub(crate) fn new(id: ToastId, host: HostId, request: ToastRequest) -> Self {
        Self {
            id,
            message: request.message,
            image: request.image,
            host,
            options: request.options.unwrap_or_default(),
            tag: request.tag,
            phase: ToastPhase::Created,
            opacity: 0.0,
            layout: None,
            fade: None,
            fade_event: None,
            auto_hide: None,
            then_show: None,
            waiting_on: None,
        }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn image(&self) -> Option<&ToastImage> {
        self.image.as_ref()
    }

    pub fn host(&self) -> HostId {
        self.host
    }

    pub fn options(&self) -> &ToastOptions {
        &self.options
    }

    pub fn tag(&self) -> ToastTag {
        self.tag
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Layout from the most recent show.
    pub fn layout(&self) -> Option<&ToastLayout> {
        self.layout.as_ref()
    }

    /// When the auto-hide timer fires, on the controller clock.
    pub fn auto_hide_deadline(&self) -> Option<Duration> {
        self.auto_hide.map(|key| key.deadline())
    }

    /// Whether this toast is waiting for another toast's fade-out.
    pub fn is_pending(&self) -> bool {
        self.waiting_on.is_some()
    }
}

/// Lifecycle notifications, drained with
/// [`ToastController::drain_events`](crate::ToastController::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    /// The view was inserted into its host and started fading in.
    Attached(ToastId),
    /// The fade-in finished; the auto-hide timer is running.
    Shown(ToastId),
    /// The fade-out started.
    HideStarted(ToastId),
    /// The view was removed from its host.
    Detached(ToastId),
    /// A toast waiting behind a fade-out was displaced by a newer request and
    /// dropped without being attached.
    Superseded(ToastId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = ToastRequest::new("Hello");
        assert_eq!(request.message, "Hello");
        assert_eq!(request.tag, DEFAULT_TOAST_TAG);
        assert!(request.host.is_none());
        assert!(request.image.is_none());
    }

    #[test]
    fn test_new_toast_is_created_and_transparent() {
        let toast = Toast::new(ToastId(1), HostId(1), ToastRequest::new("Hi"));
        assert_eq!(toast.phase(), ToastPhase::Created);
        assert_eq!(toast.opacity(), 0.0);
        assert!(toast.layout().is_none());
        assert!(toast.auto_hide_deadline().is_none());
    }

    #[test]
    fn test_attached_phases() {
        assert!(!ToastPhase::Created.is_attached());
        assert!(ToastPhase::Showing.is_attached());
        assert!(ToastPhase::Visible.is_attached());
        assert!(ToastPhase::Hiding.is_attached());
        assert!(!ToastPhase::Detached.is_attached());
    }
}

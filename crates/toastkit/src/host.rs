//! Host views toasts are attached to.

use indexmap::IndexMap;
use toastkit_core::geometry::{Rect, Size};

use crate::color::Color;
use crate::layout::ToastLayout;
use crate::options::{Font, TextAlignment, ToastOptions};
use crate::toast::{ToastId, ToastImage};

/// Identifier of a host registered with a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(pub u64);

/// The container a toast is attached to and positioned relative to.
///
/// The controller calls `attach` exactly once per show, then `set_opacity`
/// while fades run, then `detach`. A host never calls back into the
/// controller.
pub trait HostView {
    /// Current size of the host's content area.
    fn bounds(&self) -> Size<f32>;

    /// Insert a toast view on top of the host's existing content.
    fn attach(&mut self, toast: ToastId, view: &ToastView);

    fn set_opacity(&mut self, toast: ToastId, opacity: f32);

    /// Remove a toast view. Unknown ids are ignored.
    fn detach(&mut self, toast: ToastId);
}

impl<H: HostView + ?Sized> HostView for Box<H> {
    fn bounds(&self) -> Size<f32> {
        (**self).bounds()
    }

    fn attach(&mut self, toast: ToastId, view: &ToastView) {
        (**self).attach(toast, view)
    }

    fn set_opacity(&mut self, toast: ToastId, opacity: f32) {
        (**self).set_opacity(toast, opacity)
    }

    fn detach(&mut self, toast: ToastId) {
        (**self).detach(toast)
    }
}

/// Render description of an attached toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    /// Frame in host coordinates.
    pub frame: Rect<f32>,
    /// Label frame in toast coordinates.
    pub label_frame: Rect<f32>,
    /// Image frame in toast coordinates.
    pub image_frame: Option<Rect<f32>>,
    pub message: String,
    pub image: Option<ToastImage>,
    pub font: Font,
    pub message_color: Color,
    pub message_alignment: TextAlignment,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub corner_radius: f32,
    pub opacity: f32,
}

impl ToastView {
    pub fn new(
        message: &str,
        image: Option<&ToastImage>,
        options: &ToastOptions,
        layout: &ToastLayout,
    ) -> Self {
        Self {
            frame: layout.frame,
            label_frame: layout.label,
            image_frame: layout.image,
            message: message.to_string(),
            image: image.cloned(),
            font: options.message_font.clone(),
            message_color: options.message_color,
            message_alignment: options.message_alignment,
            background_color: options.background_color,
            border_color: options.border_color,
            border_width: options.border_width,
            corner_radius: options.corner_radius,
            opacity: 0.0,
        }
    }
}

/// A retained in-memory host: a size plus the toast views attached to it, in
/// attachment order.
#[derive(Debug, Clone, Default)]
pub struct SceneHost {
    size: Size<f32>,
    children: IndexMap<ToastId, ToastView>,
}

impl SceneHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            children: IndexMap::new(),
        }
    }

    /// Change the host size. Attached toasts keep their frames until shown again.
    pub fn resize(&mut self, size: Size<f32>) {
        self.size = size;
    }

    pub fn contains(&self, toast: ToastId) -> bool {
        self.children.contains_key(&toast)
    }

    pub fn child(&self, toast: ToastId) -> Option<&ToastView> {
        self.children.get(&toast)
    }

    /// Attached toast views, oldest first.
    pub fn children(&self) -> impl Iterator<Item = (ToastId, &ToastView)> {
        self.children.iter().map(|(id, view)| (*id, view))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl HostView for SceneHost {
    fn bounds(&self) -> Size<f32> {
        self.size
    }

    fn attach(&mut self, toast: ToastId, view: &ToastView) {
        self.children.insert(toast, view.clone());
    }

    fn set_opacity(&mut self, toast: ToastId, opacity: f32) {
        if let Some(view) = self.children.get_mut(&toast) {
            view.opacity = opacity;
        }
    }

    fn detach(&mut self, toast: ToastId) {
        self.children.shift_remove(&toast);
    }
}

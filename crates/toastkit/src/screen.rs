//! Resolution of the top-most visible screen.

use crate::host::HostId;

/// A root screen plus the screens presented on top of it.
///
/// Toasts created without an explicit host attach to [`ScreenStack::top`]:
/// the most recently presented screen, or the root when nothing is presented.
#[derive(Debug, Clone, Default)]
pub struct ScreenStack {
    root: Option<HostId>,
    presented: Vec<HostId>,
}

impl ScreenStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the root screen. Presented screens stay on top of it.
    pub fn set_root(&mut self, host: HostId) {
        self.root = Some(host);
    }

    pub fn root(&self) -> Option<HostId> {
        self.root
    }

    /// Present `host` on top of the current top screen.
    pub fn present(&mut self, host: HostId) {
        self.presented.push(host);
    }

    /// Dismiss the top-most presented screen. The root is never dismissed.
    pub fn dismiss(&mut self) -> Option<HostId> {
        self.presented.pop()
    }

    pub fn top(&self) -> Option<HostId> {
        self.presented.last().copied().or(self.root)
    }

    /// Forget `host` wherever it appears.
    pub fn remove(&mut self, host: HostId) {
        if self.root == Some(host) {
            self.root = None;
        }
        self.presented.retain(|presented| *presented != host);
    }

    pub fn is_empty(&self) -> bool {
        self.top().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack_has_no_top() {
        let stack = ScreenStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_presented_screen_wins() {
        let mut stack = ScreenStack::new();
        stack.set_root(HostId(1));
        assert_eq!(stack.top(), Some(HostId(1)));

        stack.present(HostId(2));
        stack.present(HostId(3));
        assert_eq!(stack.top(), Some(HostId(3)));

        assert_eq!(stack.dismiss(), Some(HostId(3)));
        assert_eq!(stack.top(), Some(HostId(2)));
        stack.dismiss();
        assert_eq!(stack.dismiss(), None);
        assert_eq!(stack.top(), Some(HostId(1)));
    }

    #[test]
    fn test_remove_host() {
        let mut stack = ScreenStack::new();
        stack.set_root(HostId(1));
        stack.present(HostId(2));

        stack.remove(HostId(2));
        assert_eq!(stack.top(), Some(HostId(1)));
        stack.remove(HostId(1));
        assert!(stack.is_empty());
    }
}

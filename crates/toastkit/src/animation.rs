//! Opacity fades for toasts.
//!
//! A [`Fade`] only interpolates; completion is signalled by the controller's
//! event queue so that callbacks run in deadline order.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use toastkit::animation::{fade_in, AnimationState};
//!
//! let mut fade = fade_in(Duration::from_millis(400));
//! assert_eq!(fade.value(), 0.0);
//!
//! fade.update(Duration::from_millis(400));
//! assert_eq!(fade.value(), 1.0);
//! assert_eq!(fade.state(), AnimationState::Completed);
//! ```

use std::time::Duration;

/// Easing functions for fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Completed,
}

/// An opacity interpolation between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFunction,
    state: AnimationState,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        let state = if duration.is_zero() {
            AnimationState::Completed
        } else {
            AnimationState::Running
        };

        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: EasingFunction::default(),
            state,
        }
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Target opacity.
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left until the fade reaches its target.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    /// Get the current value.
    pub fn value(&self) -> f32 {
        if self.state == AnimationState::Completed {
            return self.to;
        }

        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Advance the fade by `delta`.
    ///
    /// Returns true if the fade is still running.
    pub fn update(&mut self, delta: Duration) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        if self.elapsed >= self.duration {
            self.state = AnimationState::Completed;
            return false;
        }

        true
    }
}

/// Fade from fully transparent to fully opaque.
pub fn fade_in(duration: Duration) -> Fade {
    Fade::new(0.0, 1.0, duration)
}

/// Fade from `from` down to fully transparent.
pub fn fade_out(from: f32, duration: Duration) -> Fade {
    Fade::new(from, 0.0, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        let easing = EasingFunction::EaseInOut;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_fade_update() {
        let mut fade = Fade::new(0.0, 1.0, Duration::from_secs(1)).easing(EasingFunction::Linear);

        assert_eq!(fade.value(), 0.0);

        assert!(fade.update(Duration::from_millis(500)));
        assert!((fade.value() - 0.5).abs() < 0.01);
        assert_eq!(fade.remaining(), Duration::from_millis(500));

        assert!(!fade.update(Duration::from_millis(500)));
        assert_eq!(fade.value(), 1.0);
        assert_eq!(fade.state(), AnimationState::Completed);
    }

    #[test]
    fn test_fade_out_from_partial_opacity() {
        let mut fade = fade_out(0.6, Duration::from_millis(400)).easing(EasingFunction::Linear);
        assert!((fade.value() - 0.6).abs() < f32::EPSILON);

        fade.update(Duration::from_millis(200));
        assert!((fade.value() - 0.3).abs() < 0.01);

        fade.update(Duration::from_secs(10));
        assert_eq!(fade.value(), 0.0);
    }

    #[test]
    fn test_update_with_huge_delta_completes() {
        let mut fade = fade_in(Duration::from_millis(400));
        fade.update(Duration::from_millis(100));
        assert!(!fade.update(Duration::MAX));
        assert_eq!(fade.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_fade_is_complete() {
        let fade = fade_in(Duration::ZERO);
        assert_eq!(fade.state(), AnimationState::Completed);
        assert_eq!(fade.value(), 1.0);
        assert_eq!(fade.remaining(), Duration::ZERO);
    }
}

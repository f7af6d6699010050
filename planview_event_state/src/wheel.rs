// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel-step to zoom-factor mapping.

/// Direction of one scroll-wheel step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Wheel up: magnify (the window shrinks).
    In,
    /// Wheel down: show more world (the window grows).
    Out,
}

/// Maps wheel steps to anchored-zoom factors.
///
/// One wheel step scales the view window by a fixed base step: scrolling
/// in divides the extents by it, scrolling out multiplies them. Feed the
/// resulting factor to `Viewport::zoom_about` together with the cursor's
/// world position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelZoom {
    step: f64,
}

impl WheelZoom {
    /// Creates a mapping with the given base step per wheel notch.
    ///
    /// Returns `None` unless `step` is finite and positive.
    #[must_use]
    pub fn new(step: f64) -> Option<Self> {
        if step.is_finite() && step > 0.0 {
            Some(Self { step })
        } else {
            None
        }
    }

    /// The base step per wheel notch.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The zoom factor for one wheel step in `direction`.
    #[must_use]
    pub fn factor(&self, direction: ScrollDirection) -> f64 {
        match direction {
            ScrollDirection::In => 1.0 / self.step,
            ScrollDirection::Out => self.step,
        }
    }
}

impl Default for WheelZoom {
    /// The classic base step of `1.1` per notch.
    fn default() -> Self {
        Self { step: 1.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollDirection, WheelZoom};

    #[test]
    fn default_step_matches_the_classic_feel() {
        let wheel = WheelZoom::default();
        assert_eq!(wheel.step(), 1.1);
        assert_eq!(wheel.factor(ScrollDirection::Out), 1.1);
        assert_eq!(wheel.factor(ScrollDirection::In), 1.0 / 1.1);
    }

    #[test]
    fn in_and_out_factors_cancel() {
        let wheel = WheelZoom::new(1.25).unwrap();
        let product =
            wheel.factor(ScrollDirection::In) * wheel.factor(ScrollDirection::Out);
        assert!((product - 1.0).abs() < 1e-12);
    }

    #[test]
    fn nonsense_steps_are_refused() {
        assert!(WheelZoom::new(0.0).is_none());
        assert!(WheelZoom::new(-2.0).is_none());
        assert!(WheelZoom::new(f64::NAN).is_none());
        assert!(WheelZoom::new(f64::INFINITY).is_none());
    }
}

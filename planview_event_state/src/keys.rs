// Copyright 2026 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard bindings for navigation.

use kurbo::Vec2;

/// Centered zoom factor bound to the plus key: the window grows.
pub const PLUS_ZOOM_FACTOR: f64 = 1.2;

/// Centered zoom factor bound to the minus key: the window shrinks.
pub const MINUS_ZOOM_FACTOR: f64 = 0.8;

/// Extent fraction panned per arrow-key press.
pub const ARROW_PAN_FRACTION: f64 = 0.1;

/// A key with a navigation binding.
///
/// Variants are named after the keys themselves; the effect lives in
/// [`command`](Self::command). Hosts translate their native key codes into
/// these, using [`from_char`](Self::from_char) for character keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// `+` or `=`.
    Plus,
    /// `-`.
    Minus,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// `r` or `R`.
    KeyR,
}

/// What a navigation input asks the viewport to do.
///
/// Commands carry viewport-ready values: centered zoom factors and pan
/// fractions. Hosts apply them with `zoom_centered`, `pan_by_fraction`,
/// and `reset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavCommand {
    /// Centered zoom by a factor.
    Zoom(f64),
    /// Pan by extent fractions.
    Pan(Vec2),
    /// Return to the home view.
    Reset,
}

impl NavKey {
    /// Maps a character key to its binding.
    ///
    /// Arrow keys carry no character; hosts construct those variants
    /// directly from their key codes.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' | '=' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            'r' | 'R' => Some(Self::KeyR),
            _ => None,
        }
    }

    /// The command bound to this key.
    #[must_use]
    pub fn command(self) -> NavCommand {
        match self {
            Self::Plus => NavCommand::Zoom(PLUS_ZOOM_FACTOR),
            Self::Minus => NavCommand::Zoom(MINUS_ZOOM_FACTOR),
            Self::ArrowLeft => NavCommand::Pan(Vec2::new(-ARROW_PAN_FRACTION, 0.0)),
            Self::ArrowRight => NavCommand::Pan(Vec2::new(ARROW_PAN_FRACTION, 0.0)),
            Self::ArrowUp => NavCommand::Pan(Vec2::new(0.0, ARROW_PAN_FRACTION)),
            Self::ArrowDown => NavCommand::Pan(Vec2::new(0.0, -ARROW_PAN_FRACTION)),
            Self::KeyR => NavCommand::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{NavCommand, NavKey};

    #[test]
    fn characters_map_to_keys() {
        assert_eq!(NavKey::from_char('+'), Some(NavKey::Plus));
        assert_eq!(NavKey::from_char('='), Some(NavKey::Plus));
        assert_eq!(NavKey::from_char('-'), Some(NavKey::Minus));
        assert_eq!(NavKey::from_char('r'), Some(NavKey::KeyR));
        assert_eq!(NavKey::from_char('R'), Some(NavKey::KeyR));
        assert_eq!(NavKey::from_char('x'), None);
        assert_eq!(NavKey::from_char(' '), None);
    }

    #[test]
    fn zoom_keys_carry_their_factors() {
        assert_eq!(NavKey::Plus.command(), NavCommand::Zoom(1.2));
        assert_eq!(NavKey::Minus.command(), NavCommand::Zoom(0.8));
    }

    #[test]
    fn arrows_pan_a_tenth_of_the_window() {
        assert_eq!(
            NavKey::ArrowLeft.command(),
            NavCommand::Pan(Vec2::new(-0.1, 0.0))
        );
        assert_eq!(
            NavKey::ArrowRight.command(),
            NavCommand::Pan(Vec2::new(0.1, 0.0))
        );
        assert_eq!(
            NavKey::ArrowUp.command(),
            NavCommand::Pan(Vec2::new(0.0, 0.1))
        );
        assert_eq!(
            NavKey::ArrowDown.command(),
            NavCommand::Pan(Vec2::new(0.0, -0.1))
        );
    }

    #[test]
    fn r_resets() {
        assert_eq!(NavKey::KeyR.command(), NavCommand::Reset);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Gesture transform state
//!
//! Turns multi-touch input into pan, pinch-scale and rotation of the
//! rendering surface. Everything here runs on the UI thread and never
//! talks to the engine.

use crate::config::defaults::ROTATION_WRAP_DEGREES;

/// Screen position of one pointer, in raw pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// First pointer went down.
    Down,
    /// An additional pointer went down.
    PointerDown,
    Move,
    /// Last pointer went up.
    Up,
    /// A non-last pointer went up.
    PointerUp,
    Cancel,
}

/// One touch event with the positions of every active pointer.
///
/// Pointer 0 is the primary pointer; pinch math uses pointers 0 and 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub pointers: Vec<Point>,
}

impl TouchEvent {
    #[must_use]
    pub fn new(action: TouchAction, pointers: Vec<Point>) -> Self {
        Self { action, pointers }
    }

    /// Single pointer shorthand.
    #[must_use]
    pub fn single(action: TouchAction, x: f32, y: f32) -> Self {
        Self::new(action, vec![Point::new(x, y)])
    }

    /// Two pointer shorthand.
    #[must_use]
    pub fn pair(action: TouchAction, first: Point, second: Point) -> Self {
        Self::new(action, vec![first, second])
    }

    fn primary(&self) -> Option<Point> {
        self.pointers.first().copied()
    }

    fn pinch_pair(&self) -> Option<(Point, Point)> {
        match self.pointers.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }
}

/// Gesture currently being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    None,
    Pan,
    Pinch,
}

/// Independent switches for the gesture features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchToggles {
    /// Master switch; when off the component ignores all input.
    pub touch: bool,
    pub rotation: bool,
    pub translation: bool,
}

impl Default for TouchToggles {
    fn default() -> Self {
        Self {
            touch: true,
            rotation: true,
            translation: true,
        }
    }
}

/// Visual transform of the rendering surface plus gesture accumulators.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotation_degrees: f32,

    mode: GestureMode,
    last_touch: Point,
    pinch_spacing: f32,
    pinch_angle: f32,
    toggles: TouchToggles,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::with_toggles(TouchToggles::default())
    }
}

impl TransformState {
    #[must_use]
    pub fn with_toggles(toggles: TouchToggles) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotation_degrees: 0.0,
            mode: GestureMode::None,
            last_touch: Point::default(),
            pinch_spacing: 0.0,
            pinch_angle: 0.0,
            toggles,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn toggles(&self) -> TouchToggles {
        self.toggles
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.toggles.touch = enabled;
    }

    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        self.toggles.rotation = enabled;
    }

    pub fn set_translation_enabled(&mut self, enabled: bool) {
        self.toggles.translation = enabled;
    }

    /// Returns true when scale, rotation and translation are all neutral.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.scale == 1.0
            && self.rotation_degrees == 0.0
    }

    /// Feeds one touch event. Returns whether it was consumed.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        if !self.toggles.touch {
            return false;
        }

        match event.action {
            TouchAction::Down => {
                if let Some(anchor) = event.primary() {
                    self.mode = GestureMode::Pan;
                    self.last_touch = anchor;
                }
            }
            TouchAction::PointerDown => {
                if let Some((first, second)) = event.pinch_pair() {
                    self.mode = GestureMode::Pinch;
                    self.pinch_spacing = spacing(first, second);
                    self.pinch_angle = angle_degrees(first, second);
                }
            }
            TouchAction::Move => match self.mode {
                GestureMode::Pan => self.pan(event),
                GestureMode::Pinch => self.pinch(event),
                GestureMode::None => {}
            },
            TouchAction::Up | TouchAction::PointerUp | TouchAction::Cancel => {
                self.mode = GestureMode::None;
            }
        }
        true
    }

    fn pan(&mut self, event: &TouchEvent) {
        if !self.toggles.translation {
            return;
        }
        let Some(current) = event.primary() else {
            return;
        };
        self.translate_x += current.x - self.last_touch.x;
        self.translate_y += current.y - self.last_touch.y;
        self.last_touch = current;
    }

    fn pinch(&mut self, event: &TouchEvent) {
        let Some((first, second)) = event.pinch_pair() else {
            return;
        };

        let new_spacing = spacing(first, second);
        // Zero spacing means both pointers on one spot; no usable ratio.
        if self.pinch_spacing > 0.0 && new_spacing > 0.0 {
            self.scale *= new_spacing / self.pinch_spacing;
        }
        self.pinch_spacing = new_spacing;

        let new_angle = angle_degrees(first, second);
        if self.toggles.rotation {
            self.rotation_degrees =
                wrap_rotation(self.rotation_degrees + new_angle - self.pinch_angle);
        }
        self.pinch_angle = new_angle;
    }

    /// Restores the identity transform and clears gesture tracking.
    ///
    /// With `preserve_toggles` false the three switches are turned back on.
    pub fn reset(&mut self, preserve_toggles: bool) {
        let toggles = if preserve_toggles {
            self.toggles
        } else {
            TouchToggles::default()
        };
        *self = Self::with_toggles(toggles);
    }
}

/// Distance between two pointers.
#[must_use]
pub fn spacing(first: Point, second: Point) -> f32 {
    let dx = first.x - second.x;
    let dy = first.y - second.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle of the line between two pointers, in degrees.
#[must_use]
pub fn angle_degrees(first: Point, second: Point) -> f32 {
    let dx = f64::from(first.x - second.x);
    let dy = f64::from(first.y - second.y);
    dy.atan2(dx).to_degrees() as f32
}

/// Folds an accumulated rotation into the open interval (-360, 360).
#[must_use]
pub fn wrap_rotation(degrees: f32) -> f32 {
    degrees % ROTATION_WRAP_DEGREES
}

//! Translating SDL2 input into pointer gestures.
//!
//! SDL reports window coordinates with the origin in the top-left corner and y growing
//! downwards. That is also the convention of [`TransformController`], so positions pass through
//! unchanged; nothing downstream flips y.

use cgex_core::{Camera, PointerQuery, TransformController};
use glam::Vec2;
use sdl2::{
    EventPump,
    event::Event,
    keyboard::Scancode,
    mouse::{MouseButton, MouseWheelDirection},
};

/// The subset of SDL events the interactive exercises react to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    ButtonDown(Vec2),
    ButtonUp,
    Moved(Vec2),
    /// Signed vertical wheel motion, positive away from the user.
    Wheel(f32),
}

/// Something steered by pointer gestures.
pub trait PointerTarget {
    fn button_down(&mut self, position: Vec2, query: PointerQuery);
    fn button_up(&mut self);
    fn pointer_moved(&mut self, position: Vec2, query: PointerQuery);
    fn wheel(&mut self, direction: f32, query: PointerQuery);
}

impl PointerTarget for TransformController {
    fn button_down(&mut self, position: Vec2, query: PointerQuery) {
        self.on_button_down(position, query.modifier_held);
    }

    fn button_up(&mut self) {
        self.on_button_up();
    }

    fn pointer_moved(&mut self, position: Vec2, query: PointerQuery) {
        self.on_move(position, query);
    }

    fn wheel(&mut self, direction: f32, _query: PointerQuery) {
        self.on_scroll(direction);
    }
}

impl PointerTarget for Camera {
    fn button_down(&mut self, position: Vec2, query: PointerQuery) {
        self.mouse_down(position, query.modifier_held);
    }

    fn button_up(&mut self) {
        self.mouse_up();
    }

    fn pointer_moved(&mut self, position: Vec2, query: PointerQuery) {
        self.mouse_drag(position, query);
    }

    fn wheel(&mut self, direction: f32, query: PointerQuery) {
        self.mouse_wheel(direction > 0.0, query.modifier_held);
    }
}

/// Left button and shift key state, kept current one event at a time.
///
/// SDL's `mouse_state()` and `keyboard_state()` describe the end of the frame's event batch, so
/// a press, drag and release that land in the same frame would all be judged by the released
/// state. The tracker is advanced with [`Self::observe`] before each event is dispatched instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerTracker {
    button_held: bool,
    left_shift: bool,
    right_shift: bool,
}

impl PointerTracker {
    /// Starts from whatever SDL reports right now.
    pub fn from_event_pump(event_pump: &EventPump) -> Self {
        let keyboard = event_pump.keyboard_state();
        Self {
            button_held: event_pump.mouse_state().left(),
            left_shift: keyboard.is_scancode_pressed(Scancode::LShift),
            right_shift: keyboard.is_scancode_pressed(Scancode::RShift),
        }
    }

    pub fn observe(&mut self, event: &Event) {
        match *event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                ..
            } => self.button_held = true,
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } => self.button_held = false,
            Event::MouseMotion { mousestate, .. } => self.button_held = mousestate.left(),
            Event::KeyDown {
                scancode: Some(scancode),
                ..
            } => self.set_shift(scancode, true),
            Event::KeyUp {
                scancode: Some(scancode),
                ..
            } => self.set_shift(scancode, false),
            _ => {}
        }
    }

    fn set_shift(&mut self, scancode: Scancode, down: bool) {
        match scancode {
            Scancode::LShift => self.left_shift = down,
            Scancode::RShift => self.right_shift = down,
            _ => {}
        }
    }

    pub fn query(&self) -> PointerQuery {
        PointerQuery {
            button_held: self.button_held,
            modifier_held: self.left_shift || self.right_shift,
        }
    }
}

/// Extracts a left-button or wheel gesture from an SDL event.
///
/// Wheel events without vertical motion are dropped, so a horizontal swipe never counts as a
/// notch in either direction.
pub fn pointer_event(event: &Event) -> Option<PointerEvent> {
    match *event {
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(PointerEvent::ButtonDown(Vec2::new(x as f32, y as f32))),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            ..
        } => Some(PointerEvent::ButtonUp),
        Event::MouseMotion { x, y, .. } => Some(PointerEvent::Moved(Vec2::new(x as f32, y as f32))),
        Event::MouseWheel { y, direction, .. } if y != 0 => {
            let y = if direction == MouseWheelDirection::Flipped {
                -y
            } else {
                y
            };
            Some(PointerEvent::Wheel(y as f32))
        }
        _ => None,
    }
}

pub fn apply(target: &mut impl PointerTarget, event: PointerEvent, query: PointerQuery) {
    match event {
        PointerEvent::ButtonDown(position) => target.button_down(position, query),
        PointerEvent::ButtonUp => target.button_up(),
        PointerEvent::Moved(position) => target.pointer_moved(position, query),
        PointerEvent::Wheel(direction) => target.wheel(direction, query),
    }
}

/// Feeds one SDL event into `target`, if it is a pointer gesture.
pub fn dispatch(target: &mut impl PointerTarget, event: &Event, query: PointerQuery) {
    if let Some(pointer) = pointer_event(event) {
        apply(target, pointer, query);
    }
}

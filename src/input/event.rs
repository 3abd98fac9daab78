use super::keyboard::KeyAction;

/// Platform-agnostic input events.
///
/// These are fed into a [`CarouselEngine`](crate::engine::CarouselEngine),
/// which routes everything except `Resize` through the
/// [`InputAggregator`](super::InputAggregator). `Resize` re-places the
/// titles on the overlay host passed alongside it.
///
/// # Example
///
/// ```ignore
/// engine.handle_input(InputEvent::Wheel { delta_y: 100.0 }, Instant::now(), &mut titles);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A bound key was pressed.
    Key {
        /// Action resolved from the key bindings.
        action: KeyAction,
    },
    /// Scroll wheel moved.
    Wheel {
        /// Vertical delta in pixels (positive = scroll down, as in the DOM).
        delta_y: f32,
    },
    /// A touch (or primary-button drag) began.
    TouchStart {
        /// Horizontal position in pixels.
        x: f32,
    },
    /// The active touch moved.
    TouchMove {
        /// Horizontal position in pixels.
        x: f32,
    },
    /// The active touch was released.
    TouchEnd,
    /// The viewport changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

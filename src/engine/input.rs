//! Input entry points for CarouselEngine

use web_time::Instant;

use super::{CarouselEngine, Viewport};
use crate::input::{InputEvent, KeyAction};
use crate::render::OverlayHost;

impl CarouselEngine {
    /// Process a platform-agnostic input event received at `now`.
    ///
    /// Resize events go through [`resize`](Self::resize), so `overlay`
    /// receives the re-placed titles before this returns. Everything else
    /// goes through the input aggregator and leaves `overlay` untouched.
    ///
    /// Returns `true` if the event changed engine state.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::Wheel { delta_y: 100.0 }, now, &mut titles);
    /// engine.handle_input(InputEvent::Resize { width: 800, height: 600 }, now, &mut titles);
    /// ```
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        now: Instant,
        overlay: &mut impl OverlayHost,
    ) -> bool {
        if let InputEvent::Resize { width, height } = event {
            self.resize(width, height, overlay);
            return true;
        }
        self.aggregate(event, now)
    }

    fn aggregate(&mut self, event: InputEvent, now: Instant) -> bool {
        self.aggregator.apply(
            event,
            now,
            &mut self.motion,
            &mut self.distortion,
            &self.options,
        )
    }

    /// Look up a key string (`winit` `KeyCode` debug format, e.g.
    /// `"ArrowLeft"`) in the bindings and apply its action.
    ///
    /// Returns `false` for unbound keys.
    pub fn handle_key(&mut self, key: &str, now: Instant) -> bool {
        self.options
            .keybindings
            .lookup(key)
            .is_some_and(|action| self.handle_action(action, now))
    }

    /// Apply a key action directly.
    pub fn handle_action(&mut self, action: KeyAction, now: Instant) -> bool {
        self.aggregate(InputEvent::Key { action }, now)
    }

    pub(super) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.resize(viewport.width, viewport.height);
        self.overlay.resize(viewport.width, viewport.height);
    }
}

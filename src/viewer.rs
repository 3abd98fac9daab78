//! Standalone carousel window backed by winit.
//!
//! Arrow keys, the mouse wheel, touch, and left-button drags drive the
//! strip. The title of the most centered panel is shown in the window
//! title bar.
//!
//! ```no_run
//! # use carousel::Viewer;
//! Viewer::builder()
//!     .with_title("Carousel")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::{CarouselEngine, Viewport},
    error::CarouselError,
    gpu::{PanelRenderer, SurfaceContext},
    input::InputEvent,
    options::{ContentOptions, Options},
    overlay::OverlayPlacement,
    render::OverlayHost,
    util::frame_timing::FrameTiming,
};

/// Pixels per wheel line, matching what browsers report for one notch.
const LINE_HEIGHT_PX: f32 = 100.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "Carousel".
    fn new() -> Self {
        Self {
            options: None,
            title: "Carousel".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing the carousel.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Viewer`] if the event loop cannot be
    /// created or exits with an error.
    pub fn run(self) -> Result<(), CarouselError> {
        let event_loop = EventLoop::new()
            .map_err(|e| CarouselError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            gpu: None,
            engine: None,
            frame_timing: FrameTiming::new(),
            titles: TitleTracker::new(self.title.clone()),
            pointer: PointerState::default(),
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| CarouselError::Viewer(e.to_string()))
    }
}

// ── Title overlay ────────────────────────────────────────────────────────

/// Overlay host that tracks the most opaque title of each frame and
/// renders it as a window title.
struct TitleTracker {
    prefix: String,
    best: Option<(usize, f32)>,
    shown: Option<String>,
}

impl TitleTracker {
    fn new(prefix: String) -> Self {
        Self {
            prefix,
            best: None,
            shown: None,
        }
    }

    fn begin_frame(&mut self) {
        self.best = None;
    }

    /// Window title for this frame, if it differs from the one shown.
    fn take_changed(&mut self, content: &ContentOptions) -> Option<String> {
        let label = self
            .best
            .and_then(|(title, _)| content.for_panel(title))
            .map_or_else(
                || self.prefix.clone(),
                |panel| {
                    format!("{} | {} {}", self.prefix, panel.number, panel.title)
                },
            );
        if self.shown.as_deref() == Some(label.as_str()) {
            return None;
        }
        self.shown = Some(label.clone());
        Some(label)
    }
}

impl OverlayHost for TitleTracker {
    fn place_title(&mut self, title: usize, placement: &OverlayPlacement) {
        let better = self
            .best
            .is_none_or(|(_, opacity)| placement.opacity > opacity);
        if placement.opacity > 0.0 && better {
            self.best = Some((title, placement.opacity));
        }
    }
}

// ── Pointer mapping ──────────────────────────────────────────────────────

/// Maps touches and left-button drags onto the single-touch gesture model.
#[derive(Debug, Default)]
struct PointerState {
    cursor_x: f32,
    dragging: bool,
    active_touch: Option<u64>,
}

impl PointerState {
    fn mouse_button(&mut self, pressed: bool) -> Option<InputEvent> {
        if self.active_touch.is_some() || pressed == self.dragging {
            return None;
        }
        self.dragging = pressed;
        Some(if pressed {
            InputEvent::TouchStart { x: self.cursor_x }
        } else {
            InputEvent::TouchEnd
        })
    }

    fn cursor_moved(&mut self, x: f32) -> Option<InputEvent> {
        self.cursor_x = x;
        self.dragging.then_some(InputEvent::TouchMove { x })
    }

    fn touch(&mut self, id: u64, phase: TouchPhase, x: f32) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started if self.active_touch.is_none() && !self.dragging => {
                self.active_touch = Some(id);
                Some(InputEvent::TouchStart { x })
            }
            TouchPhase::Moved if self.active_touch == Some(id) => {
                Some(InputEvent::TouchMove { x })
            }
            TouchPhase::Ended | TouchPhase::Cancelled
                if self.active_touch == Some(id) =>
            {
                self.active_touch = None;
                Some(InputEvent::TouchEnd)
            }
            _ => None,
        }
    }
}

/// Convert a winit wheel delta to DOM-style pixels (positive = down).
fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct GpuState {
    context: SurfaceContext,
    renderer: PanelRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    engine: Option<CarouselEngine>,
    frame_timing: FrameTiming,
    titles: TitleTracker,
    pointer: PointerState,
    options: Options,
    title: String,
}

impl ViewerApp {
    fn send(&mut self, event: Option<InputEvent>) {
        if let (Some(event), Some(engine)) = (event, &mut self.engine) {
            let _ = engine.handle_input(event, Instant::now(), &mut self.titles);
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(gpu), Some(engine)) =
            (&self.window, &mut self.gpu, &mut self.engine)
        else {
            return;
        };

        let now = Instant::now();
        let dt = self.frame_timing.tick(now);
        engine.update(dt, now);

        gpu.renderer.begin_frame();
        engine.apply(&mut gpu.renderer);

        self.titles.begin_frame();
        engine.project_overlays(&mut self.titles);
        if let Some(label) = self.titles.take_changed(&engine.options().content)
        {
            window.set_title(&label);
        }

        if let Err(e) = gpu.renderer.render(&gpu.context, engine.camera()) {
            log::error!("render error: {e:?}");
        }
        window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let (width, height) = (inner.width.max(1), inner.height.max(1));
        let context = match pollster::block_on(SurfaceContext::connect(
            window.clone(),
            (width, height),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("{}", CarouselError::from(e));
                event_loop.exit();
                return;
            }
        };

        let mut engine =
            CarouselEngine::new(self.options.clone(), Viewport::new(width, height));
        let panel_count = engine.layout().panels().len();
        let renderer =
            PanelRenderer::new(&context, &self.options.layout, panel_count);
        for index in 0..renderer.panel_count() {
            engine.on_texture_loaded(index, Ok(()));
        }

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(GpuState { context, renderer });
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                let (width, height) = (size.width.max(1), size.height.max(1));
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(width, height);
                }
                self.titles.begin_frame();
                self.send(Some(InputEvent::Resize { width, height }));
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_key(&key_str, Instant::now());
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = wheel_delta_y(delta);
                self.send(Some(InputEvent::Wheel { delta_y }));
            }

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                let event =
                    self.pointer.mouse_button(state == ElementState::Pressed);
                self.send(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.pointer.cursor_moved(position.x as f32);
                self.send(event);
            }

            WindowEvent::Touch(touch) => {
                let event = self.pointer.touch(
                    touch.id,
                    touch.phase,
                    touch.location.x as f32,
                );
                self.send(event);
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(opacity: f32) -> OverlayPlacement {
        OverlayPlacement {
            opacity,
            ..OverlayPlacement::default()
        }
    }

    #[test]
    fn title_tracker_picks_most_opaque() {
        let content = ContentOptions::default();
        let mut tracker = TitleTracker::new("Carousel".into());
        tracker.begin_frame();
        tracker.place_title(0, &placement(0.2));
        tracker.place_title(1, &placement(1.0));
        tracker.place_title(2, &placement(0.0));
        assert_eq!(
            tracker.take_changed(&content).as_deref(),
            Some("Carousel | 02 BEAUTIFUL WORLD")
        );
        // Unchanged on the next identical frame.
        tracker.begin_frame();
        tracker.place_title(1, &placement(1.0));
        assert_eq!(tracker.take_changed(&content), None);
    }

    #[test]
    fn title_tracker_falls_back_to_prefix() {
        let mut tracker = TitleTracker::new("Carousel".into());
        tracker.begin_frame();
        tracker.place_title(0, &placement(0.0));
        assert_eq!(
            tracker.take_changed(&ContentOptions::default()).as_deref(),
            Some("Carousel")
        );
    }

    #[test]
    fn drag_maps_to_touch_gesture() {
        let mut pointer = PointerState::default();
        assert_eq!(pointer.cursor_moved(10.0), None);
        assert_eq!(
            pointer.mouse_button(true),
            Some(InputEvent::TouchStart { x: 10.0 })
        );
        assert_eq!(
            pointer.cursor_moved(30.0),
            Some(InputEvent::TouchMove { x: 30.0 })
        );
        assert_eq!(pointer.mouse_button(false), Some(InputEvent::TouchEnd));
        assert_eq!(pointer.mouse_button(false), None);
    }

    #[test]
    fn only_first_touch_is_tracked() {
        let mut pointer = PointerState::default();
        assert!(pointer.touch(1, TouchPhase::Started, 5.0).is_some());
        assert_eq!(pointer.touch(2, TouchPhase::Started, 50.0), None);
        assert_eq!(pointer.touch(2, TouchPhase::Moved, 60.0), None);
        assert_eq!(
            pointer.touch(1, TouchPhase::Moved, 8.0),
            Some(InputEvent::TouchMove { x: 8.0 })
        );
        assert_eq!(
            pointer.touch(1, TouchPhase::Cancelled, 8.0),
            Some(InputEvent::TouchEnd)
        );
    }

    #[test]
    fn wheel_deltas_use_dom_sign() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -1.0)), 100.0);
        let pixels = winit::dpi::PhysicalPosition::new(0.0, 40.0);
        assert_eq!(wheel_delta_y(MouseScrollDelta::PixelDelta(pixels)), -40.0);
    }
}

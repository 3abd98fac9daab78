use glam::Vec3;

use crate::camera::Camera;
use crate::layout::Panel;
use crate::options::OverlayOptions;
use crate::render::OverlayHost;

/// Where and how to draw one title.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayPlacement {
    /// Center x in overlay pixels from the left edge.
    pub x: f32,
    /// Center y in overlay pixels from the top edge.
    pub y: f32,
    /// 1 at the center of the strip, 0 once fully faded.
    pub opacity: f32,
    /// Blur radius in pixels.
    pub blur: f32,
}

/// Resolved fade band, in world units from the strip center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeBand {
    /// Titles start fading here.
    pub start: f32,
    /// Titles are fully transparent from here on.
    pub end: f32,
    /// Blur radius in pixels once fully faded.
    pub max_blur: f32,
}

impl FadeBand {
    /// Band for panels `slide_width` wide.
    #[must_use]
    pub fn new(options: &OverlayOptions, slide_width: f32) -> Self {
        let (start, end) = options.fade_band(slide_width);
        Self {
            start,
            end,
            max_blur: options.max_blur,
        }
    }
}

/// Opacity and blur for a panel `distance` world units from the center.
///
/// Fully opaque and sharp up to `band.start`, linear to `band.end`, fully
/// transparent with `max_blur` beyond. A zero-width band switches hard at
/// `band.start`.
#[must_use]
pub fn fade(distance: f32, band: &FadeBand) -> (f32, f32) {
    if distance <= band.start {
        return (1.0, 0.0);
    }
    let width = band.end - band.start;
    let progress = if width > 0.0 {
        ((distance - band.start) / width).min(1.0)
    } else {
        1.0
    };
    (1.0 - progress, progress * band.max_blur)
}

/// Projects panel anchors into overlay pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayProjector {
    band: FadeBand,
    width: f32,
    height: f32,
}

impl OverlayProjector {
    /// Projector for a `width × height` pixel overlay.
    #[must_use]
    pub fn new(band: FadeBand, width: u32, height: u32) -> Self {
        Self {
            band,
            width: width as f32,
            height: height as f32,
        }
    }

    /// Replace the fade band.
    pub fn set_band(&mut self, band: FadeBand) {
        self.band = band;
    }

    /// Track a resized overlay.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    /// Placement of a title anchored at world-space `anchor`.
    #[must_use]
    pub fn place(&self, camera: &Camera, anchor: Vec3) -> OverlayPlacement {
        let ndc = camera.project(anchor);
        let (opacity, blur) = fade(anchor.x.abs(), &self.band);
        OverlayPlacement {
            x: (ndc.x * 0.5 + 0.5) * self.width,
            y: (-ndc.y * 0.5 + 0.5) * self.height,
            opacity,
            blur,
        }
    }

    /// Place the title of every panel, pairing panel `i` with title
    /// `i % title_count`. Does nothing without titles.
    pub fn project<'a>(
        &self,
        camera: &Camera,
        panels: impl IntoIterator<Item = &'a Panel>,
        title_count: usize,
        host: &mut impl OverlayHost,
    ) {
        if title_count == 0 {
            return;
        }
        for panel in panels {
            let placement = self.place(camera, panel.transform.position);
            host.place_title(panel.index % title_count, &placement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;
    use crate::render::RecordingSurface;

    fn camera(width: u32, height: u32) -> Camera {
        Camera::from_options(
            &CameraOptions::default(),
            width as f32 / height as f32,
        )
    }

    fn band() -> FadeBand {
        FadeBand::new(&OverlayOptions::default(), 3.2)
    }

    #[test]
    fn fade_bands() {
        let band = band();
        assert_eq!(fade(0.0, &band), (1.0, 0.0));
        assert_eq!(fade(1.6, &band), (1.0, 0.0));
        let (opacity, blur) = fade(1.85, &band);
        assert!((opacity - 0.5).abs() < 1e-5);
        assert!((blur - 2.5).abs() < 1e-4);
        assert_eq!(fade(2.2, &band), (0.0, 5.0));
        assert_eq!(fade(30.0, &band), (0.0, 5.0));
    }

    #[test]
    fn default_band_follows_slide_width() {
        let band = FadeBand::new(&OverlayOptions::default(), 4.0);
        assert_eq!((band.start, band.end), (2.0, 2.5));

        let pinned = OverlayOptions {
            fade_start: Some(1.0),
            ..OverlayOptions::default()
        };
        let band = FadeBand::new(&pinned, 4.0);
        assert_eq!((band.start, band.end), (1.0, 1.5));
    }

    #[test]
    fn zero_width_band_switches_hard() {
        let band = FadeBand {
            start: 1.0,
            end: 1.0,
            max_blur: 4.0,
        };
        assert_eq!(fade(1.0, &band), (1.0, 0.0));
        assert_eq!(fade(1.01, &band), (0.0, 4.0));
    }

    #[test]
    fn centered_anchor_maps_to_viewport_center() {
        let projector =
            OverlayProjector::new(band(), 1280, 720);
        let placement = projector.place(&camera(1280, 720), Vec3::ZERO);
        assert!((placement.x - 640.0).abs() < 1e-3);
        assert!((placement.y - 360.0).abs() < 1e-3);
        assert_eq!(placement.opacity, 1.0);
    }

    #[test]
    fn anchors_above_center_move_up() {
        let projector =
            OverlayProjector::new(band(), 800, 600);
        let placement =
            projector.place(&camera(800, 600), Vec3::new(0.0, 1.0, 0.0));
        assert!(placement.y < 300.0);
    }

    #[test]
    fn titles_pair_by_modulo() {
        let projector =
            OverlayProjector::new(band(), 800, 600);
        let mut panels: Vec<Panel> = (0..3).map(Panel::new).collect();
        panels[1].transform.position = Vec3::new(3.45, 0.0, -0.17);
        let mut host = RecordingSurface::new();
        projector.project(&camera(800, 600), &panels, 2, &mut host);
        assert_eq!(host.title_calls, 3);
        assert_eq!(host.titles.len(), 2);
        // Panel 2 (at the origin) overwrote title 0.
        assert!((host.titles[&0].x - 400.0).abs() < 1e-3);
        assert_eq!(host.titles[&1].opacity, 0.0);
    }

    #[test]
    fn no_titles_places_nothing() {
        let projector =
            OverlayProjector::new(band(), 800, 600);
        let panels = vec![Panel::new(0)];
        let mut host = RecordingSurface::new();
        projector.project(&camera(800, 600), &panels, 0, &mut host);
        assert_eq!(host.title_calls, 0);
    }
}

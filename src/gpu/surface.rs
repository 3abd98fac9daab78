//! Window surface and device bring-up for the panel renderer.
//!
//! The strip draws one alpha-blended color pass. The device is requested
//! with WebGL2-level limits and the surface prefers an sRGB format.

use std::fmt;

/// Stage of GPU bring-up that failed.
#[derive(Debug)]
pub enum GpuInitError {
    /// The window could not back a wgpu surface.
    Surface(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    Adapter(wgpu::RequestAdapterError),
    /// The adapter refused the requested limits.
    Device(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    NoSurfaceFormat,
}

impl fmt::Display for GpuInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "cannot create window surface: {e}"),
            Self::Adapter(e) => write!(f, "no adapter for the window: {e}"),
            Self::Device(e) => write!(f, "device rejected panel limits: {e}"),
            Self::NoSurfaceFormat => f.write_str("surface exposes no formats"),
        }
    }
}

impl std::error::Error for GpuInitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::Adapter(e) => Some(e),
            Self::Device(e) => Some(e),
            Self::NoSurfaceFormat => None,
        }
    }
}

/// First sRGB format in `formats`, else the first one listed.
#[must_use]
pub fn preferred_format(
    formats: &[wgpu::TextureFormat],
) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
}

/// Device, queue and the configured window surface the strip draws into.
pub struct SurfaceContext {
    /// Logical device.
    pub device: wgpu::Device,
    /// Submission queue.
    pub queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl SurfaceContext {
    /// Open a surface on `window` and configure it at `size` pixels.
    ///
    /// # Errors
    ///
    /// Returns the [`GpuInitError`] of the first bring-up stage that fails.
    pub async fn connect(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, GpuInitError> {
        let instance = wgpu::Instance::new(
            &wgpu::InstanceDescriptor::from_env_or_default(),
        );
        let surface = instance
            .create_surface(window)
            .map_err(GpuInitError::Surface)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(GpuInitError::Adapter)?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Carousel Device"),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                ..Default::default()
            })
            .await
            .map_err(GpuInitError::Device)?;

        let caps = surface.get_capabilities(&adapter);
        let format = preferred_format(&caps.formats)
            .ok_or(GpuInitError::NoSurfaceFormat)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.0.max(1),
            height: size.1.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: Vec::new(),
        };
        surface.configure(&device, &config);
        log::info!(
            "panel surface {format:?} {}x{} on {}",
            config.width,
            config.height,
            adapter.get_info().name
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Color format of the swapchain.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Swapchain size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Follow a window resize. Zero-sized (minimized) windows keep the
    /// previous configuration.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size() {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Next swapchain texture. A lost or outdated surface is reconfigured
    /// and asked once more.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] of the retry, or any other
    /// acquisition failure.
    pub fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        match self.surface.get_current_texture() {
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("panel surface stale, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture()
            }
            acquired => acquired,
        }
    }

    /// Submit `encoder` and show `frame`.
    pub fn present(
        &self,
        encoder: wgpu::CommandEncoder,
        frame: wgpu::SurfaceTexture,
    ) {
        let _ = self.queue.submit([encoder.finish()]);
        frame.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_formats_win() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            preferred_format(&formats),
            Some(wgpu::TextureFormat::Bgra8UnormSrgb)
        );
    }

    #[test]
    fn first_format_without_srgb() {
        let formats = [wgpu::TextureFormat::Rgba16Float];
        assert_eq!(
            preferred_format(&formats),
            Some(wgpu::TextureFormat::Rgba16Float)
        );
        assert_eq!(preferred_format(&[]), None);
    }

    #[test]
    fn format_error_has_no_source() {
        use std::error::Error;
        let err = GpuInitError::NoSurfaceFormat;
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "surface exposes no formats");
    }
}

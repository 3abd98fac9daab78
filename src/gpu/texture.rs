//! Panel textures.
//!
//! Image loading is left to the host; the reference surface fills each
//! panel with a generated gradient until real pixels arrive.

/// Edge length of the generated placeholder textures.
pub const PLACEHOLDER_SIZE: u32 = 256;

/// Base colors of the placeholder gradients, cycled by panel index.
const PLACEHOLDER_PALETTE: [[u8; 3]; 4] = [
    [16, 234, 180],
    [236, 92, 64],
    [72, 118, 255],
    [244, 196, 48],
];

/// A sampled panel texture and its default view.
pub struct PanelTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl PanelTexture {
    /// Upload tightly packed RGBA8 sRGB pixels.
    #[must_use]
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    /// Generated gradient texture for panel `index`.
    #[must_use]
    pub fn placeholder(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        index: usize,
    ) -> Self {
        let pixels = placeholder_pixels(index, PLACEHOLDER_SIZE);
        Self::from_rgba(
            device,
            queue,
            &format!("Panel {index} Placeholder"),
            PLACEHOLDER_SIZE,
            PLACEHOLDER_SIZE,
            &pixels,
        )
    }
}

/// RGBA8 pixels of a `size × size` diagonal gradient from the panel's
/// palette color to black, with a faint grid every 32 px.
#[must_use]
pub fn placeholder_pixels(index: usize, size: u32) -> Vec<u8> {
    let base = PLACEHOLDER_PALETTE[index % PLACEHOLDER_PALETTE.len()];
    let span = (2 * size.max(1)).saturating_sub(2).max(1) as f32;
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let t = 1.0 - (x + y) as f32 / span;
            let grid = if x % 32 == 0 || y % 32 == 0 { 0.8 } else { 1.0 };
            for channel in base {
                pixels.push((f32::from(channel) * t * grid) as u8);
            }
            pixels.push(u8::MAX);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_rgba_per_pixel() {
        let pixels = placeholder_pixels(0, 16);
        assert_eq!(pixels.len(), 16 * 16 * 4);
        assert!(pixels.chunks_exact(4).all(|px| px[3] == u8::MAX));
    }

    #[test]
    fn gradient_fades_to_black() {
        let size = 64;
        let pixels = placeholder_pixels(1, size);
        let last = ((size * size - 1) * 4) as usize;
        assert_eq!(&pixels[last..last + 3], &[0, 0, 0]);
        // (1, 1) is off the grid lines and near full brightness.
        let near = ((size + 1) * 4) as usize;
        assert!(pixels[near] > 200);
    }

    #[test]
    fn palette_cycles_by_index() {
        assert_eq!(placeholder_pixels(0, 8), placeholder_pixels(4, 8));
        assert_ne!(placeholder_pixels(0, 8), placeholder_pixels(1, 8));
    }
}

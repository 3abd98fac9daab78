//! Reference wgpu surface: draws every panel with the distortion shader.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::mesh::{PanelVertex, PlaneMesh, PLANE_SEGMENTS};
use super::pipeline_helpers::{
    create_mesh_pipeline, filtering_sampler, linear_sampler, texture_2d,
    uniform_buffer,
};
use super::surface::SurfaceContext;
use super::texture::PanelTexture;
use crate::camera::{Camera, CameraUniform};
use crate::layout::PanelTransform;
use crate::options::LayoutOptions;
use crate::render::{PanelUniforms, RenderSurface};

/// Clear color behind the strip.
const BACKGROUND: wgpu::Color = wgpu::Color::BLACK;

/// Per-panel uniform block: model matrix followed by the shader
/// parameters. Matches `Panel` in `panel.wgsl` (96 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct PanelBlock {
    model: [[f32; 4]; 4],
    uniforms: PanelUniforms,
}

struct GpuPanel {
    block: PanelBlock,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Depth of the last applied transform, for back-to-front sorting.
    depth: f32,
    /// Received state since the last [`PanelRenderer::begin_frame`].
    visible: bool,
    /// Keeps the bound texture alive.
    _texture: PanelTexture,
}

impl GpuPanel {
    fn new(
        context: &SurfaceContext,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        index: usize,
    ) -> Self {
        let device = &context.device;
        let texture = PanelTexture::placeholder(device, &context.queue, index);
        let block = PanelBlock {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            uniforms: PanelUniforms::default(),
        };
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("Panel {index} Uniform")),
                contents: bytemuck::bytes_of(&block),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("Panel {index} Bind Group")),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            block,
            buffer,
            bind_group,
            depth: 0.0,
            visible: false,
            _texture: texture,
        }
    }
}

/// Draws the strip; implements [`RenderSurface`].
pub struct PanelRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    panels: Vec<GpuPanel>,
}

impl PanelRenderer {
    /// Pipeline, shared plane mesh, and one placeholder-textured panel per
    /// slot.
    #[must_use]
    pub fn new(
        context: &SurfaceContext,
        layout: &LayoutOptions,
        panel_count: usize,
    ) -> Self {
        let device = &context.device;
        let shader = device
            .create_shader_module(wgpu::include_wgsl!("../../assets/shaders/panel.wgsl"));

        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Layout"),
                entries: &[uniform_buffer(0, wgpu::ShaderStages::VERTEX)],
            });
        let panel_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Panel Layout"),
                entries: &[
                    uniform_buffer(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                    texture_2d(1),
                    filtering_sampler(2),
                ],
            });

        let pipeline = create_mesh_pipeline(
            device,
            "Panel",
            &shader,
            context.format(),
            PanelVertex::layout(),
            &[&camera_layout, &panel_layout],
        );

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform"),
                contents: bytemuck::bytes_of(&CameraUniform::new()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let mesh = PlaneMesh::new(
            layout.slide_width,
            layout.slide_height,
            PLANE_SEGMENTS,
        );
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Panel Vertices"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Panel Indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let sampler = linear_sampler(device, "Panel Sampler");
        let panels = (0..panel_count)
            .map(|index| {
                GpuPanel::new(context, &panel_layout, &sampler, index)
            })
            .collect();

        Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            panels,
        }
    }

    /// Number of panels with GPU resources.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Forget which panels were pushed last frame. Panels not pushed again
    /// before [`render`](Self::render) are skipped.
    pub fn begin_frame(&mut self) {
        for panel in &mut self.panels {
            panel.visible = false;
        }
    }

    /// Upload this frame's state and draw the visible panels back to front.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if no swapchain texture could be
    /// acquired.
    pub fn render(
        &self,
        context: &SurfaceContext,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&camera_uniform),
        );

        let mut order: Vec<&GpuPanel> =
            self.panels.iter().filter(|p| p.visible).collect();
        order.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        for panel in &order {
            context.queue.write_buffer(
                &panel.buffer,
                0,
                bytemuck::bytes_of(&panel.block),
            );
        }

        let frame = context.acquire()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = context.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Panel Encoder"),
            },
        );
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Panel Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(BACKGROUND),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    ..Default::default()
                });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_index_buffer(
                self.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            for panel in order {
                pass.set_bind_group(1, &panel.bind_group, &[]);
                pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
        }
        context.present(encoder, frame);
        Ok(())
    }
}

impl RenderSurface for PanelRenderer {
    fn set_panel_transform(&mut self, index: usize, transform: &PanelTransform) {
        let Some(panel) = self.panels.get_mut(index) else {
            log::debug!("transform for unknown panel {index}");
            return;
        };
        panel.block.model = transform.model_matrix().to_cols_array_2d();
        panel.depth = transform.position.z;
        panel.visible = true;
    }

    fn set_panel_uniforms(&mut self, index: usize, uniforms: &PanelUniforms) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.block.uniforms = *uniforms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_block_matches_wgsl_layout() {
        assert_eq!(size_of::<PanelBlock>(), 96);
        assert_eq!(std::mem::offset_of!(PanelBlock, uniforms), 64);
    }
}

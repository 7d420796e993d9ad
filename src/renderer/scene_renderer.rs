//! Draws the static scene: one indexed mesh per shape kind, one uniform
//! block and bind group per object.

use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::{
    camera::CameraUniform,
    gpu::{
        pipeline_helpers,
        render_context::RenderContext,
        texture::{DepthTexture, GpuTexture, DEPTH_FORMAT},
    },
    scene::{
        MeshData, Scene, SceneObject, ShapeKind, Surface, TextureImage,
        TextureSlot, Vertex,
    },
};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-object uniform block.
///
/// Matches the WGSL struct:
/// ```wgsl
/// struct Object {
///     model: mat4x4<f32>,
///     color: vec4<f32>,
///     use_texture: u32,
/// }
/// ```
pub struct ObjectUniform {
    /// Object-to-world matrix, column-major.
    pub model: [[f32; 4]; 4],
    /// Flat RGBA color, used when `use_texture` is 0.
    pub color: [f32; 4],
    /// Nonzero to sample the bound texture instead of `color`.
    pub use_texture: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [u32; 3],
}

/// Decode one sRGB-encoded channel to linear.
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl ObjectUniform {
    /// Uniform block for one scene object.
    ///
    /// Scene colors are authored in sRGB. They are linearized here so the
    /// sRGB surface encodes them back to the authored value, the same way
    /// `Rgba8UnormSrgb` textures round-trip. Alpha is left as is.
    #[must_use]
    pub fn new(object: &SceneObject) -> Self {
        let (color, use_texture) = match object.surface {
            Surface::Color([r, g, b, a]) => (
                [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a],
                0,
            ),
            Surface::Texture(_) => ([1.0; 4], 1),
        };
        Self {
            model: object.transform.model_matrix().to_cols_array_2d(),
            color,
            use_texture,
            _pad: [0; 3],
        }
    }
}

/// Vertex and index buffers for one primitive.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn new(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertices")),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Indices")),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// One draw call's GPU state.
struct ObjectDraw {
    shape: ShapeKind,
    // Held so the uniform outlives the bind group that references it.
    _uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Renders a [`Scene`] with a single alpha-blended, depth-tested pipeline.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    meshes: HashMap<ShapeKind, GpuMesh>,
    objects: Vec<ObjectDraw>,
    depth: DepthTexture,
}

impl SceneRenderer {
    /// Upload meshes, textures and per-object uniforms for `scene`.
    ///
    /// Texture slots missing from `images` fall back to a 1×1 white
    /// texture.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        scene: &Scene,
        images: &HashMap<TextureSlot, TextureImage>,
    ) -> Self {
        let device = &context.device;

        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[pipeline_helpers::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                )],
            });
        let object_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Object Bind Group Layout"),
                entries: &[
                    pipeline_helpers::uniform_buffer(
                        0,
                        wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ),
                    pipeline_helpers::texture_2d(1),
                    pipeline_helpers::filtering_sampler(2),
                ],
            });

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform Buffer"),
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

        let shader = device
            .create_shader_module(wgpu::include_wgsl!("../../assets/shaders/scene.wgsl"));
        let pipeline = pipeline_helpers::create_mesh_pipeline(
            device,
            "Scene",
            &shader,
            context.format(),
            DEPTH_FORMAT,
            Vertex::buffer_layout(),
            &[&camera_layout, &object_layout],
        );

        let meshes = ShapeKind::ALL
            .into_iter()
            .map(|shape| {
                let label = format!("{shape:?}");
                (shape, GpuMesh::new(device, &label, &shape.mesh()))
            })
            .collect();

        let white = GpuTexture::white(device, &context.queue);
        let textures: HashMap<TextureSlot, GpuTexture> = images
            .iter()
            .map(|(slot, image)| {
                let label = format!("{slot:?} Texture");
                (
                    *slot,
                    GpuTexture::from_image(device, &context.queue, image, &label),
                )
            })
            .collect();

        let objects = scene
            .objects()
            .iter()
            .map(|object| {
                let texture = match object.surface {
                    Surface::Texture(slot) => textures.get(&slot).unwrap_or(&white),
                    Surface::Color(_) => &white,
                };
                Self::create_object_draw(device, &object_layout, object, texture)
            })
            .collect();

        let (width, height) = context.size();
        Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            meshes,
            objects,
            depth: DepthTexture::new(device, width, height),
        }
    }

    fn create_object_draw(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        object: &SceneObject,
        texture: &GpuTexture,
    ) -> ObjectDraw {
        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Uniform Buffer", object.name)),
                contents: bytemuck::bytes_of(&ObjectUniform::new(object)),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", object.name)),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });
        ObjectDraw {
            shape: object.shape,
            _uniform_buffer: uniform_buffer,
            bind_group,
        }
    }

    /// Recreate the depth attachment if the surface size changed.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth.size() != (width.max(1), height.max(1)) {
            self.depth = DepthTexture::new(device, width, height);
        }
    }

    /// Upload the camera uniform and draw every object in scene order.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the next swapchain image cannot be
    /// acquired.
    pub fn render(
        &self,
        context: &RenderContext,
        camera: &CameraUniform,
        clear_color: [f64; 4],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        context
            .queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(camera));

        let mut encoder = context.create_encoder();
        {
            let [r, g, b, a] = clear_color;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            for object in &self.objects {
                let Some(mesh) = self.meshes.get(&object.shape) else {
                    continue;
                };
                pass.set_bind_group(1, &object.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(
                    mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        context.submit(encoder);
        frame.present();
        Ok(())
    }
}

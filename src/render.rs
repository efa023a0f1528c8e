use crate::constants::{PLANE_VERTICES, SPLAT_EXTENT_SIGMAS, SPLAT_QUAD_VERTICES};
use glam::{Mat4, Quat, Vec3};
use stage_core::{
    splat_count, MeshHandle, SceneHost, SceneSetup, StageError, SPLAT_COLOR_OFFSET,
    SPLAT_POSITION_OFFSET, SPLAT_RECORD_BYTES, SPLAT_SCALE_OFFSET,
};
use web_sys as web;
use wgpu::util::DeviceExt;

mod camera;
mod helpers;
mod targets;
use targets::RenderTargets;

pub use camera::Camera;

pub static STAGE_WGSL: &str = include_str!("../shaders/stage.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    light: [f32; 4],
    plane: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    model: [[f32; 4]; 4],
    extent: [f32; 4],
}

/// One installed splat cloud. The file bytes are the instance buffer as-is.
struct SplatMesh {
    instances: wgpu::Buffer,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    rotation: Quat,
    position: Vec3,
}

impl SplatMesh {
    fn uniforms(&self) -> MeshUniforms {
        MeshUniforms {
            model: Mat4::from_rotation_translation(self.rotation, self.position)
                .to_cols_array_2d(),
            extent: [SPLAT_EXTENT_SIGMAS, 0.0, 0.0, 0.0],
        }
    }
}

pub struct GpuHost {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    scene_uniforms: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    mesh_bgl: wgpu::BindGroupLayout,
    plane_pipeline: wgpu::RenderPipeline,
    splat_pipeline: wgpu::RenderPipeline,

    meshes: Vec<SplatMesh>,
    camera: Camera,
    setup: SceneSetup,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuHost {
    pub async fn new(canvas: &web::HtmlCanvasElement, setup: SceneSetup) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let targets = RenderTargets::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stage_shader"),
            source: wgpu::ShaderSource::Wgsl(STAGE_WGSL.into()),
        });

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let mesh_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let scene_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniforms.as_entire_binding(),
            }],
        });

        let plane_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("plane_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let plane_pipeline = helpers::make_scene_pipeline(
            &device,
            "plane_pipeline",
            &plane_layout,
            &shader,
            "vs_plane",
            "fs_plane",
            &[],
            format,
            None,
            true,
        );

        let splat_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("splat_pl"),
            bind_group_layouts: &[&scene_bgl, &mesh_bgl],
            push_constant_ranges: &[],
        });
        let splat_attributes = [
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: SPLAT_POSITION_OFFSET as u64,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: SPLAT_SCALE_OFFSET as u64,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Unorm8x4,
                offset: SPLAT_COLOR_OFFSET as u64,
                shader_location: 2,
            },
        ];
        let splat_pipeline = helpers::make_scene_pipeline(
            &device,
            "splat_pipeline",
            &splat_layout,
            &shader,
            "vs_splat",
            "fs_splat",
            &[wgpu::VertexBufferLayout {
                array_stride: SPLAT_RECORD_BYTES as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &splat_attributes,
            }],
            format,
            Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
            false,
        );

        let camera = Camera {
            eye: setup.camera_start,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width as f32 / height as f32,
            fovy_radians: setup.fovy_radians,
            znear: setup.znear,
            zfar: setup.zfar,
        };
        let [r, g, b] = setup.clear_color;
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene_uniforms,
            scene_bind_group,
            mesh_bgl,
            plane_pipeline,
            splat_pipeline,
            meshes: Vec::new(),
            camera,
            setup,
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    fn scene_uniforms(&self) -> SceneUniforms {
        let view_proj = self.camera.projection_matrix() * self.camera.view_matrix();
        let (right, up) = self.camera.basis();
        let light = self.setup.light_direction;
        let [pr, pg, pb] = self.setup.plane_diffuse;
        SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            light: [light.x, light.y, light.z, self.setup.light_intensity],
            plane: [pr, pg, pb, self.setup.plane_size],
        }
    }

    fn mesh_mut(&mut self, mesh: MeshHandle) -> Option<&mut SplatMesh> {
        let found = self.meshes.get_mut(mesh.0 as usize);
        if found.is_none() {
            log::warn!("[gpu] {}", StageError::UnknownMesh(mesh));
        }
        found
    }
}

impl SceneHost for GpuHost {
    /// Raw `.splat` file contents.
    type Asset = Vec<u8>;

    fn camera_position(&self) -> Vec3 {
        self.camera.eye
    }

    fn set_camera_position(&mut self, position: Vec3) {
        self.camera.eye = position;
    }

    fn set_camera_target(&mut self, target: Vec3) {
        self.camera.target = target;
    }

    fn install_mesh(&mut self, bytes: Vec<u8>) -> Result<MeshHandle, StageError> {
        let count = splat_count(bytes.len())?;
        let count = u32::try_from(count)
            .map_err(|_| StageError::AssetLoad(format!("{} splats exceed u32", count)))?;
        let instances = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("splat_instances"),
                contents: &bytes,
                usage: wgpu::BufferUsages::VERTEX,
            });
        let uniform_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_uniforms"),
            size: std::mem::size_of::<MeshUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mesh_bg"),
            layout: &self.mesh_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let handle = MeshHandle(self.meshes.len() as u32);
        self.meshes.push(SplatMesh {
            instances,
            count,
            uniform_buffer,
            bind_group,
            rotation: Quat::IDENTITY,
            position: Vec3::ZERO,
        });
        log::info!("[gpu] installed {:?} with {} splats", handle, count);
        Ok(handle)
    }

    fn rotate_mesh(&mut self, mesh: MeshHandle, axis: Vec3, angle: f32) {
        if let Some(m) = self.mesh_mut(mesh) {
            m.rotation = (m.rotation * Quat::from_axis_angle(axis, angle)).normalize();
        }
    }

    fn set_mesh_position(&mut self, mesh: MeshHandle, position: Vec3) {
        if let Some(m) = self.mesh_mut(mesh) {
            m.position = position;
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    fn render(&mut self) -> Result<(), StageError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(StageError::Render(format!("{:?}", e))),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.scene_uniforms,
            0,
            bytemuck::bytes_of(&self.scene_uniforms()),
        );
        for m in &self.meshes {
            self.queue
                .write_buffer(&m.uniform_buffer, 0, bytemuck::bytes_of(&m.uniforms()));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.plane_pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.draw(0..PLANE_VERTICES, 0..1);

            rpass.set_pipeline(&self.splat_pipeline);
            for m in &self.meshes {
                rpass.set_bind_group(1, &m.bind_group, &[]);
                rpass.set_vertex_buffer(0, m.instances.slice(..));
                rpass.draw(0..SPLAT_QUAD_VERTICES, 0..m.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

use crate::constants::{CLEAR_COLOR, MSAA_SAMPLES};
use crate::core::constants::{
    FOG_COLOR, FOG_FAR, FOG_NEAR, SPHERE_HEIGHT_SEGMENTS, SPHERE_WIDTH_SEGMENTS,
};
use crate::core::mesh::{grid_lines, unit_box, uv_sphere, wireframe};
use crate::core::{Material, Node, NodeKind, Side, Stage, WorldTransform};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod meshes;
mod targets;
use helpers::{make_scene_pipeline, srgb_to_linear, PipelineSpec};
use meshes::{vertex_layouts, GpuMesh, InstanceBatch, InstanceRaw};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    ambient: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    fog_color: [f32; 4],
    fog_range: [f32; 4],
}

struct Pipelines {
    // back faces of the room, Phong lit, blended
    room: wgpu::RenderPipeline,
    solid: wgpu::RenderPipeline,
    lines: wgpu::RenderPipeline,
    lines_blend: wgpu::RenderPipeline,
}

struct Meshes {
    room_box: GpuMesh,
    sphere: GpuMesh,
    sphere_wire: GpuMesh,
    // rebuilt when the stage revision changes
    grid: Option<(u64, GpuMesh)>,
}

/// Instances gathered from one walk over the scene.
#[derive(Default)]
struct FrameBatches {
    room: Vec<InstanceRaw>,
    grid: Vec<InstanceRaw>,
    markers: Vec<InstanceRaw>,
    waves: Vec<InstanceRaw>,
    ambient: Vec3,
    light_pos: Vec3,
    light_color: Vec3,
}

struct Batches {
    room: InstanceBatch,
    grid: InstanceBatch,
    markers: InstanceBatch,
    waves: InstanceBatch,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipelines: Pipelines,
    meshes: Meshes,
    batches: Batches,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let targets = RenderTargets::new(&device, format, MSAA_SAMPLES, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let buffers = vertex_layouts();
        let pipeline = |spec: PipelineSpec| {
            make_scene_pipeline(
                &device,
                &pipeline_layout,
                &shader,
                &buffers,
                format,
                MSAA_SAMPLES,
                spec,
            )
        };
        let pipelines = Pipelines {
            room: pipeline(PipelineSpec {
                label: "room_pipeline",
                frag_entry: "fs_lit",
                topology: wgpu::PrimitiveTopology::TriangleList,
                side: Side::Back,
                transparent: true,
            }),
            solid: pipeline(PipelineSpec {
                label: "solid_pipeline",
                frag_entry: "fs_basic",
                topology: wgpu::PrimitiveTopology::TriangleList,
                side: Side::Front,
                transparent: false,
            }),
            lines: pipeline(PipelineSpec {
                label: "lines_pipeline",
                frag_entry: "fs_basic",
                topology: wgpu::PrimitiveTopology::LineList,
                side: Side::Double,
                transparent: false,
            }),
            lines_blend: pipeline(PipelineSpec {
                label: "lines_blend_pipeline",
                frag_entry: "fs_basic",
                topology: wgpu::PrimitiveTopology::LineList,
                side: Side::Double,
                transparent: true,
            }),
        };

        let sphere = uv_sphere(SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
        let meshes = Meshes {
            room_box: GpuMesh::upload(&device, "room_box", &unit_box()),
            sphere_wire: GpuMesh::upload(&device, "sphere_wire", &wireframe(&sphere)),
            sphere: GpuMesh::upload(&device, "sphere", &sphere),
            grid: None,
        };
        let batches = Batches {
            room: InstanceBatch::new(&device, "room_instances"),
            grid: InstanceBatch::new(&device, "grid_instances"),
            markers: InstanceBatch::new(&device, "marker_instances"),
            waves: InstanceBatch::new(&device, "wave_instances"),
        };

        let [r, g, b, a] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globals_buffer,
            bind_group,
            pipelines,
            meshes,
            batches,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
        if self.targets.size() != (width, height) {
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure after the surface was lost or went out of date.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, stage: &Stage) -> Result<(), wgpu::SurfaceError> {
        self.ensure_grid(stage);
        let frame_batches = collect_batches(stage);
        self.write_globals(stage, &frame_batches);
        self.batches
            .room
            .write(&self.device, &self.queue, &frame_batches.room);
        self.batches
            .grid
            .write(&self.device, &self.queue, &frame_batches.grid);
        self.batches
            .markers
            .write(&self.device, &self.queue, &frame_batches.markers);
        self.batches
            .waves
            .write(&self.device, &self.queue, &frame_batches.waves);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            // opaque first, then blended surfaces without depth writes
            if let Some((_, grid)) = &self.meshes.grid {
                self.batches
                    .grid
                    .draw(&mut rpass, &self.pipelines.lines, grid);
            }
            self.batches
                .markers
                .draw(&mut rpass, &self.pipelines.solid, &self.meshes.sphere);
            self.batches
                .room
                .draw(&mut rpass, &self.pipelines.room, &self.meshes.room_box);
            self.batches.waves.draw(
                &mut rpass,
                &self.pipelines.lines_blend,
                &self.meshes.sphere_wire,
            );
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn ensure_grid(&mut self, stage: &Stage) {
        if matches!(&self.meshes.grid, Some((rev, _)) if *rev == stage.revision) {
            return;
        }
        let grid = stage.scene.find_kind(|k| matches!(k, NodeKind::Grid { .. }));
        self.meshes.grid = grid.and_then(|(node, _)| match node.kind {
            NodeKind::Grid {
                width,
                depth,
                divisions,
            } => {
                let mesh = grid_lines(width, depth, divisions);
                log::info!(
                    "[gpu] grid {}x{} ({} lines)",
                    divisions.0,
                    divisions.1,
                    mesh.line_count()
                );
                Some((stage.revision, GpuMesh::upload(&self.device, "grid", &mesh)))
            }
            _ => None,
        });
    }

    fn write_globals(&self, stage: &Stage, batches: &FrameBatches) {
        let camera = &stage.camera;
        let fog = srgb_to_linear(FOG_COLOR);
        let globals = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            ambient: batches.ambient.extend(0.0).to_array(),
            light_pos: batches.light_pos.extend(1.0).to_array(),
            light_color: batches.light_color.extend(0.0).to_array(),
            fog_color: [fog[0], fog[1], fog[2], 1.0],
            fog_range: [FOG_NEAR, FOG_FAR, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }
}

fn instance(xf: WorldTransform, size: Vec3, material: &Material) -> InstanceRaw {
    let [r, g, b] = srgb_to_linear(material.color);
    InstanceRaw {
        offset: xf.offset.to_array(),
        scale: (xf.scale * size).to_array(),
        color: [r, g, b, material.opacity],
    }
}

fn collect_batches(stage: &Stage) -> FrameBatches {
    let mut out = FrameBatches::default();
    for (node, xf) in stage.scene.flatten() {
        collect_node(node, xf, &mut out);
    }
    out
}

fn collect_node(node: &Node, xf: WorldTransform, out: &mut FrameBatches) {
    match (&node.kind, node.material.as_ref()) {
        (NodeKind::RoomBox { size }, Some(m)) => out.room.push(instance(xf, *size, m)),
        (NodeKind::Grid { .. }, Some(m)) => out.grid.push(instance(xf, Vec3::ONE, m)),
        (NodeKind::Marker { radius }, Some(m)) => {
            out.markers.push(instance(xf, Vec3::splat(*radius), m))
        }
        (NodeKind::Wave { radius }, Some(m)) => {
            out.waves.push(instance(xf, Vec3::splat(*radius), m))
        }
        (NodeKind::AmbientLight { color, intensity }, _) => {
            out.ambient += Vec3::from(srgb_to_linear(*color)) * *intensity;
        }
        (NodeKind::PointLight { color, intensity }, _) => {
            out.light_pos = xf.offset;
            out.light_color = Vec3::from(srgb_to_linear(*color)) * *intensity;
        }
        _ => {}
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

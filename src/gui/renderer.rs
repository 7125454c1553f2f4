//! Presents the canvas in a window, scaled up with nearest-neighbor sampling.

use std::rc::Rc;

use wgpu::*;
use winit::{dpi::PhysicalSize, event_loop::EventLoopWindowTarget, window::WindowBuilder};

use crate::resolution::Resolution;

use super::gpu::Gpu;

const BACKGROUND: Color = Color::BLACK;

pub struct Window {
    pub(crate) win: Rc<winit::window::Window>,
    resolution: Resolution,
}

impl Window {
    pub fn open<T>(
        event_loop: &EventLoopWindowTarget<T>,
        title: &str,
        resolution: Resolution,
    ) -> anyhow::Result<Self> {
        let win = WindowBuilder::new()
            .with_resizable(false)
            .with_inner_size(PhysicalSize::new(resolution.width(), resolution.height()))
            .with_title(title)
            .build(event_loop)?;
        Ok(Self {
            win: Rc::new(win),
            resolution,
        })
    }
}

/// The texture the canvas is uploaded into.
struct CanvasTexture {
    inner: wgpu::Texture,
    size: Extent3d,
}

impl CanvasTexture {
    const FORMAT: TextureFormat = TextureFormat::Rgba8UnormSrgb;

    fn new(gpu: &Gpu, size: Extent3d) -> Self {
        Self {
            inner: gpu.device().create_texture(&TextureDescriptor {
                label: Some("canvas"),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: TextureDimension::D2,
                format: Self::FORMAT,
                usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
                view_formats: &[],
            }),
            size,
        }
    }

    fn write(&self, gpu: &Gpu, data: &[u8]) {
        assert_eq!(
            (self.size.width * self.size.height * 4) as usize,
            data.len(),
            "canvas data does not match texture size"
        );

        gpu.queue().write_texture(
            ImageCopyTexture {
                texture: &self.inner,
                mip_level: 0,
                origin: Origin3d::default(),
                aspect: TextureAspect::All,
            },
            data,
            ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(self.size.width * 4),
                rows_per_image: None,
            },
            self.size,
        );
    }
}

fn extent(res: Resolution) -> Extent3d {
    Extent3d {
        width: res.width(),
        height: res.height(),
        depth_or_array_layers: 1,
    }
}

pub struct Renderer {
    gpu: Rc<Gpu>,
    surface: Surface,
    pipeline: RenderPipeline,

    texture: CanvasTexture,
    bind_group_layout: BindGroupLayout,
    bind_group: BindGroup,

    /// Surface must be destroyed before `Window`.
    window: Window,
}

impl Renderer {
    pub fn new(window: Window, gpu: Rc<Gpu>, canvas_res: Resolution) -> anyhow::Result<Self> {
        // SAFETY: the window is stored in the `Renderer` and outlives the surface.
        let surface = unsafe { gpu.instance().create_surface(&*window.win)? };
        let surface_format = *surface
            .get_capabilities(gpu.adapter())
            .formats
            .first()
            .ok_or_else(|| anyhow::anyhow!("graphics adapter cannot render to window surface"))?;

        let shader = gpu.device().create_shader_module(ShaderModuleDescriptor {
            label: Some("canvas shader"),
            source: ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let bind_group_layout = gpu
            .device()
            .create_bind_group_layout(&BindGroupLayoutDescriptor {
                label: None,
                entries: &[
                    BindGroupLayoutEntry {
                        binding: 0,
                        visibility: ShaderStages::FRAGMENT,
                        ty: BindingType::Texture {
                            sample_type: TextureSampleType::Float { filterable: false },
                            view_dimension: TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    BindGroupLayoutEntry {
                        binding: 1,
                        visibility: ShaderStages::FRAGMENT,
                        ty: BindingType::Sampler(SamplerBindingType::NonFiltering),
                        count: None,
                    },
                ],
            });

        let pipeline = gpu
            .device()
            .create_render_pipeline(&RenderPipelineDescriptor {
                label: Some("canvas"),
                layout: Some(
                    &gpu.device()
                        .create_pipeline_layout(&PipelineLayoutDescriptor {
                            label: None,
                            bind_group_layouts: &[&bind_group_layout],
                            push_constant_ranges: &[],
                        }),
                ),
                vertex: VertexState {
                    module: &shader,
                    entry_point: "vert",
                    buffers: &[],
                },
                fragment: Some(FragmentState {
                    module: &shader,
                    entry_point: "frag",
                    targets: &[Some(ColorTargetState {
                        format: surface_format,
                        write_mask: ColorWrites::ALL,
                        blend: None,
                    })],
                }),
                primitive: PrimitiveState::default(),
                depth_stencil: None,
                multisample: Default::default(),
                multiview: None,
            });

        let texture = CanvasTexture::new(&gpu, extent(canvas_res));
        let bind_group = create_bind_group(&gpu, &bind_group_layout, &texture);

        let this = Self {
            gpu,
            surface,
            pipeline,
            texture,
            bind_group_layout,
            bind_group,
            window,
        };
        this.configure_surface(surface_format);
        Ok(this)
    }

    /// Uploads new canvas contents, given as RGBA8 data.
    pub fn update_texture(&mut self, res: Resolution, data: &[u8]) {
        let size = extent(res);
        if size != self.texture.size {
            log::debug!(
                "reallocating canvas texture ({}x{} -> {res})",
                self.texture.size.width,
                self.texture.size.height,
            );
            self.texture = CanvasTexture::new(&self.gpu, size);
            self.bind_group = create_bind_group(&self.gpu, &self.bind_group_layout, &self.texture);
        }
        self.texture.write(&self.gpu, data);
    }

    pub fn redraw(&mut self) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(err @ (SurfaceError::Outdated | SurfaceError::Lost)) => {
                log::debug!("surface error: {}", err);
                self.recreate_swapchain();
                match self.surface.get_current_texture() {
                    Ok(frame) => frame,
                    Err(err) => {
                        log::error!("failed to acquire frame after recreating swapchain: {err}");
                        return;
                    }
                }
            }
            Err(err) => {
                log::warn!("failed to acquire frame: {err}");
                return;
            }
        };
        let view = frame.texture.create_view(&TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&CommandEncoderDescriptor { label: None });
        {
            let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(BACKGROUND),
                        store: true,
                    },
                })],
                ..Default::default()
            });

            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        self.gpu.queue().submit([encoder.finish()]);
        frame.present();
    }

    pub fn window(&self) -> &winit::window::Window {
        &self.window.win
    }

    fn recreate_swapchain(&self) {
        match self
            .surface
            .get_capabilities(self.gpu.adapter())
            .formats
            .first()
        {
            Some(&format) => self.configure_surface(format),
            None => log::error!("graphics adapter cannot render to window surface"),
        }
    }

    fn configure_surface(&self, format: TextureFormat) {
        let res = self.window.win.inner_size();
        log::debug!(
            "creating target surface at {}x{} (format: {:?})",
            res.width,
            res.height,
            format,
        );
        if res.width != self.window.resolution.width()
            || res.height != self.window.resolution.height()
        {
            // The window is not resizable, but HiDPI scaling or the window manager may still
            // change its size.
            log::warn!(
                "window dimensions {}x{} do not match configured output resolution {}",
                res.width,
                res.height,
                self.window.resolution,
            );
        }

        self.surface.configure(
            self.gpu.device(),
            &SurfaceConfiguration {
                usage: TextureUsages::RENDER_ATTACHMENT,
                format,
                width: self.window.resolution.width(),
                height: self.window.resolution.height(),
                present_mode: PresentMode::Fifo,
                alpha_mode: CompositeAlphaMode::Auto,
                view_formats: Vec::new(),
            },
        );
    }
}

fn create_bind_group(gpu: &Gpu, layout: &BindGroupLayout, texture: &CanvasTexture) -> BindGroup {
    let sampler = gpu.device().create_sampler(&SamplerDescriptor::default());
    gpu.device().create_bind_group(&BindGroupDescriptor {
        label: Some("canvas"),
        layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(
                    &texture.inner.create_view(&Default::default()),
                ),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(&sampler),
            },
        ],
    })
}

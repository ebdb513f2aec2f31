mod hud;
mod keys;

use anyhow::{Context as _, Result};
use clap::Parser;
use egui::Context as EguiContext;
use snakeview_input::{Action, Key, KeyBindings, Movement, MovementState};
use snakeview_render_wgpu::{FlyCamera, WgpuRenderer};
use snakeview_scene::BlockId;
use snakeview_snapshot::FrameStore;
use snakeview_viewer::{Viewer, ViewerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "snakeview", about = "Fly through snake simulation snapshots")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of <index>.json frames (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// First frame to show (overrides the config file)
    #[arg(long)]
    frame: Option<usize>,
}

impl Cli {
    fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(frame) = self.frame {
            config.start_frame = frame;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Everything that is not GPU or window plumbing.
struct AppState {
    viewer: Viewer,
    bindings: KeyBindings,
    movement: MovementState,
    camera: FlyCamera,
    show_hud: bool,
    mouse_captured: bool,
    last_frame: Instant,
}

impl AppState {
    fn new(config: ViewerConfig) -> Self {
        let camera = FlyCamera::with_settings(
            config.fov_degrees,
            config.move_speed,
            config.mouse_sensitivity,
        );
        let store = FrameStore::open(&config.data_dir);
        Self {
            viewer: Viewer::new(store, config),
            bindings: KeyBindings::default(),
            movement: MovementState::new(),
            camera,
            show_hud: true,
            mouse_captured: false,
            last_frame: Instant::now(),
        }
    }

    fn update(&mut self, dt: f32) {
        for m in Movement::ALL {
            if !self.movement.is_held(m) {
                continue;
            }
            match m {
                Movement::Forward => self.camera.move_forward(dt),
                Movement::Backward => self.camera.move_backward(dt),
                Movement::Left => self.camera.move_left(dt),
                Movement::Right => self.camera.move_right(dt),
                Movement::Up => self.camera.move_up(dt),
                Movement::Down => self.camera.move_down(dt),
            }
        }
    }

    fn handle_key(&mut self, key: Key, pressed: bool) {
        if let Some(m) = self.bindings.movement_for(key) {
            self.movement.set(m, pressed);
            return;
        }
        if pressed {
            if let Some(action) = self.bindings.action_for(key) {
                self.dispatch(action);
            }
        }
    }

    fn handle_click(&mut self, button: snakeview_input::MouseButton) {
        for action in self.bindings.mouse_actions(button) {
            self.dispatch(*action);
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::CaptureMouse => self.mouse_captured = true,
            Action::ReleaseMouse => self.mouse_captured = false,
            Action::ToggleHud => self.show_hud = !self.show_hud,
            // Editing only happens while aiming with a captured mouse.
            Action::RemoveBlock | Action::PlaceBlock if !self.mouse_captured => {}
            other => {
                self.viewer
                    .apply(other, self.camera.position, self.camera.forward());
            }
        }
    }

    fn target(&self) -> Option<BlockId> {
        if !self.mouse_captured {
            return None;
        }
        self.viewer
            .target(self.camera.position, self.camera.forward())
    }

    fn lose_focus(&mut self) {
        self.movement.clear();
        self.mouse_captured = false;
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if self.show_hud {
            hud::draw_panel(
                ctx,
                &mut self.viewer,
                self.camera.position,
                self.mouse_captured,
            );
        }
        hud::draw_crosshair(ctx);
    }
}

/// Window, surface and renderers, created on `resumed`.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    cursor_grabbed: bool,
}

impl Gpu {
    fn new(
        event_loop: &ActiveEventLoop,
        egui_ctx: &EguiContext,
        size: PhysicalSize<u32>,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("snakeview")
            .with_inner_size(size);
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("snakeview_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(&device, surface_format, config.width, config.height);

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
            cursor_grabbed: false,
        })
    }

    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    /// Bring the OS cursor in line with the capture flag.
    fn sync_cursor(&mut self, captured: bool) {
        if self.cursor_grabbed == captured {
            return;
        }
        if captured {
            let grab = self
                .window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grab {
                tracing::warn!("cursor grab unavailable: {e}");
            }
        } else if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            tracing::warn!("cursor release failed: {e}");
        }
        self.window.set_cursor_visible(!captured);
        self.cursor_grabbed = captured;
        tracing::debug!(captured, "mouse capture changed");
    }

    fn draw(&mut self, state: &mut AppState, egui_ctx: &EguiContext) {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let highlighted = state.target();
        self.renderer.render(
            &self.device,
            &self.queue,
            &view,
            &state.camera,
            state.viewer.scene(),
            highlighted,
        );

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ctx| {
            state.draw_ui(ctx);
        });
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
    }
}

struct App {
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            state: AppState::new(config),
            gpu: None,
            egui_ctx: EguiContext::default(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        let cfg = self.state.viewer.config();
        let size = PhysicalSize::new(cfg.window_width, cfg.window_height);
        match Gpu::new(event_loop, &self.egui_ctx, size) {
            Ok(gpu) => {
                self.state.camera.aspect = gpu.aspect();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("failed to start renderer: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        // While the mouse is captured, every click and key belongs to the viewer.
        if !self.state.mouse_captured {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                gpu.resize(new_size);
                self.state.camera.aspect = gpu.aspect();
            }
            WindowEvent::Focused(false) => {
                self.state.lose_focus();
                gpu.sync_cursor(false);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let Some(key) = keys::map_key(code) else {
                    return;
                };
                let pressed = key_state == ElementState::Pressed;
                // Auto-repeat would step through frames while a key is held.
                if pressed && repeat && self.state.bindings.action_for(key).is_some() {
                    return;
                }
                self.state.handle_key(key, pressed);
                gpu.sync_cursor(self.state.mouse_captured);
            }
            WindowEvent::MouseInput {
                button,
                state: ElementState::Pressed,
                ..
            } => {
                if let Some(button) = keys::map_button(button) {
                    self.state.handle_click(button);
                    gpu.sync_cursor(self.state.mouse_captured);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = (now - self.state.last_frame).as_secs_f32().min(0.1);
                self.state.last_frame = now;
                self.state.update(dt);

                gpu.draw(&mut self.state, &self.egui_ctx);
                gpu.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.mouse_captured {
                self.state.camera.rotate(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.viewer_config()?;
    tracing::info!(
        "snakeview starting on {} at frame {}",
        config.data_dir.display(),
        config.start_frame
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}

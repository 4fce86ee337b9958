//! Native window and event loop
//!
//! Owns the window, the GPU state and the frame clock. Each due frame runs one
//! `sim::tick` and draws either the arena or the game over screen.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::consts::*;
use crate::platform::{FrameClock, InputState};
use crate::renderer::{RenderState, scene};
use crate::sim::{GameEvent, GameState, tick};

pub const WINDOW_TITLE: &str = "Tank Battle";

/// Application state driven by winit
pub struct App {
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    state: GameState,
    input: InputState,
    clock: FrameClock,
    /// When the game over screen first went up
    game_over_since: Option<Instant>,
    /// Startup failure inside the event loop, reported after it returns
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(state: GameState) -> Self {
        Self {
            window: None,
            render_state: None,
            state,
            input: InputState::new(),
            clock: FrameClock::new(FRAME_INTERVAL, Instant::now()),
            game_over_since: None,
            error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(ARENA_WIDTH as f64, ARENA_HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("failed to find a GPU adapter")?;

        let info = adapter.get_info();
        log::info!("Using adapter: {} ({:?})", info.name, info.backend);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
            (self.state.arena.width, self.state.arena.height),
        ))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.clock = FrameClock::new(FRAME_INTERVAL, Instant::now());
        Ok(())
    }

    /// One simulation step plus draw
    fn frame(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        let input = self.input.take_tick_input();
        tick(&mut self.state, &input);
        self.log_events();

        if self.state.is_over() {
            let since = *self.game_over_since.get_or_insert(now);
            if now.duration_since(since) >= GAME_OVER_HOLD {
                log::info!("Exiting after game over");
                event_loop.exit();
                return;
            }
        }

        let vertices = if self.state.is_over() {
            scene::build_game_over(&self.state)
        } else {
            scene::build_frame(&self.state)
        };

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    /// Shots are only interesting at debug level; kills and game over are
    /// already logged by the simulation.
    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::PlayerFired => log::debug!("Frame {}: player fired", self.state.frame),
                GameEvent::EnemyFired => log::debug!("Frame {}: enemy fired", self.state.frame),
                GameEvent::EnemyDestroyed { .. } | GameEvent::PlayerDestroyed => {}
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input
                        .handle_key(code, event.state == ElementState::Pressed, event.repeat);
                }
                if self.input.quit_requested() {
                    log::info!("Escape pressed, closing");
                    event_loop.exit();
                }
            }
            WindowEvent::Focused(false) => self.input.clear_held(),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_state.is_none() {
            return;
        }
        let now = Instant::now();
        if self.clock.poll(now) {
            self.frame(event_loop, now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

/// Open the window and run until it closes or the game over hold expires
pub fn run(state: GameState) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(state);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;

    if let Some(e) = app.error {
        return Err(e);
    }
    log::info!("Final score: {}", app.state.score);
    Ok(())
}

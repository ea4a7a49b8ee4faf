//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the simulation's tick loop.
//
// Architecture:
// ```text
//  Winit Event Loop (sole thread)
//   ├─ resumed            → create window + presenter (idempotent),
//   │                       one-time Simulation::create
//   ├─ KeyboardInput      → HostKeyState (level state)
//   ├─ RedrawRequested    → Simulation::tick(&mut Host)
//   │                        ├─ Host::poll_key   (edge events, drained)
//   │                        ├─ Host::present    (convert + blit)
//   │                        └─ Host::sleep_ms / now_ms / set_title
//   │                       then request next redraw (continuous loop)
//   └─ CloseRequested     → exit event loop
// ```
//
// Key Design Decisions:
// - **RedrawRequested = tick boundary**: one simulation step per redraw,
//   re-armed immediately, so the loop free-runs and the simulation paces
//   itself via `Host::sleep_ms`
// - **Level in, edges out**: winit delivers transitions; the key state
//   stores levels; the translator re-derives edges against its own table
//   so the simulation sees exactly one event per logical transition
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so everything here runs on the thread that called
//   `Shell::run()`, which is also why no state needs synchronization
//
//=========================================================================

//=== Submodules ==========================================================

mod clock;
mod host;
mod key_state;
mod presenter;
mod translator;

pub use host::Host;

//=== External Crates =====================================================

use std::sync::Arc;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::WindowAttributes,
};

//=== Internal Imports ====================================================

use crate::simulation::Simulation;
use presenter::FramePresenter;

//=== Platform ============================================================

/// Window manager and tick driver for one simulation.
///
/// Owns the simulation and its [`Host`] context, and implements
/// [`ApplicationHandler`] so the winit event loop can drive both.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(simulation, title)`
/// 2. **Init**: `resumed()` creates window and display surface, then runs
///    `Simulation::create` exactly once
/// 3. **Steady state**: every `RedrawRequested` runs one tick and re-arms
/// 4. **Shutdown**: window close request exits the event loop
///
/// Init is idempotent: a second `resumed` (mobile suspend/resume cycle)
/// finds the window already attached and does nothing.
pub(crate) struct Platform<S: Simulation> {
    simulation: S,
    host: Host,
    title: String,

    /// Guards the one-time `Simulation::create` call.
    created: bool,
}

impl<S: Simulation> Platform<S> {
    pub(crate) fn new(simulation: S, title: String) -> Self {
        info!(target: "shell", "Platform subsystem initialized");
        Self {
            simulation,
            host: Host::new(),
            title,
            created: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &Host {
        &self.host
    }
}

//=== Winit Integration ===================================================

impl<S: Simulation> ApplicationHandler for Platform<S> {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window and display surface if they do not exist yet,
    /// then runs the simulation's one-time setup.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_attached() {
            debug!(target: "shell", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(S::WIDTH as f64, S::HEIGHT as f64))
            .with_resizable(true);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!(target: "shell", "Window creation failed: {}", e);
                event_loop.exit();
                return;
            }
        };

        info!(
            target: "shell",
            "Window created: {}x{} @ {}x DPI (simulation {}x{})",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor(),
            S::WIDTH,
            S::HEIGHT
        );

        let presenter = match FramePresenter::new(window.clone(), S::WIDTH, S::HEIGHT) {
            Ok(presenter) => presenter,
            Err(e) => {
                error!(target: "shell", "Display surface creation failed: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.host.attach(window, presenter);

        if !self.created {
            debug!(target: "shell", "Running one-time simulation setup");
            self.simulation.create(&mut self.host);
            self.created = true;
        }

        self.host.request_redraw();
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "shell", "Window close requested, stopping");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                trace!(
                    target: "shell::input",
                    "Key {:?} {:?}",
                    key_event.physical_key,
                    key_event.state
                );
                self.host.apply_key_event(key_event);
            }

            WindowEvent::RedrawRequested => {
                // Tick boundary: one simulation step, then re-arm.
                self.simulation.tick(&mut self.host);
                self.host.request_redraw();
            }

            WindowEvent::Resized(size) => {
                // Presenter resizes its surface on every present.
                trace!(target: "shell", "Window resized to {}x{}", size.width, size.height);
            }

            _ => {
                // Ignore: Focused, Moved, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Simulation;

    struct NullSim;

    impl Simulation for NullSim {
        const WIDTH: usize = 4;
        const HEIGHT: usize = 3;

        fn create(&mut self, _host: &mut Host) {}
        fn tick(&mut self, _host: &mut Host) {}
    }

    #[test]
    fn platform_creation_is_lazy() {
        let platform = Platform::new(NullSim, "test".to_string());
        assert!(
            !platform.host().is_attached(),
            "Window should be created lazily in resumed()"
        );
    }

    #[test]
    fn host_callbacks_are_safe_before_window_exists() {
        let mut platform = Platform::new(NullSim, "test".to_string());

        // Mirrors a simulation running against an unattached host.
        platform.host.present(Some(&[0u32; 12]));
        platform.host.set_title("early");
        assert!(platform.host.poll_key().is_none());
    }
}

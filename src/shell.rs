//=========================================================================
// Lumen Shell
//
// Entry point and driver loop.
//
// Architecture:
// ```text
//     ShellBuilder  ──build()──>  Shell  ──run(sim)──>  [Event Loop]
//         │                                                │
//         └─ with_title()                                  ├─ Platform
//                                                          └─ blocks until
//                                                             window close
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};
use winit::event_loop::{ControlFlow, EventLoop};

//=== Internal Dependencies ===============================================

use crate::platform::Platform;
use crate::simulation::Simulation;

//=== ShellError ==========================================================

/// Shell startup and runtime errors.
///
/// These are typically fatal: if the event loop cannot be created, the
/// shell cannot run at all. Failures inside a tick never surface here;
/// by contract they are either silent no-ops or logged frame drops.
#[derive(Debug)]
pub enum ShellError {
    /// Failed to create the event loop (rare, indicates an OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}

//=== ShellBuilder ========================================================

/// Builder for configuring and constructing a [`Shell`].
///
/// # Default Values
///
/// - **Title**: `"Lumen Shell"`
///
/// # Examples
///
/// ```
/// use lumen_shell::ShellBuilder;
///
/// let shell = ShellBuilder::new()
///     .with_title("my simulation")
///     .build();
/// ```
pub struct ShellBuilder {
    title: String,
}

impl ShellBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Lumen Shell".to_string(),
        }
    }

    /// Sets the initial window title.
    ///
    /// The simulation can change it later via
    /// [`Host::set_title`](crate::Host::set_title).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the shell instance.
    pub fn build(self) -> Shell {
        debug!(target: "shell", "Building shell (title: {:?})", self.title);
        Shell { title: self.title }
    }
}

impl Default for ShellBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Shell ===============================================================

/// The shell runtime: one window, one simulation, one thread.
///
/// Create via [`ShellBuilder`], then hand it a [`Simulation`] with
/// [`Shell::run`]. The shell drives the simulation's tick forever; the
/// simulation paces itself by sleeping inside its tick.
pub struct Shell {
    title: String,
}

impl Shell {
    //--- Execution --------------------------------------------------------

    /// Runs `simulation` inside the event loop (blocks until exit).
    ///
    /// The loop has no tick-count or time-based exit condition: it runs
    /// until the user closes the window or the process is interrupted.
    /// Window and display-surface setup happen inside the loop, on the
    /// first `resumed` callback, so a returned `Ok(())` means the loop ran
    /// and exited cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if the event loop cannot be created or
    /// aborts abnormally.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run<S: Simulation>(self, simulation: S) -> Result<(), ShellError> {
        info!(
            target: "shell",
            "Starting shell: {}x{} simulation",
            S::WIDTH,
            S::HEIGHT
        );

        let event_loop = EventLoop::new().map_err(ShellError::EventLoopCreation)?;

        // Free-running loop: the simulation paces itself via sleep_ms.
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut platform = Platform::new(simulation, self.title);
        event_loop
            .run_app(&mut platform)
            .map_err(ShellError::EventLoopExecution)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Host Context
//
// The one adapter object the simulation talks to. Owns every piece of
// shell-side mutable state: the window handle, the frame presenter, the
// host key levels, the key translator, and the tick clock.
//
// Before the window exists (the event loop has not reached `resumed` yet)
// the display-facing calls are silent no-ops by contract: `present` and
// `set_title` do nothing, `poll_key` reports no events because no host
// input has arrived. Nothing here returns an error to the simulation.
//
// Single-threaded by construction: the host lives on the event-loop
// thread and is handed to the simulation as `&mut` during each tick, so
// none of this state needs synchronization.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::trace;
use winit::event::KeyEvent as HostKeyEvent;
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::simulation::KeyEvent;

use super::clock::TickClock;
use super::key_state::HostKeyState;
use super::presenter::FramePresenter;
use super::translator::KeyTranslator;

//=== Host ================================================================

/// The shell's callback surface, passed to the simulation each tick.
pub struct Host {
    window: Option<Arc<Window>>,
    presenter: Option<FramePresenter>,
    keys: HostKeyState,
    translator: KeyTranslator,
    clock: TickClock,
}

impl Host {
    pub(crate) fn new() -> Self {
        Self {
            window: None,
            presenter: None,
            keys: HostKeyState::new(),
            translator: KeyTranslator::new(),
            clock: TickClock::new(),
        }
    }

    //--- Simulation-Facing API --------------------------------------------

    /// Displays `frame`, stretched to fill the current window.
    ///
    /// Silent no-op before the window exists or when `frame` is `None`
    /// (the simulation has nothing rendered yet). The frame is only read,
    /// never mutated or retained.
    pub fn present(&mut self, frame: Option<&[u32]>) {
        let Some(presenter) = self.presenter.as_mut() else {
            trace!(target: "shell::present", "Present before init, skipping");
            return;
        };
        presenter.present(frame);
    }

    /// Reports the next key transition since the last call, if any.
    ///
    /// At most one event per call. Call repeatedly until `None` to drain
    /// every transition accumulated since the previous tick.
    pub fn poll_key(&mut self) -> Option<KeyEvent> {
        self.translator.poll(&self.keys)
    }

    /// Milliseconds since shell startup, as a wrapping 32-bit counter.
    pub fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    /// Blocks the tick loop for approximately `ms` milliseconds.
    pub fn sleep_ms(&self, ms: u32) {
        self.clock.sleep_ms(ms);
    }

    /// Sets the window title. Silent no-op before the window exists.
    pub fn set_title(&mut self, title: &str) {
        let Some(window) = self.window.as_ref() else {
            trace!(target: "shell", "Title change before init, skipping");
            return;
        };
        window.set_title(title);
    }

    //--- Platform-Facing API ----------------------------------------------

    /// Installs the window and presenter once `resumed` has created them.
    pub(crate) fn attach(&mut self, window: Arc<Window>, presenter: FramePresenter) {
        self.window = Some(window);
        self.presenter = Some(presenter);
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.window.is_some()
    }

    /// Feeds one host keyboard event into the level state.
    pub(crate) fn apply_key_event(&mut self, event: &HostKeyEvent) {
        self.keys.apply(event);
    }

    /// Schedules the next tick. No-op before the window exists.
    pub(crate) fn request_redraw(&self) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Host Key State
//
// Level state of the host keyboard, maintained from winit KeyboardInput
// events. This is the shell's stand-in for an immediate-mode "is this key
// down right now" host query: the event loop feeds transitions in, and
// the translator reads levels out once per poll.
//
// Key repeat events from the OS are idempotent here (a held key inserts
// into the set once), so repeats never look like fresh transitions.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode as HostKey, PhysicalKey};

//=== HostKeyState ========================================================

/// Set of physical host keys currently held down.
pub(crate) struct HostKeyState {
    down: HashSet<HostKey>,
}

impl HostKeyState {
    pub(crate) fn new() -> Self {
        Self {
            down: HashSet::new(),
        }
    }

    //--- Event Intake -----------------------------------------------------

    /// Applies one winit keyboard event to the level state.
    ///
    /// Unidentified physical keys (exotic hardware, dead keys) are ignored.
    pub(crate) fn apply(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                self.down.insert(code);
            }
            ElementState::Released => {
                self.down.remove(&code);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub(crate) fn is_down(&self, key: HostKey) -> bool {
        self.down.contains(&key)
    }

    #[cfg(test)]
    pub(crate) fn press(&mut self, key: HostKey) {
        self.down.insert(key);
    }

    #[cfg(test)]
    pub(crate) fn release(&mut self, key: HostKey) {
        self.down.remove(&key);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

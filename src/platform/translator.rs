//=========================================================================
// Key Translator
//
// Synthesizes the edge-triggered key events the simulation's input queue
// expects from the level-triggered host key state.
//
// Architecture:
//   HostKeyState (levels) → poll() diff against table → KeyEvent (edges)
//
// Each table entry remembers the level it last reported. A poll scans the
// table in fixed order and reports the *first* entry whose current level
// disagrees with the remembered one, updating the memory as it reports.
// At most one event per call; the simulation drains by polling until None,
// so several keys changing within one tick surface as separate events in
// table order rather than temporal order. No transition is ever lost as
// long as the caller drains fully.
//
// Logical entries may own several physical keys (left/right shift, ctrl,
// alt). An entry's level is "any variant down", so releasing one of two
// held variants is not a transition and emits nothing.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::keys::MAPPING;
use crate::simulation::KeyEvent;

use super::key_state::HostKeyState;

//=== KeyTranslator =======================================================

/// Edge-event synthesizer over the fixed engine key mapping table.
pub(crate) struct KeyTranslator {
    entries: Vec<TrackedKey>,
}

/// One logical engine key with its remembered level.
struct TrackedKey {
    engine_code: u8,
    host_keys: &'static [winit::keyboard::KeyCode],
    last_observed_down: bool,
}

impl KeyTranslator {
    /// Builds the tracking table from the canonical mapping, all keys up.
    pub(crate) fn new() -> Self {
        let entries = MAPPING
            .iter()
            .map(|&(engine_code, host_keys)| TrackedKey {
                engine_code,
                host_keys,
                last_observed_down: false,
            })
            .collect();

        Self { entries }
    }

    //--- Polling ----------------------------------------------------------

    /// Reports the next key transition since the last poll, if any.
    ///
    /// Returns at most one event; call repeatedly to drain all transitions
    /// accumulated since the previous drain. Untracked host keys never
    /// produce events.
    pub(crate) fn poll(&mut self, keys: &HostKeyState) -> Option<KeyEvent> {
        for entry in &mut self.entries {
            let down = entry.host_keys.iter().any(|&key| keys.is_down(key));
            if down != entry.last_observed_down {
                entry.last_observed_down = down;
                return Some(KeyEvent {
                    pressed: down,
                    code: entry.engine_code,
                });
            }
        }
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use winit::keyboard::KeyCode as HostKey;

    #[test]
    fn no_host_change_yields_no_event() {
        let mut translator = KeyTranslator::new();
        let keys = HostKeyState::new();

        assert!(translator.poll(&keys).is_none());
        assert!(translator.poll(&keys).is_none());
    }

    #[test]
    fn single_press_yields_exactly_one_event() {
        let mut translator = KeyTranslator::new();
        let mut keys = HostKeyState::new();

        keys.press(HostKey::KeyA);

        let event = translator.poll(&keys).expect("press should be reported");
        assert!(event.pressed);
        assert_eq!(event.code, b'a');

        // Drained: no further events until the host state changes again.
        assert!(translator.poll(&keys).is_none());
    }

    #[test]
    fn release_yields_exactly_one_release_event() {
        let mut translator = KeyTranslator::new();
        let mut keys = HostKeyState::new();

        keys.press(HostKey::KeyA);
        translator.poll(&keys);

        keys.release(HostKey::KeyA);
        let event = translator.poll(&keys).expect("release should be reported");
        assert!(!event.pressed);
        assert_eq!(event.code, b'a');
        assert!(translator.poll(&keys).is_none());
    }

    #[test]
    fn simultaneous_changes_drain_in_table_order() {
        let mut translator = KeyTranslator::new();
        let mut keys = HostKeyState::new();

        // Letter first in host order, arrow first in table order.
        keys.press(HostKey::KeyZ);
        keys.press(HostKey::ArrowLeft);

        let first = translator.poll(&keys).unwrap();
        assert_eq!(first.code, keys::KEY_LEFT, "arrows precede letters");

        let second = translator.poll(&keys).unwrap();
        assert_eq!(second.code, b'z');

        assert!(translator.poll(&keys).is_none());
    }

    #[test]
    fn held_key_survives_many_polls_without_events() {
        let mut translator = KeyTranslator::new();
        let mut keys = HostKeyState::new();

        keys.press(HostKey::Space);
        translator.poll(&keys);

        for _ in 0..100 {
            assert!(translator.poll(&keys).is_none());
        }
    }

    #[test]
    fn dual_shift_release_is_not_a_full_release() {
        let mut translator = KeyTranslator::new();
        let mut keys = HostKeyState::new();

        keys.press(HostKey::ShiftLeft);
        let event = translator.poll(&keys).unwrap();
        assert!(event.pressed);
        assert_eq!(event.code, keys::KEY_SHIFT);

        // Second variant going down is not a new logical transition.
        keys.press(HostKey::ShiftRight);
        assert!(translator.poll(&keys).is_none());

        // One variant still held: no spurious release.
        keys.release(HostKey::ShiftLeft);
        assert!(translator.poll(&keys).is_none());

        // Last variant up: now the logical key releases.
        keys.release(HostKey::ShiftRight);
        let event = translator.poll(&keys).unwrap();
        assert!(!event.pressed);
        assert_eq!(event.code, keys::KEY_SHIFT);
    }

    #[test]
    fn untracked_host_keys_never_produce_events() {
        let mut translator = KeyTranslator::new();
        let mut keys = HostKeyState::new();

        keys.press(HostKey::F13);
        keys.press(HostKey::NumpadAdd);

        assert!(translator.poll(&keys).is_none());
    }

    #[test]
    fn arrow_keys_map_to_engine_arrow_codes() {
        let mut translator = KeyTranslator::new();
        let mut keys = HostKeyState::new();

        for (host, engine) in [
            (HostKey::ArrowLeft, keys::KEY_LEFT),
            (HostKey::ArrowUp, keys::KEY_UP),
            (HostKey::ArrowRight, keys::KEY_RIGHT),
            (HostKey::ArrowDown, keys::KEY_DOWN),
        ] {
            keys.press(host);
            let event = translator.poll(&keys).unwrap();
            assert_eq!(event.code, engine);
            keys.release(host);
            translator.poll(&keys);
        }
    }
}

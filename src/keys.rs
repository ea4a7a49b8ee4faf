//=========================================================================
// Engine Key Codes
//
// The fixed key code space the simulation's input queue consumes. Letters
// and digits are plain lowercase ASCII; everything else uses the constants
// below. This is the single canonical table: host-side physical keys are
// mapped onto it by the translator and nothing else.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::keyboard::KeyCode as HostKey;

//=== Engine Key Constants ================================================

pub const KEY_TAB: u8 = 9;
pub const KEY_ENTER: u8 = 13;
pub const KEY_ESCAPE: u8 = 27;
pub const KEY_SPACE: u8 = b' ';
pub const KEY_BACKSPACE: u8 = 0x7F;

pub const KEY_LEFT: u8 = 0xAC;
pub const KEY_UP: u8 = 0xAD;
pub const KEY_RIGHT: u8 = 0xAE;
pub const KEY_DOWN: u8 = 0xAF;

pub const KEY_CTRL: u8 = 0x9D;
pub const KEY_SHIFT: u8 = 0xB6;
pub const KEY_ALT: u8 = 0xB8;

//=== Mapping Table =======================================================
//
// One entry per *logical* engine key. Entries with two physical variants
// (left/right shift, ctrl, alt) share a single entry, so the translator
// sees them as one key that is down while either variant is held.
//
// Entry order is the translator's scan order and therefore the drain order
// when several keys change state within one tick: movement and action keys
// first, then the printable block.
//

pub(crate) const MAPPING: &[(u8, &[HostKey])] = &[
    //--- Arrows -----------------------------------------------------------
    (KEY_LEFT, &[HostKey::ArrowLeft]),
    (KEY_UP, &[HostKey::ArrowUp]),
    (KEY_RIGHT, &[HostKey::ArrowRight]),
    (KEY_DOWN, &[HostKey::ArrowDown]),
    //--- Modifiers (two physical variants each) ---------------------------
    (KEY_CTRL, &[HostKey::ControlLeft, HostKey::ControlRight]),
    (KEY_SHIFT, &[HostKey::ShiftLeft, HostKey::ShiftRight]),
    (KEY_ALT, &[HostKey::AltLeft, HostKey::AltRight]),
    //--- Specials ---------------------------------------------------------
    (KEY_SPACE, &[HostKey::Space]),
    (KEY_ENTER, &[HostKey::Enter]),
    (KEY_ESCAPE, &[HostKey::Escape]),
    (KEY_TAB, &[HostKey::Tab]),
    (KEY_BACKSPACE, &[HostKey::Backspace]),
    //--- Letters (lowercase ASCII) ----------------------------------------
    (b'a', &[HostKey::KeyA]),
    (b'b', &[HostKey::KeyB]),
    (b'c', &[HostKey::KeyC]),
    (b'd', &[HostKey::KeyD]),
    (b'e', &[HostKey::KeyE]),
    (b'f', &[HostKey::KeyF]),
    (b'g', &[HostKey::KeyG]),
    (b'h', &[HostKey::KeyH]),
    (b'i', &[HostKey::KeyI]),
    (b'j', &[HostKey::KeyJ]),
    (b'k', &[HostKey::KeyK]),
    (b'l', &[HostKey::KeyL]),
    (b'm', &[HostKey::KeyM]),
    (b'n', &[HostKey::KeyN]),
    (b'o', &[HostKey::KeyO]),
    (b'p', &[HostKey::KeyP]),
    (b'q', &[HostKey::KeyQ]),
    (b'r', &[HostKey::KeyR]),
    (b's', &[HostKey::KeyS]),
    (b't', &[HostKey::KeyT]),
    (b'u', &[HostKey::KeyU]),
    (b'v', &[HostKey::KeyV]),
    (b'w', &[HostKey::KeyW]),
    (b'x', &[HostKey::KeyX]),
    (b'y', &[HostKey::KeyY]),
    (b'z', &[HostKey::KeyZ]),
    //--- Digits (ASCII) ---------------------------------------------------
    (b'0', &[HostKey::Digit0]),
    (b'1', &[HostKey::Digit1]),
    (b'2', &[HostKey::Digit2]),
    (b'3', &[HostKey::Digit3]),
    (b'4', &[HostKey::Digit4]),
    (b'5', &[HostKey::Digit5]),
    (b'6', &[HostKey::Digit6]),
    (b'7', &[HostKey::Digit7]),
    (b'8', &[HostKey::Digit8]),
    (b'9', &[HostKey::Digit9]),
];

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn engine_codes_are_unique() {
        let mut seen = HashSet::new();
        for (code, _) in MAPPING {
            assert!(seen.insert(*code), "duplicate engine code 0x{:02X}", code);
        }
    }

    #[test]
    fn host_keys_appear_in_at_most_one_entry() {
        let mut seen = HashSet::new();
        for (_, host_keys) in MAPPING {
            for key in *host_keys {
                assert!(seen.insert(*key), "host key {:?} mapped twice", key);
            }
        }
    }

    #[test]
    fn every_entry_has_a_physical_key() {
        for (code, host_keys) in MAPPING {
            assert!(!host_keys.is_empty(), "entry 0x{:02X} has no host keys", code);
        }
    }

    #[test]
    fn special_codes_match_engine_convention() {
        assert_eq!(KEY_ENTER, 13);
        assert_eq!(KEY_ESCAPE, 27);
        assert_eq!(KEY_BACKSPACE, 0x7F);
        assert_eq!(
            [KEY_LEFT, KEY_UP, KEY_RIGHT, KEY_DOWN],
            [0xAC, 0xAD, 0xAE, 0xAF]
        );
    }

    #[test]
    fn letters_map_to_lowercase_ascii() {
        let entry = MAPPING
            .iter()
            .find(|(_, keys)| keys.contains(&HostKey::KeyA))
            .unwrap();
        assert_eq!(entry.0, b'a');
    }
}

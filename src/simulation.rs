//=========================================================================
// Simulation Contract
//
// The trait a pixel-buffer-producing simulation implements to run inside
// the shell, plus the key event type its input queue consumes.
//
// The shell owns the loop; the simulation owns the decision of what each
// tick does. Inside `tick` the simulation calls back into the shell
// through [`Host`]: present a frame, drain key events, read the clock,
// sleep for pacing, retitle the window.
//
//=========================================================================

use crate::platform::Host;

//=== KeyEvent ============================================================

/// One discrete key transition in engine key code space.
///
/// `pressed` is `true` for down edges, `false` for up edges. `code` is a
/// value from [`keys`](crate::keys) or lowercase-ASCII for letters and
/// digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub pressed: bool,
    pub code: u8,
}

//=== Simulation ==========================================================

/// A fixed-resolution simulation driven by the shell's tick loop.
///
/// # Resolution
///
/// `WIDTH`/`HEIGHT` declare the framebuffer dimensions once, at compile
/// time. Every frame handed to [`Host::present`] must be exactly
/// `WIDTH * HEIGHT` packed `0x00RRGGBB` values, row-major. The shell never
/// resamples the frame; it is stretched to the window only at blit time.
///
/// # Lifecycle
///
/// - `create` runs once, after the window and display surface exist and
///   before the first tick. Engine-side setup goes here.
/// - `tick` runs once per loop iteration, forever. A typical tick renders
///   into an internal buffer, presents it, drains key events by calling
///   [`Host::poll_key`] until `None`, and sleeps for pacing.
///
/// # Examples
///
/// ```no_run
/// use lumen_shell::{Host, KeyEvent, ShellBuilder, Simulation};
///
/// struct Checkerboard {
///     frame: Vec<u32>,
/// }
///
/// impl Simulation for Checkerboard {
///     const WIDTH: usize = 320;
///     const HEIGHT: usize = 200;
///
///     fn create(&mut self, host: &mut Host) {
///         host.set_title("checkerboard");
///     }
///
///     fn tick(&mut self, host: &mut Host) {
///         while let Some(KeyEvent { pressed, code }) = host.poll_key() {
///             let _ = (pressed, code);
///         }
///         host.present(Some(&self.frame));
///         host.sleep_ms(16);
///     }
/// }
///
/// let sim = Checkerboard { frame: vec![0; 320 * 200] };
/// ShellBuilder::new().with_title("checkerboard").build().run(sim).unwrap();
/// ```
pub trait Simulation {
    /// Framebuffer width in pixels.
    const WIDTH: usize;

    /// Framebuffer height in pixels.
    const HEIGHT: usize;

    /// One-time setup, called before the first tick.
    fn create(&mut self, host: &mut Host);

    /// One step of the simulation.
    fn tick(&mut self, host: &mut Host);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_is_copy_and_comparable() {
        let event = KeyEvent {
            pressed: true,
            code: b'a',
        };
        let copy = event;
        assert_eq!(event, copy);
    }
}

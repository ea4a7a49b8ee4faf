//=========================================================================
// Lumen Shell — Library Root
//
// This crate defines the public API surface of the Lumen Shell, a
// single-threaded platform shell for fixed-resolution, pixel-buffer
// simulations. The shell owns the window, the display surface, timing,
// and keyboard translation; the simulation owns everything else and calls
// back into the shell through the `Host` context each tick.
//
// Responsibilities:
// - Expose the entry point (`ShellBuilder` / `Shell`)
// - Expose the simulation-side contract (`Simulation`, `KeyEvent`, `keys`)
// - Keep OS integration (`platform` internals) hidden from end users
//
// Typical usage:
// ```no_run
// use lumen_shell::{Host, ShellBuilder, Simulation};
//
// struct MySim {
//     frame: Vec<u32>,
// }
//
// impl Simulation for MySim {
//     const WIDTH: usize = 320;
//     const HEIGHT: usize = 200;
//
//     fn create(&mut self, _host: &mut Host) {}
//
//     fn tick(&mut self, host: &mut Host) {
//         while host.poll_key().is_some() {}
//         host.present(Some(&self.frame));
//         host.sleep_ms(16);
//     }
// }
//
// fn main() {
//     let sim = MySim { frame: vec![0; 320 * 200] };
//     ShellBuilder::new().build().run(sim).unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `keys` holds the engine key code constants the simulation matches
// against when draining key events.
//
pub mod keys;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// softbuffer presentation) and is kept private apart from the `Host`
// context re-exported below.
//
// `shell` defines the entry point; `simulation` the engine-side contract.
//
mod platform;
mod shell;
mod simulation;

//--- Public Exports ------------------------------------------------------
//
// Everything a simulation needs at the top level: the runner, the host
// context it receives each tick, and the contract it implements.
//
pub use platform::Host;
pub use shell::{Shell, ShellBuilder, ShellError};
pub use simulation::{KeyEvent, Simulation};

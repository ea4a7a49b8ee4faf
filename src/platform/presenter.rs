//=========================================================================
// Frame Presenter
//
// Pushes the simulation's packed-pixel framebuffer to the screen.
//
// Pipeline, once per tick:
//   frame (&[u32], 0x00RRGGBB) → unpack_rgba → staging (RGBA bytes)
//   staging → blit_scaled → softbuffer surface (window-sized, 0RGB words)
//   surface.present()
//
// The staging buffer is fixed at simulation resolution and allocated once;
// the softbuffer surface is resized to the window client area every present
// (cheap no-op when unchanged). The blit stretches to exactly fill the
// window: nearest neighbour, no letterboxing, aspect ratio not preserved.
//
// Present has no error path: a host surface hiccup logs a warning and
// drops the frame; the next tick tries again with fresh pixels.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::num::NonZeroU32;
use std::sync::Arc;

use log::{trace, warn};
use softbuffer::{Context, Surface};
use winit::window::Window;

//=== FramePresenter ======================================================

/// Owns the host display surface and the RGBA staging buffer.
///
/// Created once the window exists; lives exactly as long as it. Field
/// order matters: the surface must drop before the context, and both
/// before the window handle.
pub(crate) struct FramePresenter {
    surface: Surface<Arc<Window>, Arc<Window>>,
    _context: Context<Arc<Window>>,
    window: Arc<Window>,

    /// Simulation resolution, fixed for the presenter's lifetime.
    width: usize,
    height: usize,

    /// Intermediate RGBA bytes (4 per pixel, alpha always opaque).
    staging: Vec<u8>,
}

impl FramePresenter {
    //--- Construction -----------------------------------------------------

    /// Creates the softbuffer context and surface for `window`.
    ///
    /// `width`/`height` are the simulation's fixed resolution; the staging
    /// buffer is sized `width * height * 4` and never reallocated.
    pub(crate) fn new(
        window: Arc<Window>,
        width: usize,
        height: usize,
    ) -> Result<Self, softbuffer::SoftBufferError> {
        let context = Context::new(window.clone())?;
        let surface = Surface::new(&context, window.clone())?;

        Ok(Self {
            surface,
            _context: context,
            window,
            width,
            height,
            staging: vec![0; width * height * 4],
        })
    }

    //--- Presentation -----------------------------------------------------

    /// Converts and displays one frame, stretched to fill the window.
    ///
    /// No-op if `frame` is absent (the simulation has not rendered yet).
    /// A frame whose length disagrees with the declared resolution is
    /// dropped with a warning rather than partially drawn.
    pub(crate) fn present(&mut self, frame: Option<&[u32]>) {
        let Some(frame) = frame else {
            trace!(target: "shell::present", "No frame to present yet");
            return;
        };

        if frame.len() != self.width * self.height {
            warn!(
                target: "shell::present",
                "Frame length {} does not match {}x{}, dropping",
                frame.len(),
                self.width,
                self.height
            );
            return;
        }

        unpack_rgba(frame, &mut self.staging);

        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized / zero-area client region: nothing to draw into.
            trace!(target: "shell::present", "Zero-sized window, dropping frame");
            return;
        };

        if let Err(e) = self.surface.resize(w, h) {
            warn!(target: "shell::present", "Surface resize failed: {}", e);
            return;
        }

        let mut buffer = match self.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(e) => {
                warn!(target: "shell::present", "Surface buffer unavailable: {}", e);
                return;
            }
        };

        blit_scaled(
            &self.staging,
            self.width,
            self.height,
            &mut buffer,
            size.width as usize,
            size.height as usize,
        );

        self.window.pre_present_notify();
        if let Err(e) = buffer.present() {
            warn!(target: "shell::present", "Present failed: {}", e);
        }
    }
}

//=== Pixel Conversion ====================================================

/// Unpacks packed `0x00RRGGBB` words into RGBA bytes.
///
/// For every pixel `v` the output is `[(v>>16)&0xFF, (v>>8)&0xFF, v&0xFF,
/// 255]`. The unused high byte of the word is ignored; the 24 significant
/// bits convert losslessly. Never mutates `frame`.
pub(crate) fn unpack_rgba(frame: &[u32], staging: &mut [u8]) {
    debug_assert_eq!(staging.len(), frame.len() * 4);

    for (pixel, out) in frame.iter().zip(staging.chunks_exact_mut(4)) {
        out[0] = (pixel >> 16) as u8;
        out[1] = (pixel >> 8) as u8;
        out[2] = *pixel as u8;
        out[3] = 0xFF;
    }
}

/// Nearest-neighbour blit from the RGBA staging buffer into a window-sized
/// buffer of `0x00RRGGBB` words (softbuffer's layout).
///
/// Source maps onto the full destination: no centering, no borders. Every
/// destination pixel is written, so no prior clear is needed.
pub(crate) fn blit_scaled(
    staging: &[u8],
    src_w: usize,
    src_h: usize,
    dest: &mut [u32],
    dst_w: usize,
    dst_h: usize,
) {
    debug_assert_eq!(staging.len(), src_w * src_h * 4);
    debug_assert_eq!(dest.len(), dst_w * dst_h);

    for dy in 0..dst_h {
        let sy = dy * src_h / dst_h;
        let src_row = &staging[sy * src_w * 4..(sy + 1) * src_w * 4];
        let dst_row = &mut dest[dy * dst_w..(dy + 1) * dst_w];

        for (dx, out) in dst_row.iter_mut().enumerate() {
            let sx = dx * src_w / dst_w;
            let p = &src_row[sx * 4..sx * 4 + 3];
            *out = u32::from(p[0]) << 16 | u32::from(p[1]) << 8 | u32::from(p[2]);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unpack(frame: &[u32]) -> Vec<u8> {
        let mut staging = vec![0; frame.len() * 4];
        unpack_rgba(frame, &mut staging);
        staging
    }

    #[test]
    fn unpack_extracts_channels_in_rgb_order() {
        assert_eq!(unpack(&[0x00FF8040]), vec![0xFF, 0x80, 0x40, 0xFF]);
    }

    #[test]
    fn unpack_ignores_unused_high_byte() {
        assert_eq!(unpack(&[0xAAFF8040]), vec![0xFF, 0x80, 0x40, 0xFF]);
    }

    #[test]
    fn unpack_alpha_is_always_opaque() {
        let staging = unpack(&[0x00000000, 0x00FFFFFF, 0x00123456]);
        for pixel in staging.chunks_exact(4) {
            assert_eq!(pixel[3], 0xFF);
        }
    }

    #[test]
    fn unpack_round_trips_all_channel_extremes() {
        let frame = [0x00000000, 0x00FF0000, 0x0000FF00, 0x000000FF, 0x00FFFFFF];
        let staging = unpack(&frame);
        for (v, p) in frame.iter().zip(staging.chunks_exact(4)) {
            assert_eq!(p[0], ((v >> 16) & 0xFF) as u8);
            assert_eq!(p[1], ((v >> 8) & 0xFF) as u8);
            assert_eq!(p[2], (v & 0xFF) as u8);
        }
    }

    #[test]
    fn blit_identity_scale_preserves_pixels() {
        let staging = unpack(&[0x00112233, 0x00445566, 0x00778899, 0x00AABBCC]);
        let mut dest = vec![0u32; 4];

        blit_scaled(&staging, 2, 2, &mut dest, 2, 2);

        assert_eq!(dest, vec![0x00112233, 0x00445566, 0x00778899, 0x00AABBCC]);
    }

    #[test]
    fn blit_upscale_replicates_source_pixels() {
        let staging = unpack(&[0x00FF0000]);
        let mut dest = vec![0u32; 9];

        blit_scaled(&staging, 1, 1, &mut dest, 3, 3);

        assert!(dest.iter().all(|&p| p == 0x00FF0000));
    }

    #[test]
    fn blit_upscale_2x_maps_quadrants() {
        // 2x2 source stretched to 4x4: each source pixel covers a quadrant.
        let src = [0x00000001, 0x00000002, 0x00000003, 0x00000004];
        let staging = unpack(&src);
        let mut dest = vec![0u32; 16];

        blit_scaled(&staging, 2, 2, &mut dest, 4, 4);

        assert_eq!(dest[0], 0x00000001); // top-left corner
        assert_eq!(dest[3], 0x00000002); // top-right corner
        assert_eq!(dest[12], 0x00000003); // bottom-left corner
        assert_eq!(dest[15], 0x00000004); // bottom-right corner
    }

    #[test]
    fn blit_downscale_samples_within_bounds() {
        let frame: Vec<u32> = (0..16).collect();
        let staging = unpack(&frame);
        let mut dest = vec![0xDEADBEEFu32; 4];

        blit_scaled(&staging, 4, 4, &mut dest, 2, 2);

        // Every destination pixel must come from the source (values 0..16).
        assert!(dest.iter().all(|&p| p < 16));
    }

    #[test]
    fn blit_fills_every_destination_pixel() {
        let staging = unpack(&[0x00ABCDEF]);
        let mut dest = vec![0xFFFFFFFFu32; 7 * 5];

        blit_scaled(&staging, 1, 1, &mut dest, 7, 5);

        assert!(dest.iter().all(|&p| p == 0x00ABCDEF));
    }
}

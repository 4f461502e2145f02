//! Frequency-bar mapping for the sound visualizer.
//!
//! The analyser runs with a deliberately small FFT so the page only pays for
//! 32 bins; the decorative bar strip may hold more bars than that, in which
//! case bar indices wrap around the bins.

/// Transform size of the analyser node.
pub const FFT_SIZE: u32 = 64;

/// Frequency bins produced per frame (`FFT_SIZE / 2`).
pub const BIN_COUNT: usize = (FFT_SIZE / 2) as usize;

/// `height = base_px + magnitude/255 * span_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    pub base_px: f32,
    pub span_px: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        // Bars rest at 10px and peak at 60px.
        Self {
            base_px: 10.0,
            span_px: 50.0,
        }
    }
}

impl BarStyle {
    pub fn height_px(&self, magnitude: u8) -> f32 {
        self.base_px + f32::from(magnitude) / 255.0 * self.span_px
    }
}

/// Map one frame of bin magnitudes onto `heights`, one entry per visual bar.
/// Bars beyond the bin count wrap around via modulo. Empty input clears
/// nothing and leaves the bars at rest height.
pub fn bar_heights(bins: &[u8], style: &BarStyle, heights: &mut [f32]) {
    if bins.is_empty() {
        for h in heights.iter_mut() {
            *h = style.base_px;
        }
        return;
    }
    for (i, h) in heights.iter_mut().enumerate() {
        *h = style.height_px(bins[i % bins.len()]);
    }
}

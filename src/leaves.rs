//! Falling-leaf scatter.
//!
//! Leaves are pure CSS animations; the core only generates the randomized
//! per-leaf style values and the DOM layer turns them into `<div>`s.

use crate::rng::Lcg;

/// Leaves spawned into the decorative container.
pub const LEAF_COUNT: usize = 25;

/// Inline style values for one leaf.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafStyle {
    /// Horizontal start position in vw.
    pub left_vw: f32,
    /// Fall duration in seconds (7–15s).
    pub duration_s: f32,
    /// Animation delay in seconds, applied negated so leaves start mid-fall.
    pub delay_s: f32,
    /// 0.4–1.0.
    pub opacity: f32,
    /// Square side, 5–15px.
    pub size_px: f32,
    /// HSL lightness for the pink shade, 75–90%.
    pub lightness: f32,
}

impl LeafStyle {
    pub fn css_background(&self) -> String {
        format!("hsl(330, 100%, {:.0}%)", self.lightness)
    }
}

pub fn scatter(count: usize, rng: &mut Lcg) -> Vec<LeafStyle> {
    (0..count)
        .map(|_| LeafStyle {
            left_vw: rng.range(0.0, 100.0),
            duration_s: rng.range(7.0, 15.0),
            delay_s: rng.range(0.0, 10.0),
            opacity: rng.range(0.4, 1.0),
            size_px: rng.range(5.0, 15.0),
            lightness: rng.range(75.0, 90.0),
        })
        .collect()
}

//! Flipbook state machine.
//!
//! Owns the flipped/unflipped boolean per page and derives everything the DOM
//! layer applies: stacking order, wrapper alignment, which pages to preload and
//! whether the background music should pause or resume. The handlers are pure
//! so the whole book can be driven from host-side tests.

/// Horizontal alignment of the book wrapper, derived from the flip count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Nothing flipped yet: the closed cover sits on the right.
    SingleRight,
    /// Somewhere in the middle: spread centered on the spine.
    Centered,
    /// Everything flipped: the back cover sits on the left.
    SingleLeft,
}

impl Alignment {
    /// CSS class applied to the book wrapper element.
    pub fn css_class(self) -> &'static str {
        match self {
            Alignment::SingleRight => "book-wrapper align-single-right",
            Alignment::Centered => "book-wrapper",
            Alignment::SingleLeft => "book-wrapper align-single-left",
        }
    }
}

/// What the music should do after a flip of the last page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    /// Last page flipped open: stop the music.
    Pause,
    /// Last page flipped back: resume it.
    Resume,
}

/// Everything a click handler has to apply to the DOM after a toggle.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipOutcome {
    /// Whether the clicked page is now flipped.
    pub flipped: bool,
    /// New z-index per page, in page order.
    pub z_indexes: Vec<u32>,
    pub alignment: Alignment,
    /// Pages whose images should start loading now (masks flip latency).
    pub preload: Vec<usize>,
    pub audio: Option<AudioCue>,
}

/// Ordered page stack with per-page flipped state.
#[derive(Clone, Debug)]
pub struct FlipBook {
    flipped: Vec<bool>,
}

impl FlipBook {
    /// All pages start unflipped.
    pub fn new(page_count: usize) -> Self {
        Self {
            flipped: vec![false; page_count],
        }
    }

    pub fn page_count(&self) -> usize {
        self.flipped.len()
    }

    pub fn flipped_count(&self) -> usize {
        self.flipped.iter().filter(|&&f| f).count()
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    /// Stacking order for the physical-book illusion.
    ///
    /// Unflipped pages count down from `page_count` so earlier pages stay on
    /// top of the right-hand pile; flipped pages count up from 1 so the most
    /// recently flipped page tops the left-hand pile. Every flipped page ends
    /// up strictly below every unflipped page.
    pub fn z_indexes(&self) -> Vec<u32> {
        let mut top_unflipped = self.flipped.len() as u32;
        let mut bottom_flipped = 1_u32;
        self.flipped
            .iter()
            .map(|&is_flipped| {
                if is_flipped {
                    let z = bottom_flipped;
                    bottom_flipped += 1;
                    z
                } else {
                    let z = top_unflipped;
                    top_unflipped -= 1;
                    z
                }
            })
            .collect()
    }

    pub fn alignment(&self) -> Alignment {
        let flipped = self.flipped_count();
        if flipped == 0 {
            Alignment::SingleRight
        } else if flipped == self.flipped.len() {
            Alignment::SingleLeft
        } else {
            Alignment::Centered
        }
    }

    /// Flip the page at `index`. Out-of-range clicks are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.flipped.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    /// Full click handler: toggle plus every derived side effect.
    pub fn on_page_click(&mut self, index: usize) -> Option<FlipOutcome> {
        let now_flipped = self.toggle(index)?;

        let preload = (index + 1..=index + 2)
            .filter(|&i| i < self.flipped.len())
            .collect();

        // Only the last page drives the music: open pauses, close resumes.
        let audio = if index + 1 == self.flipped.len() {
            Some(if now_flipped {
                AudioCue::Pause
            } else {
                AudioCue::Resume
            })
        } else {
            None
        };

        Some(FlipOutcome {
            flipped: now_flipped,
            z_indexes: self.z_indexes(),
            alignment: self.alignment(),
            preload,
            audio,
        })
    }
}

//! Host-side tests for the flip state machine and its derived stacking order.

use flipbook_wasm::book::{Alignment, AudioCue, FlipBook};
use flipbook_wasm::playback::Playback;

const PAGES: usize = 17;

fn assert_piles(book: &FlipBook) {
    let z = book.z_indexes();
    let flipped_max = (0..book.page_count())
        .filter(|&i| book.is_flipped(i))
        .map(|i| z[i])
        .max();
    let unflipped_min = (0..book.page_count())
        .filter(|&i| !book.is_flipped(i))
        .map(|i| z[i])
        .min();
    if let (Some(f), Some(u)) = (flipped_max, unflipped_min) {
        assert!(f < u, "flipped pile must sit below unflipped pile: {f} vs {u}");
    }

    // Every z value is used exactly once.
    let mut sorted = z.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=book.page_count() as u32).collect::<Vec<_>>());
}

#[test]
fn flipped_count_tracks_toggles() {
    for subset in [vec![0], vec![3, 7, 11], vec![0, 1, 2, 3], (0..PAGES).collect()] {
        let mut book = FlipBook::new(PAGES);
        for &i in &subset {
            book.toggle(i);
        }
        assert_eq!(book.flipped_count(), subset.len());
        assert_piles(&book);
    }
}

#[test]
fn unflipped_pages_keep_reading_order() {
    let book = FlipBook::new(5);
    // Nothing flipped: page 0 on top, descending to the last page.
    assert_eq!(book.z_indexes(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn flipped_pile_stacks_by_index() {
    let mut book = FlipBook::new(5);
    book.toggle(0);
    book.toggle(1);
    let z = book.z_indexes();
    assert_eq!(&z[..2], &[1, 2]);
    assert_eq!(&z[2..], &[5, 4, 3]);
}

#[test]
fn double_toggle_is_a_round_trip() {
    let mut book = FlipBook::new(PAGES);
    book.toggle(2);
    book.toggle(9);

    let z_before = book.z_indexes();
    let align_before = book.alignment();

    book.toggle(5);
    book.toggle(5);

    assert_eq!(book.z_indexes(), z_before);
    assert_eq!(book.alignment(), align_before);
}

#[test]
fn alignment_follows_flip_count() {
    let mut book = FlipBook::new(4);
    assert_eq!(book.alignment(), Alignment::SingleRight);

    book.toggle(0);
    assert_eq!(book.alignment(), Alignment::Centered);

    for i in 1..4 {
        book.toggle(i);
    }
    assert_eq!(book.alignment(), Alignment::SingleLeft);

    book.toggle(3);
    assert_eq!(book.alignment(), Alignment::Centered);
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut book = FlipBook::new(3);
    assert!(book.toggle(3).is_none());
    assert!(book.on_page_click(99).is_none());
    assert_eq!(book.flipped_count(), 0);
}

#[test]
fn click_preloads_the_next_spread() {
    let mut book = FlipBook::new(5);
    let outcome = book.on_page_click(1).unwrap();
    assert_eq!(outcome.preload, vec![2, 3]);

    // Near the end the preload list is clipped to the page range.
    let outcome = book.on_page_click(3).unwrap();
    assert_eq!(outcome.preload, vec![4]);
    let outcome = book.on_page_click(4).unwrap();
    assert!(outcome.preload.is_empty());
}

#[test]
fn last_page_drives_the_music() {
    let mut book = FlipBook::new(3);
    assert_eq!(book.on_page_click(0).unwrap().audio, None);

    let open = book.on_page_click(2).unwrap();
    assert_eq!(open.audio, Some(AudioCue::Pause));

    let close = book.on_page_click(2).unwrap();
    assert_eq!(close.audio, Some(AudioCue::Resume));
}

#[test]
fn first_click_scenario() {
    let mut book = FlipBook::new(PAGES);
    let mut playback = Playback::default();

    let actions = playback.ensure_started();
    assert!(actions.start_playback);
    assert!(actions.init_visualizer);
    assert!(playback.visualizer_ready());

    let outcome = book.on_page_click(0).unwrap();
    assert!(outcome.flipped);
    assert!(book.is_flipped(0));

    // Page 0 opens the flipped pile; page 1 now tops the unflipped pile.
    assert_eq!(outcome.z_indexes[0], 1);
    let top = *outcome.z_indexes.iter().max().unwrap();
    assert_eq!(outcome.z_indexes[1], top);
    assert_eq!(outcome.alignment, Alignment::Centered);

    // Subsequent clicks neither restart playback nor re-init the visualizer.
    let actions = playback.ensure_started();
    assert!(!actions.start_playback);
    assert!(!actions.init_visualizer);
}

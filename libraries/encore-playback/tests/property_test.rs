//! Property-based tests for the sequencer
//!
//! Uses proptest to verify sequencing laws across many random libraries,
//! queues and skip sets.

use encore_core::{Track, UserId};
use encore_playback::{Sequencer, Transition};
use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

// ===== Helpers =====

fn track(id: String) -> Track {
    Track::new(id.clone(), format!("Song {}", id), "Artist", "src", UserId::new("u"))
}

/// Library of unique ids "l0".."lN"
fn arbitrary_library() -> impl Strategy<Value = Vec<Track>> {
    (1usize..30).prop_map(|n| (0..n).map(|i| track(format!("l{}", i))).collect())
}

/// Manual queue entries, ids distinct from library ids
fn arbitrary_queue() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(0usize..10, 0..8)
        .prop_map(|ids| ids.into_iter().map(|i| track(format!("q{}", i))).collect())
}

fn multiset(tracks: &[&Track]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for t in tracks {
        *counts.entry(t.id.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Sequencer with library loaded, `start` selected, `queue` queued and
/// the given up-next library positions skipped
fn prepared(library: &[Track], queue: &[Track], start: usize, skips: &[usize]) -> Sequencer {
    let mut sequencer = Sequencer::default();
    sequencer.set_library(library.to_vec());
    sequencer.select_track(library[start % library.len()].clone());
    for index in skips {
        let up_next = sequencer.compute_up_next().len();
        if up_next > 0 {
            // Only library-derived entries exist at this point
            sequencer.remove_from_up_next(index % up_next).ok();
        }
    }
    for t in queue {
        sequencer.add_to_queue(t.clone());
    }
    sequencer
}

// ===== Property Tests =====

proptest! {
    /// Property: next with shuffle off consumes exactly the manual queue head
    #[test]
    fn next_consumes_queue_head(
        library in arbitrary_library(),
        queue in arbitrary_queue(),
        start in 0usize..30,
    ) {
        prop_assume!(!queue.is_empty());
        let mut sequencer = prepared(&library, &queue, start, &[]);

        let before: Vec<Track> = sequencer.manual_queue().into_iter().cloned().collect();
        let transition = sequencer.play_next();

        prop_assert_eq!(transition, Transition::Load(before[0].clone()));
        let after: Vec<Track> = sequencer.manual_queue().into_iter().cloned().collect();
        prop_assert_eq!(after.len(), before.len() - 1);
        prop_assert_eq!(&after[..], &before[1..]);
    }

    /// Property: shuffled queue is a permutation of queue ++ remaining natural order
    #[test]
    fn shuffle_is_permutation(
        library in arbitrary_library(),
        queue in arbitrary_queue(),
        start in 0usize..30,
        skips in prop::collection::vec(0usize..30, 0..5),
    ) {
        let mut sequencer = prepared(&library, &queue, start, &skips);
        let expected = multiset(&sequencer.compute_up_next());

        sequencer.toggle_shuffle();
        prop_assert_eq!(multiset(&sequencer.shuffled_queue()), expected.clone());

        // Off then on again with unchanged inputs: still a permutation
        sequencer.toggle_shuffle();
        sequencer.toggle_shuffle();
        prop_assert_eq!(multiset(&sequencer.shuffled_queue()), expected);
    }

    /// Property: skipped tracks never appear in the library-derived part of up next
    #[test]
    fn skipped_never_in_up_next(
        library in arbitrary_library(),
        start in 0usize..30,
        skips in prop::collection::vec(0usize..30, 1..10),
    ) {
        let sequencer = prepared(&library, &[], start, &skips);

        for t in sequencer.compute_up_next() {
            prop_assert!(!sequencer.is_skipped(&t.id));
        }
    }

    /// Property: n nexts followed by n previous calls return to the start
    #[test]
    fn history_is_lifo(
        library in arbitrary_library(),
        queue in arbitrary_queue(),
        start in 0usize..30,
        steps in 1usize..20,
    ) {
        let mut sequencer = prepared(&library, &queue, start, &[]);
        let original = sequencer.current_track().cloned();

        let mut advanced = 0;
        for _ in 0..steps {
            match sequencer.play_next() {
                Transition::Load(_) => advanced += 1,
                _ => break,
            }
        }

        for _ in 0..advanced {
            prop_assert!(!sequencer.history().is_empty());
            sequencer.play_previous(Duration::from_secs(1));
        }

        prop_assert_eq!(sequencer.current_track().cloned(), original);
    }

    /// Property: up next length is queue length plus the unskipped library tail
    #[test]
    fn up_next_length_matches_sources(
        library in arbitrary_library(),
        queue in arbitrary_queue(),
        start in 0usize..30,
        skips in prop::collection::vec(0usize..30, 0..5),
    ) {
        let sequencer = prepared(&library, &queue, start, &skips);
        let current = library.iter().position(|t| Some(t) == sequencer.current_track()).unwrap();
        let remaining = library.len() - current - 1 - sequencer.skipped_count();

        prop_assert_eq!(sequencer.compute_up_next().len(), queue.len() + remaining);
    }
}

// Integration tests for the sort recorders

use stepviz::frame::{SortEvent, TraceMetrics};
use stepviz::sorting::{bubble_sort_steps, merge_sort_steps, quick_sort_steps, SortAlgorithm};

#[test]
fn test_bubble_three_elements() {
    let frames = bubble_sort_steps(&[3, 1, 2]);

    assert_eq!(frames[0].kind, SortEvent::Init);
    assert_eq!(frames[0].array, vec![3, 1, 2]);

    assert_eq!(frames[1].kind, SortEvent::Compare);
    assert_eq!(frames[1].comparison, vec![0, 1]);

    assert_eq!(frames[2].kind, SortEvent::Swap);
    assert_eq!(frames[2].swap, vec![0, 1]);
    assert_eq!(frames[2].array, vec![1, 3, 2]);

    let last = frames.last().expect("bubble sort produced no frames");
    assert_eq!(last.kind, SortEvent::Done);
    assert_eq!(last.array, vec![1, 2, 3]);
}

#[test]
fn test_every_algorithm_brackets_with_init_and_done() {
    let input = vec![5, -2, 9, 0, 5, 3, 12, 1];
    let mut expected = input.clone();
    expected.sort();

    for algorithm in SortAlgorithm::ALL {
        let frames = algorithm.record(&input);
        assert!(frames.len() >= 2, "{} recorded too few frames", algorithm);

        let first = &frames[0];
        let last = &frames[frames.len() - 1];
        assert_eq!(first.kind, SortEvent::Init, "{}", algorithm);
        assert_eq!(first.array, input, "{}", algorithm);
        assert_eq!(last.kind, SortEvent::Done, "{}", algorithm);
        assert_eq!(last.array, expected, "{}", algorithm);

        // Intermediate frames never change the array length
        assert!(frames.iter().all(|f| f.array.len() == input.len()), "{}", algorithm);
    }
}

#[test]
fn test_indices_stay_in_bounds() {
    let input = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    for algorithm in SortAlgorithm::ALL {
        for frame in algorithm.record(&input) {
            let n = frame.array.len();
            assert!(
                frame
                    .comparison
                    .iter()
                    .chain(&frame.swap)
                    .chain(&frame.pivot)
                    .all(|&i| i < n),
                "{} produced an out-of-range index in '{}'",
                algorithm,
                frame.description
            );
        }
    }
}

#[test]
fn test_quick_sort_marks_pivots() {
    let frames = quick_sort_steps(&[4, 7, 1, 9, 3]);
    assert!(frames.iter().any(|f| f.kind == SortEvent::Pivot && f.pivot.len() == 1));
}

#[test]
fn test_merge_sort_writes_instead_of_swapping() {
    let frames = merge_sort_steps(&[4, 3, 2, 1]);
    let metrics = TraceMetrics::from_frames(&frames);
    assert_eq!(metrics.swaps, 0);
    assert!(metrics.writes > 0);
    assert!(metrics.comparisons > 0);
}

#[test]
fn test_algorithm_registry_round_trips_keys() {
    for algorithm in SortAlgorithm::ALL {
        let parsed: SortAlgorithm = algorithm.key().parse().expect("key should parse");
        assert_eq!(parsed, algorithm);
    }
    assert!("bogo".parse::<SortAlgorithm>().is_err());
}

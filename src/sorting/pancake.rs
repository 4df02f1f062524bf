use super::recorder::Recorder;
use crate::frame::{SortEvent, SortFrame};

/// Pancake sort: flip the maximum to the front, then flip it into place
pub fn pancake_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Pancake Sort");
    let n = rec.len();
    if n <= 1 {
        return rec.finish("Array is already sorted");
    }

    for size in (2..=n).rev() {
        let mut max_idx = 0;
        for i in 1..size {
            rec.compare(i, max_idx, format!("Find max: compare {} with current max {}", i, max_idx));
            if rec.values[i] > rec.values[max_idx] {
                max_idx = i;
            }
        }

        if max_idx == size - 1 {
            continue;
        }

        rec.frame(
            SortEvent::Pivot,
            &[],
            &[],
            &[max_idx],
            format!("Max at index {} (value {})", max_idx, rec.values[max_idx]),
        );

        if max_idx > 0 {
            rec.frame(
                SortEvent::Inspect,
                &[0, max_idx],
                &[],
                &[],
                format!("Flip first {} elements", max_idx + 1),
            );
            flip(&mut rec, max_idx);
        }

        rec.frame(
            SortEvent::Inspect,
            &[0, size - 1],
            &[],
            &[],
            format!("Flip first {} elements to place max", size),
        );
        flip(&mut rec, size - 1);
    }

    rec.finish("Pancake Sort complete")
}

/// Reverse `values[..=k]` as a run of boundary swaps
fn flip(rec: &mut Recorder, k: usize) {
    let (mut i, mut j) = (0, k);
    while i < j {
        rec.swap(i, j, format!("Flip swap indices {} and {}", i, j));
        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_swaps_boundaries() {
        let frames = pancake_sort_steps(&[1, 3, 2]);
        let swaps: Vec<_> = frames
            .iter()
            .filter(|f| f.kind == SortEvent::Swap)
            .map(|f| f.swap.clone())
            .collect();
        // max 3 at index 1: flip [0..=1], then flip [0..=2]
        assert_eq!(swaps[0], vec![0, 1]);
        assert_eq!(swaps[1], vec![0, 2]);
        assert_eq!(frames.last().unwrap().array, vec![1, 2, 3]);
    }
}

use super::recorder::Recorder;
use crate::frame::SortFrame;

const SHRINK_FACTOR: f64 = 1.3;

/// Comb sort: gapped bubble passes with the gap shrinking by 1.3
pub fn comb_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Comb Sort");
    let n = rec.len();
    if n <= 1 {
        return rec.finish("Array is already sorted");
    }

    let mut gap = n;
    let mut swapped = true;

    while gap != 1 || swapped {
        gap = ((gap as f64 / SHRINK_FACTOR).floor() as usize).max(1);
        swapped = false;

        for i in 0..n - gap {
            let j = i + gap;
            rec.compare(i, j, format!("Compare indices {} and {}", i, j));
            if rec.values[i] > rec.values[j] {
                rec.swap(i, j, format!("Swap indices {} and {}", i, j));
                swapped = true;
            }
        }
    }

    rec.finish("Comb Sort complete")
}

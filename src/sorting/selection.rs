use super::recorder::Recorder;
use crate::frame::SortFrame;

/// Selection sort: scan for the minimum, then one swap per outer pass
pub fn selection_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Selection Sort");
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;

        for j in i + 1..n {
            rec.compare(
                min_idx,
                j,
                format!("Comparing current min (index {}) with index {}", min_idx, j),
            );
            if rec.values[j] < rec.values[min_idx] {
                min_idx = j;
                rec.select(min_idx, format!("New minimum selected at index {}", min_idx));
            }
        }

        if min_idx != i {
            rec.swap(i, min_idx, format!("Swapping index {} with min index {}", i, min_idx));
        }
    }

    rec.finish("Selection Sort complete")
}

use super::recorder::Recorder;
use crate::frame::{SortEvent, SortFrame};

/// Quick sort with Lomuto partitioning around the last element.
///
/// The pivot placement swap is always recorded, even when the pivot is
/// already in place, so every partition ends with the same frame shape.
pub fn quick_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Quick Sort");
    let n = rec.len();
    if n > 1 {
        sort_range(&mut rec, 0, n - 1);
    }
    rec.finish("Quick Sort complete")
}

fn sort_range(rec: &mut Recorder, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let p = partition(rec, low, high);
    if p > low {
        sort_range(rec, low, p - 1);
    }
    sort_range(rec, p + 1, high);
}

/// Returns the final index of the pivot
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.values[high];
    rec.frame(
        SortEvent::Pivot,
        &[],
        &[],
        &[high],
        format!("Pivot chosen at index {} (value {})", high, pivot),
    );

    // Next slot for an element smaller than the pivot
    let mut store = low;

    for j in low..high {
        rec.frame(
            SortEvent::Compare,
            &[j, high],
            &[],
            &[high],
            format!("Comparing index {} with pivot index {}", j, high),
        );

        if rec.values[j] < pivot {
            if store != j {
                rec.values.swap(store, j);
                rec.frame(
                    SortEvent::Swap,
                    &[],
                    &[store, j],
                    &[high],
                    format!("Swapping index {} and {}", store, j),
                );
            }
            store += 1;
        }
    }

    rec.values.swap(store, high);
    rec.frame(
        SortEvent::Swap,
        &[],
        &[store, high],
        &[store],
        format!("Placing pivot at index {}", store),
    );

    store
}

use super::recorder::Recorder;
use crate::frame::SortFrame;

/// Cocktail shaker sort: alternating forward and backward bubble passes
pub fn cocktail_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Cocktail Shaker Sort");
    let n = rec.len();
    if n <= 1 {
        return rec.finish("Array is already sorted");
    }

    let mut start = 0;
    let mut end = n - 1;

    loop {
        let mut swapped = false;
        for i in start..end {
            rec.compare(i, i + 1, format!("Compare indices {} and {}", i, i + 1));
            if rec.values[i] > rec.values[i + 1] {
                rec.swap(i, i + 1, format!("Swap indices {} and {}", i, i + 1));
                swapped = true;
            }
        }
        if !swapped {
            break;
        }

        // Largest unsorted value is now at `end`
        end -= 1;
        swapped = false;
        for i in (start + 1..=end).rev() {
            rec.compare(i - 1, i, format!("Compare indices {} and {}", i - 1, i));
            if rec.values[i - 1] > rec.values[i] {
                rec.swap(i - 1, i, format!("Swap indices {} and {}", i - 1, i));
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        start += 1;
    }

    rec.finish("Cocktail Shaker Sort complete")
}

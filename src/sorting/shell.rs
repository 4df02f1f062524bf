use super::recorder::Recorder;
use crate::frame::{SortEvent, SortFrame};

/// Shell sort with the halving gap sequence n/2, n/4, ..., 1
pub fn shell_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Shell Sort");
    let n = rec.len();

    let mut gap = n / 2;
    while gap > 0 {
        rec.frame(SortEvent::Select, &[], &[], &[], format!("Gap set to {}", gap));

        for i in gap..n {
            let temp = rec.values[i];
            rec.select(i, format!("Selecting index {} for gapped insertion", i));

            let mut j = i;
            while j >= gap {
                rec.compare(j - gap, j, format!("Comparing index {} and {} (gap {})", j - gap, j, gap));
                if rec.values[j - gap] <= temp {
                    break;
                }
                rec.shift(j - gap, j, format!("Shifting index {} to {}", j - gap, j));
                j -= gap;
            }

            rec.write(j, temp, format!("Inserting value at index {}", j));
        }

        gap /= 2;
    }

    rec.finish("Shell Sort complete")
}

use super::recorder::Recorder;
use crate::frame::SortFrame;

/// Insertion sort with key shifting
pub fn insertion_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Insertion Sort");
    let n = rec.len();

    for i in 1..n {
        let key = rec.values[i];
        rec.select(i, format!("Selecting key at index {}", i));

        // `slot` is where the key will land; everything in slot..i moved right
        let mut slot = i;
        while slot > 0 {
            let j = slot - 1;
            rec.compare(j, slot, format!("Comparing key with index {}", j));
            if rec.values[j] <= key {
                break;
            }
            rec.shift(j, slot, format!("Shifting index {} to index {}", j, slot));
            slot = j;
        }

        rec.write(slot, key, format!("Inserting key at index {}", slot));
    }

    rec.finish("Insertion Sort complete")
}

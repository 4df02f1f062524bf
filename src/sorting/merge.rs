use super::recorder::Recorder;
use crate::frame::SortFrame;

/// Top-down merge sort; ties take from the left run, so the sort is stable
pub fn merge_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Merge Sort");
    let n = rec.len();
    if n > 1 {
        sort_range(&mut rec, 0, n - 1);
    }
    rec.finish("Merge Sort complete")
}

fn sort_range(rec: &mut Recorder, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = (left + right) / 2;
    sort_range(rec, left, mid);
    sort_range(rec, mid + 1, right);
    merge(rec, left, mid, right);
}

fn merge(rec: &mut Recorder, left: usize, mid: usize, right: usize) {
    let left_run = rec.values[left..=mid].to_vec();
    let right_run = rec.values[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        let (li, ri) = (left + i, mid + 1 + j);
        rec.compare(li, ri, format!("Comparing left index {} and right index {}", li, ri));

        let value = if left_run[i] <= right_run[j] {
            i += 1;
            left_run[i - 1]
        } else {
            j += 1;
            right_run[j - 1]
        };
        rec.write(k, value, format!("Writing value at index {}", k));
        k += 1;
    }

    for &value in &left_run[i..] {
        rec.write(k, value, format!("Copying remaining left value to index {}", k));
        k += 1;
    }

    for &value in &right_run[j..] {
        rec.write(k, value, format!("Copying remaining right value to index {}", k));
        k += 1;
    }
}

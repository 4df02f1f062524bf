use super::recorder::Recorder;
use crate::frame::{SortEvent, SortFrame};

/// Bucket sort with `clamp(n, 3, 7)` buckets over the normalized value range
pub fn bucket_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Bucket Sort");
    let n = rec.len();
    if n <= 1 {
        return rec.finish("Array is already sorted");
    }

    let min = rec.values.iter().copied().min().unwrap_or_default();
    let max = rec.values.iter().copied().max().unwrap_or_default();
    if min == max {
        return rec.finish("All values are equal");
    }

    let bucket_count = n.clamp(3, 7);
    let range = (max as i128 - min as i128 + 1) as f64;
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); bucket_count];

    for i in 0..n {
        let value = rec.values[i];
        let idx = bucket_index(value, min, range, bucket_count);
        rec.frame(
            SortEvent::Inspect,
            &[i],
            &[],
            &[],
            format!("Place {} into bucket {}", value, idx),
        );
        buckets[idx].push(value);
    }

    for bucket in &mut buckets {
        bucket.sort_unstable();
    }

    let mut write_index = 0;
    for value in buckets.into_iter().flatten() {
        rec.write(write_index, value, format!("Write {} at index {}", value, write_index));
        write_index += 1;
    }

    rec.finish("Bucket Sort complete")
}

fn bucket_index(value: i64, min: i64, range: f64, bucket_count: usize) -> usize {
    let normalized = (value as i128 - min as i128) as f64 / range;
    let idx = (normalized * bucket_count as f64).floor();
    // `as usize` saturates negatives to 0
    (idx as usize).min(bucket_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_index_bounds() {
        // values 1..=10, range 10, 3 buckets
        assert_eq!(bucket_index(1, 1, 10.0, 3), 0);
        assert_eq!(bucket_index(5, 1, 10.0, 3), 1);
        assert_eq!(bucket_index(10, 1, 10.0, 3), 2);
    }

    #[test]
    fn test_all_equal_short_circuits() {
        let frames = bucket_sort_steps(&[4, 4, 4]);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].description, "All values are equal");
        assert_eq!(frames[1].kind, SortEvent::Done);
    }

    #[test]
    fn test_sorts_and_inspects_each_value() {
        let frames = bucket_sort_steps(&[9, 2, 7, 2, 5]);
        let inspected = frames.iter().filter(|f| f.kind == SortEvent::Inspect).count();
        assert_eq!(inspected, 5);
        assert_eq!(frames.last().unwrap().array, vec![2, 2, 5, 7, 9]);
    }
}

use super::recorder::Recorder;
use crate::frame::{SortEvent, SortFrame};
use std::collections::BTreeMap;

/// Counting sort over the value range `min..=max`.
///
/// Counts are keyed by offset from `min` in an ordered map, so sparse wide
/// ranges cost memory per distinct value instead of per range slot.
pub fn counting_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Counting Sort");
    if rec.len() <= 1 {
        return rec.finish("Counting Sort complete");
    }
    let min = rec.values.iter().copied().min().unwrap_or_default();

    let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
    for i in 0..rec.len() {
        let value = rec.values[i];
        let offset = value.abs_diff(min);
        let count = counts.entry(offset).or_insert(0);
        *count += 1;
        let count = *count;
        rec.frame(
            SortEvent::Write,
            &[i],
            &[],
            &[],
            format!("Counting value {} (count[{}] = {})", value, offset, count),
        );
    }

    let mut write_index = 0;
    for (offset, count) in counts {
        // offset <= max - min, so min + offset stays within i64
        let value = (min as i128 + offset as i128) as i64;
        for _ in 0..count {
            rec.write(
                write_index,
                value,
                format!("Writing value {} at index {}", value, write_index),
            );
            write_index += 1;
        }
    }

    rec.finish("Counting Sort complete")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_write_per_element_in_each_phase() {
        let frames = counting_sort_steps(&[3, 1, 3, 2]);
        let writes_with = |prefix: &str| {
            frames
                .iter()
                .filter(|f| f.kind == SortEvent::Write && f.description.starts_with(prefix))
                .count()
        };
        let counting = writes_with("Counting value");
        let placing = writes_with("Writing value");
        assert_eq!(counting, 4);
        assert_eq!(placing, 4);
        assert_eq!(frames.last().unwrap().array, vec![1, 2, 3, 3]);
    }

    #[test]
    fn test_extreme_range() {
        let frames = counting_sort_steps(&[i64::MAX, i64::MIN, 0]);
        assert_eq!(frames.last().unwrap().array, vec![i64::MIN, 0, i64::MAX]);
    }

    #[test]
    fn test_empty() {
        let frames = counting_sort_steps(&[]);
        assert_eq!(frames.len(), 2);
    }
}

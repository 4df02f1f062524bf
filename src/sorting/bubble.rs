use super::recorder::Recorder;
use crate::frame::SortFrame;

/// Bubble sort: adjacent compare-and-swap passes, each pass one shorter
pub fn bubble_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Bubble Sort");
    let n = rec.len();

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            rec.compare(j, j + 1, format!("Comparing index {} and {}", j, j + 1));
            if rec.values[j] > rec.values[j + 1] {
                rec.swap(j, j + 1, format!("Swapping index {} and {}", j, j + 1));
            }
        }
    }

    rec.finish("Bubble Sort complete")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::SortEvent;

    #[test]
    fn test_three_elements() {
        let frames = bubble_sort_steps(&[3, 1, 2]);
        assert_eq!(frames[0].kind, SortEvent::Init);
        assert_eq!(frames[1].kind, SortEvent::Compare);
        assert_eq!(frames[1].comparison, vec![0, 1]);
        assert_eq!(frames[2].kind, SortEvent::Swap);
        assert_eq!(frames[2].array, vec![1, 3, 2]);
        let last = frames.last().unwrap();
        assert_eq!(last.kind, SortEvent::Done);
        assert_eq!(last.array, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_input_never_swaps() {
        let frames = bubble_sort_steps(&[1, 2, 3, 4]);
        assert!(frames.iter().all(|f| f.kind != SortEvent::Swap));
        // n(n-1)/2 comparisons plus init and done
        assert_eq!(frames.len(), 6 + 2);
    }
}

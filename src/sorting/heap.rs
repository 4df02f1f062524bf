use super::recorder::Recorder;
use crate::frame::SortFrame;

/// Heap sort: bottom-up max-heap build, then repeated root extraction
pub fn heap_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Heap Sort");
    let n = rec.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut rec, n, root);
    }

    for end in (1..n).rev() {
        rec.swap(0, end, format!("Moving max element to index {}", end));
        sift_down(&mut rec, end, 0);
    }

    rec.finish("Heap Sort complete")
}

/// Restore the max-heap property for the subtree at `root` within `values[..size]`
fn sift_down(rec: &mut Recorder, size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < size {
            rec.compare(
                left,
                largest,
                format!("Comparing left child {} with current largest {}", left, largest),
            );
            if rec.values[left] > rec.values[largest] {
                largest = left;
            }
        }

        if right < size {
            rec.compare(
                right,
                largest,
                format!("Comparing right child {} with current largest {}", right, largest),
            );
            if rec.values[right] > rec.values[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }

        rec.swap(
            root,
            largest,
            format!("Swapping to maintain heap at indices {} and {}", root, largest),
        );
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::SortEvent;

    #[test]
    fn test_first_extraction_moves_max_to_end() {
        let frames = heap_sort_steps(&[1, 5, 3, 2]);
        let first_extract = frames
            .iter()
            .find(|f| f.description.starts_with("Moving max"))
            .unwrap();
        assert_eq!(first_extract.swap, vec![0, 3]);
        assert_eq!(first_extract.array[3], 5);
    }

    #[test]
    fn test_single_element_has_no_comparisons() {
        let frames = heap_sort_steps(&[7]);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].kind, SortEvent::Done);
    }
}

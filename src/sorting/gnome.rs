use super::recorder::Recorder;
use crate::frame::SortFrame;

/// Gnome sort: step forward while ordered, swap and step back otherwise
pub fn gnome_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Gnome Sort");
    let n = rec.len();
    if n <= 1 {
        return rec.finish("Array is already sorted");
    }

    let mut i = 1;
    while i < n {
        rec.compare(i - 1, i, format!("Compare indices {} and {}", i - 1, i));
        if rec.values[i - 1] <= rec.values[i] {
            i += 1;
        } else {
            rec.swap(i - 1, i, format!("Swap indices {} and {}", i - 1, i));
            i = (i - 1).max(1);
        }
    }

    rec.finish("Gnome Sort complete")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::SortEvent;

    #[test]
    fn test_steps_back_after_swap() {
        let frames = gnome_sort_steps(&[1, 3, 2]);
        let kinds: Vec<_> = frames.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SortEvent::Init,
                SortEvent::Compare,
                SortEvent::Compare,
                SortEvent::Swap,
                SortEvent::Compare,
                SortEvent::Compare,
                SortEvent::Done
            ]
        );
    }
}

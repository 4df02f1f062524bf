use super::recorder::Recorder;
use crate::frame::{SortEvent, SortFrame};

/// LSD radix sort in base 10.
///
/// Digits are taken from the raw values when every value is non-negative.
/// If negatives are present every key is shifted by `-min` first.
pub fn radix_sort_steps(input: &[i64]) -> Vec<SortFrame> {
    let mut rec = Recorder::start(input, "Starting Radix Sort (base 10)");
    if rec.len() <= 1 {
        return rec.finish("Radix Sort complete");
    }
    let min = rec.values.iter().copied().min().unwrap_or_default();
    let base = min.min(0);
    let key = |value: i64| value.abs_diff(base);

    let max_key = rec.values.iter().map(|&v| key(v)).max().unwrap_or(0);
    let n = rec.len();

    let mut exp: u64 = 1;
    while max_key / exp > 0 {
        rec.frame(
            SortEvent::Select,
            &[],
            &[],
            &[],
            format!("Sorting by digit place exp={}", exp),
        );

        let digit = |value: i64| ((key(value) / exp) % 10) as usize;
        let mut count = [0usize; 10];

        for i in 0..n {
            let value = rec.values[i];
            let d = digit(value);
            count[d] += 1;
            rec.frame(
                SortEvent::Write,
                &[i],
                &[],
                &[],
                format!("Counting digit {} for value {}", d, value),
            );
        }

        for d in 1..10 {
            count[d] += count[d - 1];
        }

        // Back to front keeps equal digits in input order
        let mut output = vec![0i64; n];
        for &value in rec.values.iter().rev() {
            let d = digit(value);
            count[d] -= 1;
            output[count[d]] = value;
        }

        for (i, value) in output.into_iter().enumerate() {
            rec.write(i, value, format!("Writing output back at index {}", i));
        }

        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }

    rec.finish("Radix Sort complete")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_follow_digit_places() {
        let frames = radix_sort_steps(&[170, 45, 75, 90, 802, 24, 2, 66]);
        let passes = frames
            .iter()
            .filter(|f| f.description.starts_with("Sorting by digit"))
            .count();
        assert_eq!(passes, 3);
        assert_eq!(
            frames.last().unwrap().array,
            vec![2, 24, 45, 66, 75, 90, 170, 802]
        );
    }

    #[test]
    fn test_negative_values() {
        let frames = radix_sort_steps(&[3, -10, 7, -1, 0]);
        assert_eq!(frames.last().unwrap().array, vec![-10, -1, 0, 3, 7]);
    }

    #[test]
    fn test_all_zero_has_no_pass() {
        let frames = radix_sort_steps(&[0, 0]);
        assert_eq!(frames.len(), 2);
    }
}

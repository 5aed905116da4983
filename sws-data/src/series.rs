//! Trailing-window and shift operations over one chronological series,
//! plus the fill policy for their undefined leading values.
//!
//! Undefined values are represented as `None` until [`backfill_then_zero`]
//! resolves them.

/// Trailing mean over `window` values, inclusive of the current one.
///
/// The first `window - 1` positions have no full window and are `None`.
/// A zero-width window is undefined everywhere.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let sum: f64 = values[i + 1 - window..=i].iter().sum();
                Some(sum / window as f64)
            }
        })
        .collect()
}

/// The value `periods` positions earlier; the first `periods` positions
/// are `None`.
pub fn lag(values: &[f64], periods: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| if i >= periods { Some(values[i - periods]) } else { None })
        .collect()
}

/// Propagate the next defined value backward into every gap before it.
/// Gaps after the last defined value are left untouched.
pub fn backfill(values: &mut [Option<f64>]) {
    let mut next: Option<f64> = None;
    for value in values.iter_mut().rev() {
        match value {
            Some(v) => next = Some(*v),
            None => *value = next,
        }
    }
}

/// Backfill, then resolve whatever is still undefined to zero.
pub fn backfill_then_zero(mut values: Vec<Option<f64>>) -> Vec<f64> {
    backfill(&mut values);
    values.into_iter().map(|v| v.unwrap_or(0.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_mean_warmup() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let means = rolling_mean(&values, 3);
        assert_eq!(means, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_rolling_mean_short_series() {
        assert_eq!(rolling_mean(&[1.0, 2.0], 30), vec![None, None]);
        assert_eq!(rolling_mean(&[1.0], 0), vec![None]);
    }

    #[test]
    fn test_lag() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(lag(&values, 1), vec![None, Some(10.0), Some(20.0)]);
        assert_eq!(lag(&values, 7), vec![None, None, None]);
    }

    #[test]
    fn test_backfill_leading_gap() {
        let mut values = vec![None, None, Some(3.0), None, Some(5.0)];
        backfill(&mut values);
        assert_eq!(values, vec![Some(3.0), Some(3.0), Some(3.0), Some(5.0), Some(5.0)]);
    }

    #[test]
    fn test_zero_fill_after_backfill() {
        assert_eq!(backfill_then_zero(vec![None, Some(2.0), None]), vec![2.0, 2.0, 0.0]);
        assert_eq!(backfill_then_zero(vec![None, None]), vec![0.0, 0.0]);
    }
}

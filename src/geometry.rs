//! Point list arithmetic.
//!
//! Both functions pair up coordinates the way [`Iterator::zip`] does, so if the lists differ in
//! length, the extra coordinates of the longer one are ignored.

/// Computes the Euclidean distance between two points given as coordinate lists.
pub fn distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

/// Subtracts `b` from `a`, coordinate by coordinate.
pub fn subtraction(a: &[f32], b: &[f32]) -> Vec<f32> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn distance_3d() {
        assert_eq!(distance(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(distance(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_abs_diff_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_abs_diff_eq!(distance(&[1.0, 1.0, 1.0], &[2.0, 2.0, 2.0]), 3.0f32.sqrt());
    }

    #[test]
    fn distance_is_symmetric() {
        let a = [0.25, -1.5, 4.0];
        let b = [2.0, 0.5, -1.0];
        assert_abs_diff_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn subtract() {
        assert_eq!(subtraction(&[3.0, 2.0, 1.0], &[1.0, 1.0, 1.0]), [2.0, 1.0, 0.0]);
        assert_eq!(subtraction(&[0.5], &[1.0]), [-0.5]);
        assert!(subtraction(&[], &[]).is_empty());
    }

    #[test]
    fn mismatched_lengths_are_truncated() {
        assert_eq!(subtraction(&[3.0, 2.0, 1.0], &[1.0, 1.0]), [2.0, 1.0]);
        assert_abs_diff_eq!(distance(&[3.0, 4.0, 100.0], &[0.0, 0.0]), 5.0);
    }
}

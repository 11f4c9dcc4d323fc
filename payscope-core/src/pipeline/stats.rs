//! Small descriptive statistics helpers.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Pearson correlation coefficient of two equally long series.
///
/// Returns `None` when the series differ in length, hold fewer than two
/// points, or either one is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    if is_constant(xs) || is_constant(ys) {
        return None;
    }

    // Scaled into [-1, 1] so the sums of squares stay finite.
    let xs = scaled(xs);
    let ys = scaled(ys);
    let mean_x = mean(&xs)?;
    let mean_y = mean(&ys)?;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(&ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denominator = sxx.sqrt() * syy.sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    Some((sxy / denominator).clamp(-1.0, 1.0))
}

fn scaled(values: &[f64]) -> Vec<f64> {
    let max = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if max == 0.0 || !max.is_finite() {
        return values.to_vec();
    }
    values.iter().map(|v| v / max).collect()
}

// Exact comparison: a constant series has no variance regardless of rounding in the mean.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn test_perfect_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [10.0, 20.0, 30.0, 40.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(pearson(&xs, &up).unwrap(), 1.0);
        assert_relative_eq!(pearson(&xs, &down).unwrap(), -1.0);
    }

    #[test]
    fn test_undefined_cases() {
        assert_eq!(pearson(&[], &[]), None);
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[5.0, 5.0]), None);
        assert_eq!(pearson(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn test_large_magnitudes_stay_defined() {
        let r = pearson(&[1e160, 2e160, 3e160], &[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(r, 1.0, epsilon = 1e-12);

        let r = pearson(&[f64::MAX, 0.0, f64::MAX / 2.0], &[3.0, 1.0, 2.0]).unwrap();
        assert_relative_eq!(r, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_value() {
        // Sample dataset: salary vs performance score.
        let salary = [45000.0, 52000.0, 62000.0, 39000.0, 58000.0];
        let score = [78.0, 85.0, 92.0, 70.0, 81.0];
        let r = pearson(&salary, &score).unwrap();
        assert_relative_eq!(r, 0.8982, epsilon = 1e-4);
    }
}

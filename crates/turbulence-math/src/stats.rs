//! Sample statistics for checking seeded particle distributions.

/// Mean and population standard deviation.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len().max(1) as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// One-sample Kolmogorov-Smirnov statistic against U[0, 1).
///
/// Returns `sup |F_n(x) - x|`. Empty input gives 0.
pub fn ks_statistic_uniform(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let x = x.clamp(0.0, 1.0);
            let above = (i as f64 + 1.0) / n - x;
            let below = x - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

/// Asymptotic KS critical value `c(alpha) / sqrt(n)`.
///
/// `c(alpha) = sqrt(-ln(alpha / 2) / 2)`, valid for n >~ 35.
pub fn ks_critical_value(n: usize, alpha: f64) -> f64 {
    let c = (-(alpha / 2.0).ln() / 2.0).sqrt();
    c / (n.max(1) as f64).sqrt()
}

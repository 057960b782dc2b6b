use crate::utils::{Result, SimError};

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` values from `start` to `end` inclusive, evenly spaced on a log scale.
///
/// Both ends must be positive.
pub fn geomspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>> {
    if !(start > 0.0 && end > 0.0 && start.is_finite() && end.is_finite()) {
        return Err(SimError::InvalidParameter(format!(
            "geomspace bounds must be positive and finite, got ({}, {})",
            start, end
        )));
    }
    let mut values: Vec<f64> = linspace(start.ln(), end.ln(), n)
        .into_iter()
        .map(f64::exp)
        .collect();
    // Pin the ends so exp(ln(x)) rounding doesn't leak out
    if let Some(first) = values.first_mut() {
        *first = start;
    }
    if n > 1 {
        if let Some(last) = values.last_mut() {
            *last = end;
        }
    }
    Ok(values)
}

//! Summary statistics and the fixed confidence tiers.

/// Arithmetic mean. Empty input yields `NaN`.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn population_std_dev(values: &[f64]) -> f64 {
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Confidence of a continuous score from its spread across liked designs.
pub fn spread_confidence(std_dev: f64) -> f64 {
    if std_dev < 2.0 {
        0.90
    } else if std_dev < 4.0 {
        0.77
    } else {
        0.60
    }
}

/// Confidence of a categorical choice from how often it was picked.
pub fn frequency_confidence(frequency: usize, total: usize) -> f64 {
    let percentage = (frequency as f64 / total as f64) * 100.0;
    if percentage >= 85.0 {
        0.95
    } else if percentage >= 70.0 {
        0.82
    } else if percentage >= 55.0 {
        0.70
    } else {
        0.50
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeEstimate<T> {
    pub value: T,
    pub frequency: usize,
    pub confidence: f64,
}

/// Most frequent value. Ties go to the value seen first.
pub fn mode<T: Copy + PartialEq>(items: &[T]) -> Option<ModeEstimate<T>> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(value, _)| value == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((*item, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((value, count));
        }
    }

    best.map(|(value, frequency)| ModeEstimate {
        value,
        frequency,
        confidence: frequency_confidence(frequency, items.len()),
    })
}

/// True iff strictly more than half of the flags are set.
pub fn majority(flags: &[bool]) -> bool {
    let set = flags.iter().filter(|&&f| f).count();
    set * 2 > flags.len()
}

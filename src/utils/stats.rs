//! Descriptive statistics over a captured output sequence.

/// Summary of a sample of generator outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// Number of values in the sample.
    pub size: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Coefficient of variation (`std_dev / mean`), absent when the mean is zero.
    pub var_coef: Option<f64>,
}

impl SampleStats {
    /// Computes the summary of `samples`, or `None` for an empty slice.
    pub fn from_samples(samples: &[u32]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let size = samples.len();
        let n = size as f64;
        let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
        let variance = samples
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();
        let var_coef = if mean == 0.0 {
            None
        } else {
            Some(std_dev / mean)
        };
        Some(SampleStats {
            size,
            mean,
            std_dev,
            var_coef,
        })
    }
}

//! Design-matrix construction with reference-level encoding.
//!
//! Categorical columns enter the model through one-hot indicators with
//! a held-out baseline: the reference level is the most frequent level,
//! ties broken toward the one observed first. Each remaining level gets
//! a 0/1 column, so its coefficient reads directly as the adjusted gap
//! against the baseline, in outcome units.

use nalgebra::DMatrix;

/// Reference-level encoding of one categorical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEncoding {
    /// Baseline level held out of the design matrix.
    pub reference: String,
    /// Non-reference levels in first-observed order; one indicator
    /// column each.
    pub indicators: Vec<String>,
}

/// Pick the index of the reference level from per-level counts.
///
/// Counts are in first-observed order; the most frequent level wins and
/// ties resolve to the smaller index.
pub(crate) fn reference_index(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &count) in counts.iter().enumerate().skip(1) {
        if count > counts[best] {
            best = i;
        }
    }
    best
}

/// Encode the observed labels of a categorical column.
///
/// # Panics
///
/// Panics if `labels` is empty; callers exclude missing rows and check
/// for degenerate grouping before encoding.
pub fn encode_levels(labels: &[String]) -> LevelEncoding {
    assert!(!labels.is_empty(), "cannot encode an empty label column");

    // Distinct levels in first-observed order, with counts
    let mut levels: Vec<String> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for label in labels {
        match levels.iter().position(|l| l == label) {
            Some(i) => counts[i] += 1,
            None => {
                levels.push(label.clone());
                counts.push(1);
            }
        }
    }

    let reference_idx = reference_index(&counts);
    let reference = levels[reference_idx].clone();
    let indicators = levels
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != reference_idx)
        .map(|(_, level)| level)
        .collect();

    LevelEncoding {
        reference,
        indicators,
    }
}

/// Incremental builder for a design matrix with an intercept.
///
/// Terms are appended left to right, so callers know which coefficient
/// indices a predictor occupies by reading [`DesignBuilder::term_count`]
/// before and after adding it.
#[derive(Debug, Clone)]
pub struct DesignBuilder {
    n_rows: usize,
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl DesignBuilder {
    /// Start a design with `n_rows` observations and an intercept term.
    pub fn new(n_rows: usize) -> Self {
        Self {
            n_rows,
            names: vec!["intercept".to_string()],
            columns: vec![vec![1.0; n_rows]],
        }
    }

    /// Number of terms (columns) added so far, intercept included.
    pub fn term_count(&self) -> usize {
        self.names.len()
    }

    /// Append a numeric predictor.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per observation.
    pub fn numeric(&mut self, name: &str, values: &[f64]) {
        assert_eq!(values.len(), self.n_rows, "numeric term length mismatch");
        self.names.push(name.to_string());
        self.columns.push(values.to_vec());
    }

    /// Append a categorical predictor as reference-encoded indicators.
    ///
    /// Returns the encoding so the caller can report the baseline and
    /// match coefficients to levels.
    ///
    /// # Panics
    ///
    /// Panics if `labels` does not have one entry per observation.
    pub fn categorical(&mut self, name: &str, labels: &[String]) -> LevelEncoding {
        assert_eq!(labels.len(), self.n_rows, "categorical term length mismatch");
        let encoding = encode_levels(labels);
        for level in &encoding.indicators {
            self.names.push(format!("{}[{}]", name, level));
            self.columns.push(
                labels
                    .iter()
                    .map(|l| if l == level { 1.0 } else { 0.0 })
                    .collect(),
            );
        }
        encoding
    }

    /// Assemble the design matrix and its term names.
    pub fn build(self) -> (DMatrix<f64>, Vec<String>) {
        let k = self.columns.len();
        let matrix = DMatrix::from_fn(self.n_rows, k, |r, c| self.columns[c][r]);
        (matrix, self.names)
    }
}

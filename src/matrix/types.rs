use std::collections::HashMap;

use super::MatrixError;

/// A Pugh-style decision matrix: a fixed, ordered set of options scored
/// against an open, insertion-ordered set of criteria.
///
/// Options are frozen at construction and define the valid row keys.
/// Criteria are introduced by the first [`set_score`](Self::set_score) that
/// mentions them and keep their first-seen order forever; that order is what
/// renderers and derived matrices iterate, never hash order.
///
/// Scores are stored sparsely. A cell that was never set reads as 0.0, and
/// stays unstored until something writes it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    pub(crate) options: Vec<String>,
    pub(crate) criteria: Vec<String>,
    pub(crate) cells: HashMap<(String, String), f64>,
}

impl ScoreMatrix {
    /// Create a matrix over the given options, with no criteria and no
    /// scores yet.
    ///
    /// Options are stored verbatim, duplicates included; deduplication is
    /// the caller's responsibility.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScoreMatrix {
            options: options.into_iter().map(Into::into).collect(),
            criteria: Vec::new(),
            cells: HashMap::new(),
        }
    }

    /// The options, in construction order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The criteria scored so far, in first-seen order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn has_option(&self, opt: &str) -> bool {
        self.options.iter().any(|o| o == opt)
    }

    pub fn has_criterion(&self, cri: &str) -> bool {
        self.criteria.iter().any(|c| c == cri)
    }

    pub(crate) fn check_option(&self, opt: &str) -> Result<(), MatrixError> {
        if self.has_option(opt) {
            Ok(())
        } else {
            Err(MatrixError::InvalidOption(opt.to_string()))
        }
    }

    pub(crate) fn check_criterion(&self, cri: &str) -> Result<(), MatrixError> {
        if self.has_criterion(cri) {
            Ok(())
        } else {
            Err(MatrixError::InvalidCriterion(cri.to_string()))
        }
    }

    /// Set the score of `opt` against `cri`, introducing `cri` as a new
    /// criterion if it has never been scored before.
    ///
    /// Overwriting an existing cell never moves its criterion in the order.
    /// Fails if `opt` was not in the option set at construction.
    pub fn set_score(&mut self, opt: &str, cri: &str, val: f64) -> Result<(), MatrixError> {
        self.check_option(opt)?;
        if !self.has_criterion(cri) {
            self.criteria.push(cri.to_string());
        }
        self.cells.insert((opt.to_string(), cri.to_string()), val);
        Ok(())
    }

    /// Apply [`set_score`](Self::set_score) to each `(option, criterion,
    /// value)` entry in order.
    ///
    /// Entries are applied sequentially with no rollback: a failing entry
    /// stops the call but leaves every earlier entry in place. Validate the
    /// options up front if all-or-nothing behavior is needed.
    pub fn set_scores<'a, I>(&mut self, entries: I) -> Result<(), MatrixError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, f64)>,
    {
        for (opt, cri, val) in entries {
            self.set_score(opt, cri, val)?;
        }
        Ok(())
    }

    /// Read one cell, validating both names.
    ///
    /// Returns the stored value, or 0.0 when the criterion is known but this
    /// particular cell was never set.
    pub fn get_score(&self, opt: &str, cri: &str) -> Result<f64, MatrixError> {
        self.check_option(opt)?;
        self.check_criterion(cri)?;
        Ok(self.cell(opt, cri))
    }

    /// Unvalidated cell read for renderers walking [`options`](Self::options)
    /// and [`criteria`](Self::criteria): unknown names and unset cells both
    /// read as 0.0.
    pub fn cell(&self, opt: &str, cri: &str) -> f64 {
        self.cells
            .get(&(opt.to_string(), cri.to_string()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether this cell holds an explicitly stored value (as opposed to
    /// reading as the 0.0 default).
    pub fn is_set(&self, opt: &str, cri: &str) -> bool {
        self.cells.contains_key(&(opt.to_string(), cri.to_string()))
    }

    /// The largest score over the full option × criterion cross product.
    /// Unset cells participate as 0.0.
    pub fn max_score(&self) -> Result<f64, MatrixError> {
        self.extremum(f64::max)
    }

    /// The smallest score over the full option × criterion cross product.
    /// Unset cells participate as 0.0.
    pub fn min_score(&self) -> Result<f64, MatrixError> {
        self.extremum(f64::min)
    }

    fn extremum(&self, pick: fn(f64, f64) -> f64) -> Result<f64, MatrixError> {
        let mut acc: Option<f64> = None;
        for cri in &self.criteria {
            for opt in &self.options {
                let val = self.cell(opt, cri);
                acc = Some(match acc {
                    Some(best) => pick(best, val),
                    None => val,
                });
            }
        }
        acc.ok_or(MatrixError::NoCriteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn travel() -> ScoreMatrix {
        let mut m = ScoreMatrix::new(["Car", "Bus", "Train"]);
        m.set_score("Car", "Fuel", -1.0).unwrap();
        m.set_score("Train", "Price", 1.0).unwrap();
        m
    }

    #[test]
    fn test_new_matrix_empty() {
        let m = ScoreMatrix::new(["Car", "Bus", "Train"]);
        assert_eq!(m.options(), &["Car", "Bus", "Train"]);
        assert!(m.criteria().is_empty());
    }

    #[test]
    fn test_set_score_introduces_criterion() {
        let m = travel();
        assert_eq!(m.criteria(), &["Fuel", "Price"]);
    }

    #[test]
    fn test_set_score_unknown_option() {
        let mut m = travel();
        assert_eq!(
            m.set_score("Plane", "Fuel", 1.0),
            Err(MatrixError::InvalidOption("Plane".to_string()))
        );
        // failed call left nothing behind
        assert_eq!(m.criteria(), &["Fuel", "Price"]);
    }

    #[test]
    fn test_unset_cell_reads_zero() {
        let m = travel();
        assert_eq!(m.get_score("Bus", "Fuel").unwrap(), 0.0);
        assert!(!m.is_set("Bus", "Fuel"));
    }

    #[test]
    fn test_get_score_unknown_criterion() {
        let m = travel();
        assert_eq!(
            m.get_score("Car", "Comfort"),
            Err(MatrixError::InvalidCriterion("Comfort".to_string()))
        );
    }

    #[test]
    fn test_get_score_unknown_option() {
        let m = travel();
        assert_eq!(
            m.get_score("Plane", "Fuel"),
            Err(MatrixError::InvalidOption("Plane".to_string()))
        );
    }

    #[test]
    fn test_repeated_set_is_idempotent_on_criteria() {
        let mut m = travel();
        m.set_score("Car", "Fuel", -1.0).unwrap();
        m.set_score("Bus", "Fuel", 0.5).unwrap();
        assert_eq!(m.criteria(), &["Fuel", "Price"]);
    }

    #[test]
    fn test_overwrite_keeps_criterion_position() {
        let mut m = travel();
        m.set_score("Train", "Fuel", 2.0).unwrap();
        assert_eq!(m.criteria(), &["Fuel", "Price"]);
        assert_eq!(m.get_score("Train", "Fuel").unwrap(), 2.0);
    }

    #[test]
    fn test_extrema_include_defaults() {
        let m = travel();
        // Bus/Fuel etc. default to 0.0 but the stored -1.0 and 1.0 win
        assert_eq!(m.min_score().unwrap(), -1.0);
        assert_eq!(m.max_score().unwrap(), 1.0);
    }

    #[test]
    fn test_extrema_defaults_can_win() {
        let mut m = ScoreMatrix::new(["Car", "Bus"]);
        m.set_score("Car", "Fuel", 3.0).unwrap();
        // Bus/Fuel is an unset 0.0, which is the minimum
        assert_eq!(m.min_score().unwrap(), 0.0);
        assert_eq!(m.max_score().unwrap(), 3.0);
    }

    #[test]
    fn test_extrema_fail_without_criteria() {
        let m = ScoreMatrix::new(["Car", "Bus"]);
        assert_eq!(m.min_score(), Err(MatrixError::NoCriteria));
        assert_eq!(m.max_score(), Err(MatrixError::NoCriteria));
    }

    #[test]
    fn test_set_scores_applies_in_order() {
        let mut m = ScoreMatrix::new(["Car", "Bus"]);
        m.set_scores([("Car", "Fuel", -1.0), ("Bus", "Price", 0.5)])
            .unwrap();
        assert_eq!(m.criteria(), &["Fuel", "Price"]);
        assert_eq!(m.get_score("Bus", "Price").unwrap(), 0.5);
    }

    #[test]
    fn test_set_scores_no_rollback() {
        let mut m = ScoreMatrix::new(["Car", "Bus"]);
        let result = m.set_scores([
            ("Car", "Fuel", -1.0),
            ("Plane", "Fuel", 9.0),
            ("Bus", "Fuel", 0.5),
        ]);
        assert_eq!(result, Err(MatrixError::InvalidOption("Plane".to_string())));
        // the entry before the failure stuck, the one after never ran
        assert_eq!(m.get_score("Car", "Fuel").unwrap(), -1.0);
        assert!(!m.is_set("Bus", "Fuel"));
    }

    #[test]
    fn test_cell_never_fails() {
        let m = travel();
        assert_eq!(m.cell("Plane", "Nonsense"), 0.0);
        assert_eq!(m.cell("Car", "Fuel"), -1.0);
    }
}

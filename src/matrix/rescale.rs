use super::{MatrixError, ScoreMatrix};

impl ScoreMatrix {
    /// Linearly remap every explicitly stored score into [0,1] using the
    /// matrix-wide extrema, returning a new matrix.
    ///
    /// Only stored cells are rewritten. Cells relying on the 0.0 default are
    /// not materialized and keep reading 0.0 afterwards, even though the
    /// defaults did participate in the extrema.
    pub fn rescaled(&self) -> Result<ScoreMatrix, MatrixError> {
        let mn = self.min_score()?;
        let range = self.max_score()? - mn;
        if range == 0.0 {
            return Err(MatrixError::DegenerateRange);
        }
        let mut out = self.clone();
        for val in out.cells.values_mut() {
            *val = (*val - mn) / range;
        }
        Ok(out)
    }

    /// Rescale each criterion's column independently against that column's
    /// own extrema, returning a new matrix.
    ///
    /// The whole call fails on the first degenerate column in criteria
    /// order, reporting which criterion was flat. As with
    /// [`rescaled`](Self::rescaled), only stored cells are rewritten.
    pub fn rescaled_per_criterion(&self) -> Result<ScoreMatrix, MatrixError> {
        if self.criteria.is_empty() {
            return Err(MatrixError::NoCriteria);
        }
        let mut out = self.clone();
        for cri in &self.criteria {
            let (mn, mx) = self.column_extrema(cri);
            let range = mx - mn;
            if range == 0.0 {
                return Err(MatrixError::DegenerateColumn(cri.clone()));
            }
            for opt in &self.options {
                let key = (opt.clone(), cri.clone());
                if let Some(val) = out.cells.get_mut(&key) {
                    *val = (*val - mn) / range;
                }
            }
        }
        Ok(out)
    }

    /// Extrema restricted to one criterion's column, defaults included.
    fn column_extrema(&self, cri: &str) -> (f64, f64) {
        let mut mn = f64::INFINITY;
        let mut mx = f64::NEG_INFINITY;
        for opt in &self.options {
            let val = self.cell(opt, cri);
            mn = mn.min(val);
            mx = mx.max(val);
        }
        (mn, mx)
    }
}

use super::{MatrixError, ScoreMatrix};

impl ScoreMatrix {
    /// Project onto a subset of criteria, in the order given, returning a
    /// new matrix over the same options.
    ///
    /// Unlike rescaling, projection materializes every cell: a cell that
    /// defaulted to 0.0 in the source is explicitly stored as 0.0 in the
    /// result.
    pub fn select_criteria<S: AsRef<str>>(&self, criteria: &[S]) -> Result<ScoreMatrix, MatrixError> {
        for cri in criteria {
            self.check_criterion(cri.as_ref())?;
        }
        let mut out = ScoreMatrix::new(self.options.iter().cloned());
        for cri in criteria {
            let cri = cri.as_ref();
            for opt in &self.options {
                out.set_score(opt, cri, self.cell(opt, cri))?;
            }
        }
        Ok(out)
    }

    /// Restrict to a subset of options, keeping the full criteria set in its
    /// existing order, returning a new matrix. Materializes every cell.
    pub fn select_options<S: AsRef<str>>(&self, options: &[S]) -> Result<ScoreMatrix, MatrixError> {
        for opt in options {
            self.check_option(opt.as_ref())?;
        }
        let mut out = ScoreMatrix::new(options.iter().map(|o| o.as_ref().to_string()));
        for cri in &self.criteria {
            for opt in options {
                let opt = opt.as_ref();
                out.set_score(opt, cri, self.cell(opt, cri))?;
            }
        }
        Ok(out)
    }

    /// A copy with every stored value zeroed but the criteria order and the
    /// stored key set preserved. Useful as an accumulator seed before
    /// [`add`](Self::add).
    pub fn zeroed(&self) -> ScoreMatrix {
        let mut out = self.clone();
        for val in out.cells.values_mut() {
            *val = 0.0;
        }
        out
    }

    /// Elementwise addition driven by `other`'s stored cells, returning a
    /// new matrix.
    ///
    /// The result starts as a copy of `self`; every cell explicitly stored
    /// in `other` then gains `other`'s value on top of the receiver's
    /// (possibly defaulted) value. Cells stored only in the receiver are
    /// untouched, so `a.add(&b)` and `b.add(&a)` differ whenever the stored
    /// key sets differ. Fails if `other` stores a cell for an option the
    /// receiver does not have; criteria new to the receiver are appended in
    /// `other`'s criteria order.
    pub fn add(&self, other: &ScoreMatrix) -> Result<ScoreMatrix, MatrixError> {
        let mut out = self.clone();
        // walk other's ordered lists, not its hash map, so appended criteria
        // come out in a stable order
        for cri in &other.criteria {
            for opt in &other.options {
                if !other.is_set(opt, cri) {
                    continue;
                }
                let sum = out.cell(opt, cri) + other.cell(opt, cri);
                out.set_score(opt, cri, sum)?;
            }
        }
        Ok(out)
    }
}

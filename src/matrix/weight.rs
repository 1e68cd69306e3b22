use std::collections::HashMap;

use super::{MatrixError, ScoreMatrix};

impl ScoreMatrix {
    /// Append (or overwrite) a derived criterion whose per-option score is
    /// the weighted sum of the given criteria.
    ///
    /// Every key in `weights` must already be a known criterion. Weights are
    /// used exactly as supplied; normalize them yourself if a convex
    /// combination is intended. All per-option sums are computed before any
    /// is stored, so overwriting an existing criterion never feeds its own
    /// recomputation and a validation failure leaves the matrix untouched.
    pub fn weight_criteria(
        &mut self,
        name: &str,
        weights: &HashMap<String, f64>,
    ) -> Result<(), MatrixError> {
        for cri in weights.keys() {
            self.check_criterion(cri)?;
        }
        // summed in criteria order, not hash order, so repeated runs agree
        // to the last bit
        let sums: Vec<f64> = self
            .options
            .iter()
            .map(|opt| {
                self.criteria
                    .iter()
                    .filter_map(|cri| weights.get(cri).map(|w| w * self.cell(opt, cri)))
                    .sum()
            })
            .collect();
        let opts = self.options.clone();
        for (opt, sum) in opts.iter().zip(sums) {
            self.set_score(opt, name, sum)?;
        }
        Ok(())
    }

    /// Generate one derived criterion per current criterion, each favoring
    /// that criterion twice as heavily as the rest.
    ///
    /// Shorthand for [`weight_mixture_of`](Self::weight_mixture_of) over all
    /// criteria known at call time; the derived `_High` columns themselves
    /// do not join the subset mid-run.
    pub fn weight_mixture(&mut self) -> Result<(), MatrixError> {
        let all = self.criteria.clone();
        self.weight_mixture_of(&all)
    }

    /// For each criterion `c` of `subset`, in order, append a derived
    /// criterion named `"<c>_High"` scored by a weight vector over exactly
    /// the subset: base weight `1/(1+n)` for everything, `2/(1+n)` for `c`
    /// itself, where `n` is the subset size.
    ///
    /// The weights sum to 1 for any subset, so each derived column is a
    /// convex blend that leans twice as hard on its favored criterion.
    /// Deterministic: the same subset and scores always produce the same
    /// columns with the same values.
    pub fn weight_mixture_of<S: AsRef<str>>(&mut self, subset: &[S]) -> Result<(), MatrixError> {
        for cri in subset {
            self.check_criterion(cri.as_ref())?;
        }
        let base = 1.0 / (1.0 + subset.len() as f64);
        for favored in subset {
            let favored = favored.as_ref();
            let mut weights: HashMap<String, f64> = subset
                .iter()
                .map(|cri| (cri.as_ref().to_string(), base))
                .collect();
            weights.insert(favored.to_string(), base * 2.0);
            self.weight_criteria(&format!("{favored}_High"), &weights)?;
        }
        Ok(())
    }
}

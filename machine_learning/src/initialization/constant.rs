use super::ParamGen;

/// A parameter generator that always generates the same value.
pub struct ConstParamGen {
    value: f64,
    remaining: usize,
}

impl ConstParamGen {
    /// Creates a new `ConstParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `value` - The value to always generate.
    /// * `limit` - The maximum amount of times to generate that value.
    pub fn new(value: f64, limit: usize) -> Self {
        Self {
            value,
            remaining: limit,
        }
    }
}

impl ParamGen for ConstParamGen {
    fn sample(&mut self, mut n: usize) -> Option<Vec<f64>> {
        if self.remaining == 0 {
            return None;
        }

        n = n.min(self.remaining);
        self.remaining -= n;
        Some(vec![self.value; n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MlErr;

    #[test]
    fn empty() {
        let mut param_gen = ConstParamGen::new(0.5, 0);
        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn partial() {
        let mut param_gen = ConstParamGen::new(0.5, 3);

        assert_eq!(param_gen.sample(2).unwrap(), vec![0.5; 2]);
        assert_eq!(param_gen.sample(2).unwrap(), vec![0.5; 1]);
        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn generate_fails_when_exhausted() {
        let mut param_gen = ConstParamGen::new(0.5, 1);

        let err = param_gen.generate(2).unwrap_err();
        assert_eq!(
            err,
            MlErr::SizeMismatch {
                what: "generated params",
                got: 1,
                expected: 2
            }
        );
    }
}

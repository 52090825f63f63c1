use crate::error::Error;
use crate::population::Candidate;

/// An *objective* projects a candidate onto a scalar value to be minimized.
///
/// The engine never inspects candidates directly; everything it knows about
/// solution quality goes through a pair of `Objective` implementors. An
/// objective must be a pure function of the candidate: values are recomputed
/// every generation and never cached across generations.
pub trait Objective {
    fn evaluate(&self, candidate: &Candidate) -> f64;
}

/// A pair of objective values for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectivePoint {
    pub f1: f64,
    pub f2: f64,
}

/// Evaluates both objectives over a whole population.
///
/// Fails fast if an evaluator returns NaN or an infinity; a non-finite value
/// would poison every later dominance comparison without crashing.
pub fn evaluate_population<O1, O2>(
    population: &[Candidate],
    f1: &O1,
    f2: &O2,
) -> Result<(Vec<f64>, Vec<f64>), Error>
where
    O1: Objective,
    O2: Objective,
{
    let mut values1 = Vec::with_capacity(population.len());
    let mut values2 = Vec::with_capacity(population.len());

    for (index, candidate) in population.iter().enumerate() {
        let v1 = f1.evaluate(candidate);
        if !v1.is_finite() {
            return Err(Error::NonFiniteObjective {
                objective: 0,
                index,
            });
        }
        let v2 = f2.evaluate(candidate);
        if !v2.is_finite() {
            return Err(Error::NonFiniteObjective {
                objective: 1,
                index,
            });
        }
        values1.push(v1);
        values2.push(v2);
    }

    Ok((values1, values2))
}

#[cfg(test)]
mod tests {
    use super::{evaluate_population, Objective};
    use crate::error::Error;
    use crate::population::Candidate;

    struct Head;
    impl Objective for Head {
        fn evaluate(&self, candidate: &Candidate) -> f64 {
            candidate.features()[0]
        }
    }

    struct Sum;
    impl Objective for Sum {
        fn evaluate(&self, candidate: &Candidate) -> f64 {
            candidate.features().iter().sum()
        }
    }

    // 1/x[0]: blows up to infinity at zero, for the fail-fast test
    struct Inverse;
    impl Objective for Inverse {
        fn evaluate(&self, candidate: &Candidate) -> f64 {
            1.0 / candidate.features()[0]
        }
    }

    fn candidate(features: &[f64]) -> Candidate {
        Candidate::new(features.to_vec()).unwrap()
    }

    #[test]
    fn test_evaluate_population() {
        let population = vec![candidate(&[0.25, 0.5]), candidate(&[1.0, 0.0])];

        let (values1, values2) = evaluate_population(&population, &Head, &Sum).unwrap();
        assert_eq!(vec![0.25, 1.0], values1);
        assert_eq!(vec![0.75, 1.0], values2);
    }

    #[test]
    fn test_non_finite_objective_fails_fast() {
        let population = vec![candidate(&[0.5]), candidate(&[0.0])];

        let err = evaluate_population(&population, &Head, &Inverse).unwrap_err();
        assert_eq!(
            Error::NonFiniteObjective {
                objective: 1,
                index: 1
            },
            err
        );
    }
}

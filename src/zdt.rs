//! The reference two-objective benchmark pair (the ZDT1 family).
//!
//! With features in [0, 1], the optimal pareto front is
//! `(f1, 1 - sqrt(f1))`, reached when every tail feature is zero.

use crate::objective::Objective;
use crate::population::Candidate;

/// First objective: the first feature of the candidate.
pub struct Zdt1F1;

impl Objective for Zdt1F1 {
    fn evaluate(&self, candidate: &Candidate) -> f64 {
        candidate.features()[0]
    }
}

/// Second objective: `g * (1 - sqrt(f1 / g))` with
/// `g = 1 + 9 / (D - 1) * sum(x[1..])`.
pub struct Zdt1F2;

impl Objective for Zdt1F2 {
    fn evaluate(&self, candidate: &Candidate) -> f64 {
        let x = candidate.features();
        debug_assert!(x.len() >= 2);

        let g = 1.0 + 9.0 / (x.len() - 1) as f64 * x[1..].iter().sum::<f64>();
        g * (1.0 - (x[0] / g).sqrt())
    }
}

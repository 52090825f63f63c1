use crate::error::Error;
use rand::Rng;

/// A candidate solution: an ordered vector of real-valued features.
///
/// Candidates are immutable once created. Crossover and mutation build new
/// candidates rather than editing one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    features: Vec<f64>,
}

impl Candidate {
    /// Validates and wraps a feature vector.
    ///
    /// Rejects empty vectors and non-finite features so that every
    /// downstream comparison operates on well-ordered reals.
    pub fn new(features: Vec<f64>) -> Result<Self, Error> {
        if features.is_empty() {
            return Err(Error::EmptyCandidate);
        }
        for (position, &x) in features.iter().enumerate() {
            if !x.is_finite() {
                return Err(Error::NonFiniteFeature { position });
            }
        }
        Ok(Candidate { features })
    }

    /// A random candidate with `dimension` features drawn uniformly from [0, 1).
    pub fn random<R: Rng>(rng: &mut R, dimension: usize) -> Self {
        assert!(dimension > 0);
        Candidate {
            features: (0..dimension).map(|_| rng.gen::<f64>()).collect(),
        }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    // Internal constructor for candidates derived from already validated
    // parents. Finiteness is preserved by the variation operators.
    pub(crate) fn from_features(features: Vec<f64>) -> Self {
        debug_assert!(!features.is_empty());
        debug_assert!(features.iter().all(|x| x.is_finite()));
        Candidate { features }
    }
}

/// A random initial population of `size` candidates with `dimension` features each.
pub fn random_population<R: Rng>(rng: &mut R, size: usize, dimension: usize) -> Vec<Candidate> {
    (0..size).map(|_| Candidate::random(rng, dimension)).collect()
}

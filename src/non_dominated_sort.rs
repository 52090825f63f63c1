use crate::domination::domination_ord;
use crate::error::Error;
use crate::objective::ObjectivePoint;
use std::cmp::Ordering;
use std::mem;

/// One member of a pareto front: a population index and its front rank
/// (0 = non-dominated front).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMember {
    pub index: usize,
    pub rank: u32,
}

/// Peels pareto fronts off a set of objective points.
///
/// Construction performs the pairwise domination pass; each call to `next()`
/// yields the indices of the next front.
pub struct NonDominatedSorter {
    domination_count: Vec<usize>,
    dominated_solutions: Vec<Vec<usize>>,
    current_front: Vec<usize>,
}

impl NonDominatedSorter {
    pub fn new(points: &[ObjectivePoint]) -> Self {
        let mut current_front = Vec::new();
        let mut domination_count: Vec<usize> = points.iter().map(|_| 0).collect();
        let mut dominated_solutions: Vec<Vec<usize>> = points.iter().map(|_| Vec::new()).collect();

        for i in 0..points.len() {
            for j in i + 1..points.len() {
                match domination_ord(&points[i], &points[j]) {
                    Ordering::Less => {
                        // i dominates j
                        dominated_solutions[i].push(j);
                        domination_count[j] += 1;
                    }
                    Ordering::Greater => {
                        // j dominates i
                        dominated_solutions[j].push(i);
                        domination_count[i] += 1;
                    }
                    Ordering::Equal => {}
                }
            }

            if domination_count[i] == 0 {
                // not dominated by any other point, so it belongs to front 0
                current_front.push(i);
            }
        }

        NonDominatedSorter {
            domination_count,
            dominated_solutions,
            current_front,
        }
    }
}

/// Iterates over each pareto front, best first.
impl Iterator for NonDominatedSorter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_front.is_empty() {
            return None;
        }

        let mut next_front = Vec::new();
        for &p_i in self.current_front.iter() {
            for &q_i in self.dominated_solutions[p_i].iter() {
                debug_assert!(self.domination_count[q_i] > 0);
                self.domination_count[q_i] -= 1;
                if self.domination_count[q_i] == 0 {
                    next_front.push(q_i);
                }
            }
        }

        Some(mem::replace(&mut self.current_front, next_front))
    }
}

/// Partitions a population into ordered pareto fronts.
///
/// `values1` and `values2` are the per-candidate values of the two
/// objectives, index-aligned with the population. Fails fast if the slices
/// differ in length. Every candidate lands in exactly one front.
pub fn rank(values1: &[f64], values2: &[f64]) -> Result<Vec<Vec<RankedMember>>, Error> {
    let points = zip_points(values1, values2)?;

    let fronts = NonDominatedSorter::new(&points)
        .enumerate()
        .map(|(rank, front)| {
            front
                .into_iter()
                .map(|index| RankedMember {
                    index,
                    rank: rank as u32,
                })
                .collect()
        })
        .collect();

    Ok(fronts)
}

pub(crate) fn zip_points(values1: &[f64], values2: &[f64]) -> Result<Vec<ObjectivePoint>, Error> {
    if values1.len() != values2.len() {
        return Err(Error::LengthMismatch {
            left: values1.len(),
            right: values2.len(),
        });
    }
    Ok(values1
        .iter()
        .zip(values2.iter())
        .map(|(&f1, &f2)| ObjectivePoint { f1, f2 })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{rank, NonDominatedSorter, RankedMember};
    use crate::error::Error;
    use crate::non_dominated_sort::zip_points;

    // (f1, f2) pairs with a known front structure.
    fn values() -> (Vec<f64>, Vec<f64>) {
        (
            vec![1.0, 1.0, 2.0, 1.0, 0.0],
            vec![2.0, 2.0, 1.0, 3.0, 2.0],
        )
    }

    #[test]
    fn test_sorter_iterates_fronts() {
        let (values1, values2) = values();
        let points = zip_points(&values1, &values2).unwrap();
        let mut fronts = NonDominatedSorter::new(&points);

        assert_eq!(Some(vec![2, 4]), fronts.next());
        assert_eq!(Some(vec![0, 1]), fronts.next());
        assert_eq!(Some(vec![3]), fronts.next());
        assert_eq!(None, fronts.next());
    }

    #[test]
    fn test_rank_assigns_front_numbers() {
        let (values1, values2) = values();
        let fronts = rank(&values1, &values2).unwrap();

        assert_eq!(3, fronts.len());
        assert_eq!(
            vec![
                RankedMember { index: 2, rank: 0 },
                RankedMember { index: 4, rank: 0 },
            ],
            fronts[0]
        );
        assert_eq!(
            vec![
                RankedMember { index: 0, rank: 1 },
                RankedMember { index: 1, rank: 1 },
            ],
            fronts[1]
        );
        assert_eq!(vec![RankedMember { index: 3, rank: 2 }], fronts[2]);
    }

    #[test]
    fn test_front_completeness() {
        // Union of all fronts is the input population, each index exactly once.
        let (values1, values2) = values();
        let fronts = rank(&values1, &values2).unwrap();

        let mut seen = vec![0usize; values1.len()];
        for front in &fronts {
            for member in front {
                seen[member.index] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_front_monotonicity() {
        use crate::domination::dominates;

        let (values1, values2) = values();
        let points = zip_points(&values1, &values2).unwrap();
        let fronts = rank(&values1, &values2).unwrap();

        for (k, front) in fronts.iter().enumerate() {
            for member in front {
                // no member of front k is dominated by a peer of rank >= k
                for other_front in fronts.iter().skip(k) {
                    for other in other_front {
                        assert!(!dominates(&points[other.index], &points[member.index]));
                    }
                }
                // every member of front k > 0 is dominated by someone above
                if k > 0 {
                    let dominated = fronts[..k].iter().flatten().any(|other| {
                        dominates(&points[other.index], &points[member.index])
                    });
                    assert!(dominated);
                }
            }
        }
    }

    #[test]
    fn test_identical_points_share_a_front() {
        let fronts = rank(&[0.5, 0.5], &[0.5, 0.5]).unwrap();
        assert_eq!(1, fronts.len());
        assert_eq!(2, fronts[0].len());
    }

    #[test]
    fn test_empty_input() {
        let fronts = rank(&[], &[]).unwrap();
        assert!(fronts.is_empty());
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        assert_eq!(
            Err(Error::LengthMismatch { left: 2, right: 1 }),
            rank(&[0.0, 1.0], &[0.0])
        );
    }
}

use crate::crowding_distance::{annotate, AnnotatedMember};
use crate::error::Error;
use crate::non_dominated_sort::rank;

/// Truncates annotated fronts to `budget` survivors.
///
/// Fronts are consumed in rank order. A front that fits in the remaining
/// budget is admitted whole; the front that would overflow it is sorted by
/// crowding distance descending and only the most isolated members are
/// admitted, filling the budget exactly. If the whole population is smaller
/// than the budget, everything survives.
pub fn select_survivors(
    fronts: Vec<Vec<AnnotatedMember>>,
    budget: usize,
) -> Vec<AnnotatedMember> {
    let mut survivors: Vec<AnnotatedMember> = Vec::with_capacity(budget);

    for mut front in fronts {
        if survivors.len() == budget {
            break;
        }
        let missing = budget - survivors.len();

        if front.len() <= missing {
            // whole front fits
            survivors.extend(front);
        } else {
            // boundary front: higher crowding distance wins the remaining
            // slots. The crowded comparison sorts distance descending here
            // since every member shares the front's rank.
            front.sort_by(|a, b| {
                debug_assert!(a.rank == b.rank);
                a.partial_cmp(b).unwrap()
            });
            survivors.extend(front.into_iter().take(missing));
            break;
        }
    }

    survivors
}

/// The full environmental selection pipeline: rank the population into
/// fronts, annotate each front with crowding distances, and truncate to the
/// survivor budget.
pub fn rank_and_select(
    values1: &[f64],
    values2: &[f64],
    budget: usize,
) -> Result<Vec<AnnotatedMember>, Error> {
    let fronts = rank(values1, values2)?;

    let mut annotated = Vec::with_capacity(fronts.len());
    for front in &fronts {
        annotated.push(annotate(front, values1, values2)?);
    }

    Ok(select_survivors(annotated, budget))
}

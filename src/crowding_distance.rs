use crate::error::Error;
use crate::non_dominated_sort::RankedMember;
use std::cmp::Ordering;

/// A ranked member annotated with its crowding distance.
///
/// The distance is a local density estimate along the front: the sum over
/// both objectives of the normalized gap between the member's neighbors in
/// that objective's sorted order. Boundary members get `+∞` so the extremes
/// of the front always survive truncation. The value only serves ranking;
/// it carries no physical unit.
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedMember {
    pub index: usize,
    pub rank: u32,
    pub distance: f64,
}

impl PartialEq for AnnotatedMember {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.distance == other.distance
    }
}

// The crowded-comparison operator: rank ascending, then distance descending.
impl PartialOrd for AnnotatedMember {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.rank.partial_cmp(&other.rank) {
            Some(Ordering::Equal) => {
                // rank tied, higher distance is better
                self.distance.partial_cmp(&other.distance).map(|o| o.reverse())
            }
            other => other,
        }
    }
}

/// Assigns a crowding distance to every member of one front.
///
/// `values1` and `values2` are the objective values for the *whole*
/// population; members address them by index. For each objective the front
/// is sorted by that objective's value, the two boundary members get `+∞`,
/// and interior members accumulate `(value[i+1] - value[i-1]) / (max - min)`.
/// An objective whose range across the front is zero contributes nothing,
/// which keeps a division by zero from ever surfacing.
pub fn annotate(
    front: &[RankedMember],
    values1: &[f64],
    values2: &[f64],
) -> Result<Vec<AnnotatedMember>, Error> {
    if values1.len() != values2.len() {
        return Err(Error::LengthMismatch {
            left: values1.len(),
            right: values2.len(),
        });
    }
    for member in front {
        if member.index >= values1.len() {
            return Err(Error::MemberOutOfRange {
                index: member.index,
                len: values1.len(),
            });
        }
    }

    let l = front.len();
    let mut distance = vec![0.0f64; l];

    for values in [values1, values2] {
        // order of front positions, sorted by this objective's value
        let mut order: Vec<usize> = (0..l).collect();
        order.sort_by(|&a, &b| {
            values[front[a].index]
                .partial_cmp(&values[front[b].index])
                .unwrap()
        });

        if l > 0 {
            distance[order[0]] = f64::INFINITY;
            distance[order[l - 1]] = f64::INFINITY;

            let range = values[front[order[l - 1]].index] - values[front[order[0]].index];
            if range != 0.0 {
                for i in 1..l.saturating_sub(1) {
                    let next = values[front[order[i + 1]].index];
                    let prev = values[front[order[i - 1]].index];
                    distance[order[i]] += (next - prev) / range;
                }
            }
        }
    }

    Ok(front
        .iter()
        .zip(distance)
        .map(|(member, distance)| AnnotatedMember {
            index: member.index,
            rank: member.rank,
            distance,
        })
        .collect())
}

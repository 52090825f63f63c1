use crate::population::Candidate;
use rand::seq::index;
use rand::Rng;

/// Probability that a child undergoes mutation at all.
const MUTATION_PROBABILITY: f64 = 0.1;

/// A survivor of environmental selection, carrying the rank and crowding
/// distance the tournament compares on.
#[derive(Debug, Clone)]
pub struct Survivor {
    pub candidate: Candidate,
    pub rank: u32,
    pub distance: f64,
}

/// Uniform crossover: for every feature index a fair coin decides which
/// parent feeds the first child; the second child always receives the
/// complementary parent's value. Children are built from parent values
/// verbatim, never blended.
pub fn uniform_crossover<R: Rng>(
    rng: &mut R,
    parent1: &Candidate,
    parent2: &Candidate,
) -> (Candidate, Candidate) {
    assert_eq!(parent1.len(), parent2.len());

    let mut features1 = Vec::with_capacity(parent1.len());
    let mut features2 = Vec::with_capacity(parent2.len());

    for (&x1, &x2) in parent1.features().iter().zip(parent2.features()) {
        if rng.gen_bool(0.5) {
            features1.push(x1);
            features2.push(x2);
        } else {
            features1.push(x2);
            features2.push(x1);
        }
    }

    (
        Candidate::from_features(features1),
        Candidate::from_features(features2),
    )
}

/// With probability 10%, replaces one uniformly chosen feature with a fresh
/// draw from [0, 1). At most one feature ever changes per call.
pub fn mutate<R: Rng>(rng: &mut R, candidate: Candidate) -> Candidate {
    if rng.gen::<f64>() >= MUTATION_PROBABILITY {
        return candidate;
    }
    let mut features = candidate.features().to_vec();
    let position = rng.gen_range(0..features.len());
    features[position] = rng.gen::<f64>();
    Candidate::from_features(features)
}

// Binary tournament between two distinct pool indices: lower rank wins; on a
// rank tie the strictly greater crowding distance wins; on a full tie the
// second contestant wins. That last tie-break is arbitrary but deterministic,
// and carries no selection pressure worth reading into.
fn tournament_winner(pool: &[Survivor], a: usize, b: usize) -> usize {
    let (sa, sb) = (&pool[a], &pool[b]);
    if sa.rank < sb.rank {
        a
    } else if sa.rank > sb.rank {
        b
    } else if sa.distance > sb.distance {
        a
    } else {
        b
    }
}

// Runs one binary tournament over the pool and removes the winner from it.
// Removal is by index, so duplicate candidates in the pool are harmless.
fn take_winner<R: Rng>(rng: &mut R, pool: &mut Vec<Survivor>) -> Survivor {
    debug_assert!(pool.len() >= 2);
    let contestants = index::sample(rng, pool.len(), 2);
    let winner = tournament_winner(pool, contestants.index(0), contestants.index(1));
    pool.swap_remove(winner)
}

/// Produces the next generation from the survivor pool.
///
/// Mating events repeatedly draw parent1 by binary tournament, then parent2
/// by tournament over the remainder (or the sole leftover candidate without
/// a tournament), cross them over, mutate both children, and emit
/// {parent1, parent2, child1, child2}. When an odd-sized pool leaves a
/// single candidate for an entire event, it pairs with itself: it is emitted
/// together with one mutated copy. Either way the output holds exactly
/// twice as many candidates as the input.
pub fn reproduce<R: Rng>(rng: &mut R, survivors: Vec<Survivor>) -> Vec<Candidate> {
    let mut pool = survivors;
    let mut next_generation = Vec::with_capacity(2 * pool.len());

    while !pool.is_empty() {
        let parent1 = if pool.len() >= 2 {
            take_winner(rng, &mut pool)
        } else {
            pool.swap_remove(0)
        };

        let parent2 = match pool.len() {
            0 => None,
            1 => Some(pool.swap_remove(0)),
            _ => Some(take_winner(rng, &mut pool)),
        };

        match parent2 {
            Some(parent2) => {
                let (child1, child2) =
                    uniform_crossover(rng, &parent1.candidate, &parent2.candidate);
                next_generation.push(parent1.candidate);
                next_generation.push(parent2.candidate);
                next_generation.push(mutate(rng, child1));
                next_generation.push(mutate(rng, child2));
            }
            None => {
                // lone leftover of an odd pool: self-pairing, one mutated copy
                let copy = parent1.candidate.clone();
                next_generation.push(parent1.candidate);
                next_generation.push(mutate(rng, copy));
            }
        }
    }

    next_generation
}

use crate::error::Error;
use crate::objective::{evaluate_population, Objective, ObjectivePoint};
use crate::population::Candidate;
use crate::reproduction::{reproduce, Survivor};
use crate::selection::rank_and_select;
use log::{debug, info};
use rand::Rng;

/// Caller-supplied knobs of the generation loop.
#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    /// Number of candidates retained by environmental selection each generation.
    pub survivor_budget: usize,
    /// Number of generations to run.
    pub generations: usize,
}

/// The final population together with its objective values.
///
/// The values belong to the returned population itself, evaluated after the
/// last reproduction step; nothing leaks out of an earlier loop iteration.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub population: Vec<Candidate>,
    pub objective_values: Vec<ObjectivePoint>,
}

/// Runs the NSGA-II generation loop.
///
/// Each generation is the strict sequential pipeline: evaluate both
/// objectives, report the generation's objective points to `observer` (the
/// plotting hook), rank and truncate to the survivor budget, reproduce. The
/// observer sees every generation, including generation 0 before any
/// selection has happened.
pub fn run<R, O1, O2, L>(
    rng: &mut R,
    config: &EvolutionConfig,
    initial_population: Vec<Candidate>,
    f1: &O1,
    f2: &O2,
    observer: &mut L,
) -> Result<EvolutionOutcome, Error>
where
    R: Rng,
    O1: Objective,
    O2: Objective,
    L: FnMut(usize, &[ObjectivePoint]),
{
    info!(
        "starting evolution: population {}, survivor budget {}, {} generations",
        initial_population.len(),
        config.survivor_budget,
        config.generations
    );

    let mut population = initial_population;

    for generation in 0..config.generations {
        let (values1, values2) = evaluate_population(&population, f1, f2)?;
        observer(generation, &points_of(&values1, &values2));

        let survivors = rank_and_select(&values1, &values2, config.survivor_budget)?;
        debug!(
            "generation {}: {} candidates, {} survivors",
            generation,
            population.len(),
            survivors.len()
        );

        let pool: Vec<Survivor> = survivors
            .into_iter()
            .map(|member| Survivor {
                candidate: population[member.index].clone(),
                rank: member.rank,
                distance: member.distance,
            })
            .collect();

        population = reproduce(rng, pool);
    }

    let (values1, values2) = evaluate_population(&population, f1, f2)?;
    let objective_values = points_of(&values1, &values2);

    Ok(EvolutionOutcome {
        population,
        objective_values,
    })
}

fn points_of(values1: &[f64], values2: &[f64]) -> Vec<ObjectivePoint> {
    values1
        .iter()
        .zip(values2)
        .map(|(&f1, &f2)| ObjectivePoint { f1, f2 })
        .collect()
}

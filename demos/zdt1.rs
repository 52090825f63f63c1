//! Runs the engine against the ZDT1 benchmark pair with the reference
//! configuration: 100 candidates of dimension 5, survivor budget 50, 50
//! generations. Prints the final population's objective values per front as
//! TSV, ready for external plotting.

use nsga2_engine::driver::{run, EvolutionConfig};
use nsga2_engine::population::random_population;
use nsga2_engine::selection::rank_and_select;
use nsga2_engine::zdt::{Zdt1F1, Zdt1F2};
use rand::SeedableRng;
use rand_pcg::Pcg64;

fn main() {
    let mut rng = Pcg64::seed_from_u64(0xbeef);

    let config = EvolutionConfig {
        survivor_budget: 50,
        generations: 50,
    };
    let initial_population = random_population(&mut rng, 100, 5);

    let outcome = run(
        &mut rng,
        &config,
        initial_population,
        &Zdt1F1,
        &Zdt1F2,
        &mut |generation, points| {
            let best_f1 = points.iter().map(|p| p.f1).fold(f64::INFINITY, f64::min);
            eprintln!("generation {}: {} points, best f1 {:.3}", generation, points.len(), best_f1);
        },
    )
    .expect("evolution failed");

    let values1: Vec<f64> = outcome.objective_values.iter().map(|p| p.f1).collect();
    let values2: Vec<f64> = outcome.objective_values.iter().map(|p| p.f2).collect();
    let survivors = rank_and_select(&values1, &values2, outcome.population.len())
        .expect("final ranking failed");

    let max_rank = survivors.iter().map(|m| m.rank).max().unwrap_or(0);
    for rank in 0..=max_rank {
        println!("# front {}", rank);

        let mut xys: Vec<_> = survivors
            .iter()
            .filter(|m| m.rank == rank)
            .map(|m| (values1[m.index], values2[m.index]))
            .collect();
        xys.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        println!("f1\tf2");
        for (f1, f2) in xys {
            println!("{:.3}\t{:.3}", f1, f2);
        }
    }
}

//! NSGA-II: Non-dominated Sorting Genetic Algorithm II over real-valued
//! candidate vectors, minimizing two objectives.
//!
//! The engine is a strict sequential pipeline per generation:
//!
//! 1. evaluate both objectives over the population ([`evaluate_population`]),
//! 2. partition the population into pareto fronts ([`rank`]),
//! 3. annotate each front with crowding distances ([`annotate`]),
//! 4. truncate to the survivor budget ([`select_survivors`]),
//! 5. breed the next generation by binary tournament, uniform crossover and
//!    single-gene mutation ([`reproduce`]).
//!
//! [`driver::run`] wires the pipeline into a generation loop; objective
//! functions are supplied by the caller through the [`Objective`] trait. All
//! randomness flows through a caller-provided [`rand::Rng`], so a seeded
//! generator makes a whole run reproducible.

pub mod crowding_distance;
pub mod domination;
pub mod driver;
pub mod error;
pub mod non_dominated_sort;
pub mod objective;
pub mod population;
pub mod reproduction;
pub mod selection;
pub mod zdt;

pub use crowding_distance::{annotate, AnnotatedMember};
pub use domination::{dominates, domination_ord};
pub use driver::{run, EvolutionConfig, EvolutionOutcome};
pub use error::Error;
pub use non_dominated_sort::{rank, NonDominatedSorter, RankedMember};
pub use objective::{evaluate_population, Objective, ObjectivePoint};
pub use population::{random_population, Candidate};
pub use reproduction::{mutate, reproduce, uniform_crossover, Survivor};
pub use selection::{rank_and_select, select_survivors};

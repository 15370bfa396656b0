//! OneMax: evolve 30-bit strings towards all ones.
//!
//! Run with `cargo run --example onemax`.

use simplega::{
    evaluation::Evaluator,
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    fitness::Weights,
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
    statistics::{aggregate, Statistics},
    variation::{FlipBitMutation, TwoPointCrossover},
    Result,
};

fn one_max(genes: &[bool]) -> Vec<f64> {
    vec![genes.iter().filter(|g| **g).count() as f64]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let launcher = EvolutionLauncher::new(
        Evaluator::new(one_max, Weights::maximize()),
        TournamentSelection::new(3)?,
        TwoPointCrossover,
        FlipBitMutation::new(0.05)?,
    );

    let options = EvolutionOptions::builder()
        .num_generations(5)
        .population_size(300)
        .genome_length(30)
        .crossover_probability(0.5)
        .mutation_probability(0.2)
        .hall_of_fame_size(1)
        .log_level(LogLevel::Minimal)
        .build()?;

    let statistics = Statistics::new()
        .register("avg", aggregate::mean)
        .register("std", aggregate::std_dev)
        .register("min", aggregate::min)
        .register("max", aggregate::max);

    let mut rng = RandomNumberGenerator::from_seed(64);
    let result = launcher.run(&options, statistics, |rng| rng.gen_bool(0.5), &mut rng)?;

    println!("{}", result.logbook);

    if let Some(best) = result.hall_of_fame.best() {
        let bits: String = best
            .genes()
            .iter()
            .map(|bit| if *bit { '1' } else { '0' })
            .collect();
        println!("Best individual: {}", bits);
        println!("Ones: {}", best.expect_fitness()?.value());
    }

    Ok(())
}

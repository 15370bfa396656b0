use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use simplega::{
    evaluation::Evaluator,
    evolution::{EvolutionLauncher, EvolutionOptions},
    fitness::Weights,
    individual::{initial_population, Individual},
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
    statistics::{aggregate, Statistics},
    variation::{vary, FlipBitMutation, TwoPointCrossover},
};

type Objective = fn(&[bool]) -> Vec<f64>;

fn one_max(genes: &[bool]) -> Vec<f64> {
    vec![genes.iter().filter(|g| **g).count() as f64]
}

fn evaluated_population(size: usize, rng: &mut RandomNumberGenerator) -> Vec<Individual<bool>> {
    let mut population = initial_population(size, 100, rng, |rng| rng.gen_bool(0.5));
    Evaluator::new(one_max as Objective, Weights::maximize())
        .evaluate_all(&mut population)
        .unwrap();
    population
}

fn bench_fitness_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_evaluation");
    let evaluator = Evaluator::new(one_max as Objective, Weights::maximize());
    let mut rng = RandomNumberGenerator::from_seed(1);

    for size in [100, 1000, 10000].iter() {
        let population = initial_population(*size, 100, &mut rng, |rng| rng.gen_bool(0.5));

        group.bench_with_input(BenchmarkId::new("sequential", size), &population, |b, pop| {
            b.iter(|| {
                let mut pop = pop.clone();
                evaluator
                    .evaluate_all_with_threshold(black_box(&mut pop), usize::MAX)
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &population, |b, pop| {
            b.iter(|| {
                let mut pop = pop.clone();
                evaluator
                    .evaluate_all_with_threshold(black_box(&mut pop), 1)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_generation_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_steps");
    let mut rng = RandomNumberGenerator::from_seed(2);
    let selection = TournamentSelection::new(3).unwrap();
    let mutation = FlipBitMutation::new(0.05).unwrap();

    for size in [100, 1000].iter() {
        let population = evaluated_population(*size, &mut rng);

        group.bench_with_input(BenchmarkId::new("tournament", size), &population, |b, pop| {
            b.iter(|| selection.select(black_box(pop), pop.len(), &mut rng).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("vary", size), &population, |b, pop| {
            b.iter(|| {
                let mut offspring = pop.clone();
                vary(
                    black_box(&mut offspring),
                    &TwoPointCrossover,
                    &mutation,
                    0.5,
                    0.2,
                    &mut rng,
                )
                .unwrap();
                offspring
            })
        });
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let launcher = EvolutionLauncher::new(
        Evaluator::new(one_max as Objective, Weights::maximize()),
        TournamentSelection::new(3).unwrap(),
        TwoPointCrossover,
        FlipBitMutation::new(0.05).unwrap(),
    );
    let options = EvolutionOptions::new(5, 300, 30, 0.5, 0.2, 1).unwrap();

    c.bench_function("onemax_300x30_5_generations", |b| {
        b.iter(|| {
            let statistics = Statistics::new()
                .register("avg", aggregate::mean)
                .register("max", aggregate::max);
            let mut rng = RandomNumberGenerator::from_seed(64);
            launcher
                .run(black_box(&options), statistics, |rng| rng.gen_bool(0.5), &mut rng)
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_fitness_evaluation,
    bench_generation_steps,
    bench_full_run
);
criterion_main!(benches);

//! Benches for validation and generation.
//!
//! Implemented benches:
//!
//! - Validation of `ELEMENTS` randomly selected integers and their string representations
//! - Generation of numbers of various lengths, compared with naive rejection sampling

use criterion::{criterion_group, criterion_main, BatchSize, Bencher, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

use luhn_algorithms::{is_valid, is_valid_str, Generator, MAX_NUMBER};

const SEED: u64 = 123;
const ELEMENTS: u64 = 100;

fn random_numbers(rng: &mut StdRng) -> Vec<u64> {
    (0..ELEMENTS).map(|_| rng.gen_range(0..=MAX_NUMBER)).collect()
}

fn bench_validate_int(bencher: &mut Bencher<'_>) {
    let mut rng = StdRng::seed_from_u64(SEED);
    bencher.iter_batched(
        || random_numbers(&mut rng),
        |numbers| numbers.into_iter().filter(|&n| is_valid(n)).count(),
        BatchSize::SmallInput,
    );
}

fn bench_validate_str(bencher: &mut Bencher<'_>) {
    let mut rng = StdRng::seed_from_u64(SEED);
    bencher.iter_batched(
        || {
            random_numbers(&mut rng)
                .into_iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
        },
        |numbers| {
            numbers
                .iter()
                .filter(|n| is_valid_str(n).unwrap())
                .count()
        },
        BatchSize::SmallInput,
    );
}

fn bench_generate(bencher: &mut Bencher<'_>, length: u32) {
    let mut generator = Generator::new(StdRng::seed_from_u64(SEED));
    bencher.iter(|| generator.generate_random(length).unwrap());
}

fn bench_generate_rejection(bencher: &mut Bencher<'_>, length: u32) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let upper = 10_u64.pow(length);
    bencher.iter(|| loop {
        let candidate = rng.gen_range(0..upper);
        if is_valid(candidate) {
            break candidate;
        }
    });
}

fn bench_validation(criterion: &mut Criterion) {
    criterion
        .benchmark_group("validate")
        .bench_function("int", bench_validate_int)
        .bench_function("str", bench_validate_str)
        .throughput(Throughput::Elements(ELEMENTS));
}

fn bench_generation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("generate");
    for length in [2, 10, 16, 18] {
        group.bench_function(format!("len{length}"), |bencher| {
            bench_generate(bencher, length);
        });
        group.bench_function(format!("len{length}_rejection"), |bencher| {
            bench_generate_rejection(bencher, length);
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validation, bench_generation);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sts_core::{MatchEngine, MatchPlan, Team};

fn full_match(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2011);
    let home = Team::new("Home", '0', 11, 100, 200, None, &mut rng).unwrap();
    let away = Team::new("Away", '1', 11, 100, 200, None, &mut rng).unwrap();

    c.bench_function("match_5400_ticks_11v11", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let (mut h, mut a) = (home.clone(), away.clone());
            let result = MatchEngine::new(MatchPlan::new(100, 200, seed), &mut h, &mut a)
                .unwrap()
                .simulate()
                .unwrap();
            black_box(result.score())
        })
    });
}

criterion_group!(benches, full_match);
criterion_main!(benches);

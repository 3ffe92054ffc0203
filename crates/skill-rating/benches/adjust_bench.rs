use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skill_core::config::KernelSettings;
use skill_core::Domain;
use skill_rating::{Grid, MomentMatcher, PosteriorDensity, Rating, RatingAdjuster};

fn user() -> Rating {
    Rating::from_std(300.0, 500.0).unwrap()
}

fn problem() -> Rating {
    Rating::from_std(700.0, 100.0).unwrap()
}

fn bench_adjust_sequential_vs_parallel(c: &mut Criterion) {
    let (user, problem) = (user(), problem());
    let sequential = RatingAdjuster::new(KernelSettings {
        parallel: false,
        ..Default::default()
    })
    .unwrap();
    let parallel = RatingAdjuster::new(KernelSettings::default()).unwrap();

    c.bench_function("adjust_sequential_step_5", |b| {
        b.iter(|| sequential.adjust(black_box(&user), black_box(&problem), true));
    });
    c.bench_function("adjust_parallel_step_5", |b| {
        b.iter(|| parallel.adjust(black_box(&user), black_box(&problem), true));
    });
}

fn bench_moment_match_by_step(c: &mut Criterion) {
    let density = PosteriorDensity::build(&user(), &problem(), true).unwrap();
    let mut group = c.benchmark_group("moment_match");
    for step in [1.0, 5.0, 10.0] {
        let matcher = MomentMatcher::new(Grid::new(Domain::default(), step).unwrap());
        group.bench_function(format!("step_{step}"), |b| {
            b.iter(|| matcher.approximate(black_box(&density)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_adjust_sequential_vs_parallel,
    bench_moment_match_by_step
);
criterion_main!(benches);

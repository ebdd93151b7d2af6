//! Performance benchmarks for points policies and the rating formula

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rating_ledger::rating::{PointsPolicy, RatingFormula};
use rating_ledger::GameAccount;

fn bench_points_policies(c: &mut Criterion) {
    let outcomes = ["Win", "Loss", "win", "Draw", "LOSS", "WIN"];

    let mut group = c.benchmark_group("points_policies");
    for (name, policy) in [
        ("standard", PointsPolicy::Standard),
        ("half_loss_penalty", PointsPolicy::HalfLossPenalty),
        ("win_streak_bonus", PointsPolicy::win_streak_bonus()),
    ] {
        group.bench_function(name, |b| {
            let mut policy = policy.clone();
            b.iter(|| {
                let mut total = 0i32;
                for (i, outcome) in outcomes.iter().enumerate() {
                    total = total
                        .wrapping_add(policy.compute(black_box(outcome), black_box(1000 + i as i32)));
                }
                total
            })
        });
    }
    group.finish();
}

fn bench_rating_formula(c: &mut Criterion) {
    let formula = RatingFormula::default();

    c.bench_function("rating_formula_new_rating", |b| {
        b.iter(|| {
            formula.new_rating(black_box(1500), black_box(1720), black_box("win"))
                + formula.new_rating(black_box(1500), black_box(1280), black_box("loss"))
        })
    });
}

fn bench_record_result(c: &mut Criterion) {
    c.bench_function("record_100_results", |b| {
        b.iter(|| {
            let mut account = GameAccount::new("bench", 1500, PointsPolicy::win_streak_bonus());
            for i in 0..100 {
                let outcome = if i % 4 == 3 { "Loss" } else { "Win" };
                account.record_result("opponent", outcome, black_box(1000 + i));
            }
            account.rating()
        })
    });
}

criterion_group!(
    benches,
    bench_points_policies,
    bench_rating_formula,
    bench_record_result
);
criterion_main!(benches);

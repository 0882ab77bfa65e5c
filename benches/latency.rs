use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use surebet_recommender::strategies::arbitrage::{AllocationTarget, ArbitrageEvaluator};
use surebet_recommender::strategies::hedge::HedgeStakeSolver;
use surebet_recommender::strategies::types::{OddsPair, Outcome};

fn benchmark_strategies(c: &mut Criterion) {
    // Case 1: No arbitrage (1/1.50 + 1/1.50 > 1.0)
    let no_arb = OddsPair::new(1.50, 1.50);

    // Case 2: Arbitrage (1/2.10 + 1/2.05 < 1.0)
    let arb = OddsPair::new(2.10, 2.05);

    let mut group = c.benchmark_group("stake_engine");

    group.bench_function("evaluate_no_arbitrage", |b| {
        b.iter(|| {
            black_box(ArbitrageEvaluator::evaluate(black_box(&no_arb)));
        })
    });

    group.bench_function("evaluate_arbitrage", |b| {
        b.iter(|| {
            black_box(ArbitrageEvaluator::evaluate(black_box(&arb)));
        })
    });

    group.bench_function("allocate_target_return", |b| {
        b.iter(|| {
            black_box(ArbitrageEvaluator::allocate(
                black_box(&arb),
                AllocationTarget::TargetReturn(1100.0),
            ));
        })
    });

    // Early hit: scan stops at stake 92 of 100
    group.bench_function("hedge_solve_early_hit", |b| {
        b.iter(|| {
            black_box(HedgeStakeSolver::solve(
                Outcome::Outcome1,
                black_box(1.20),
                4.00,
                100.0,
                10.0,
            ));
        })
    });

    // Worst case: full scan over the bankroll, then the fallback split
    group.bench_function("hedge_solve_fallback_scan", |b| {
        b.iter(|| {
            black_box(HedgeStakeSolver::solve(
                Outcome::Outcome1,
                black_box(1.05),
                4.00,
                10_000.0,
                50.0,
            ));
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);

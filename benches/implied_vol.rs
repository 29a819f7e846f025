use criterion::{black_box, criterion_group, criterion_main, Criterion};
use volroot::{greeks, pricing, ImpliedVolSolver, MarketParameters, OptionType, SolverConfig};

fn pricing_benchmarks(c: &mut Criterion) {
    let params = MarketParameters::new(100.0, 100.0, 0.05, 1.0).unwrap();

    c.bench_function("price_atm_call", |b| {
        b.iter(|| pricing::price(OptionType::Call, black_box(&params), black_box(0.2)))
    });

    c.bench_function("vega_atm", |b| {
        b.iter(|| greeks::vega(black_box(&params), black_box(0.2)))
    });
}

fn solver_benchmarks(c: &mut Criterion) {
    let params = MarketParameters::new(100.0, 100.0, 0.05, 1.0).unwrap();
    let market_price = pricing::price(OptionType::Call, &params, 0.2).unwrap();

    let solver = ImpliedVolSolver::new(SolverConfig {
        initial_guess: 0.3,
        ..SolverConfig::default()
    })
    .unwrap();

    c.bench_function("implied_vol_atm", |b| {
        b.iter(|| solver.solve(OptionType::Call, black_box(&params), black_box(market_price)))
    });

    let otm_params = MarketParameters::new(100.0, 130.0, 0.05, 0.5).unwrap();
    let otm_price = pricing::price(OptionType::Call, &otm_params, 0.35).unwrap();

    c.bench_function("implied_vol_otm", |b| {
        b.iter(|| solver.solve(OptionType::Call, black_box(&otm_params), black_box(otm_price)))
    });
}

criterion_group!(benches, pricing_benchmarks, solver_benchmarks);
criterion_main!(benches);

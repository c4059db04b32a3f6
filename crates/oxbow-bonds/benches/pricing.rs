//! Pricing and yield-solving benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oxbow_bonds::instruments::{Bond, FixedRateBond};
use oxbow_core::types::{Date, Frequency};
use oxbow_curves::RateCurve;

fn thirty_year_bond() -> Bond {
    Bond::Fixed(
        FixedRateBond::new(
            "BENCH-30Y",
            "4.5% thirty year",
            Date::from_ymd(2025, 1, 15).unwrap(),
            Date::from_ymd(2055, 1, 15).unwrap(),
            1000.0,
            0.045,
            Frequency::SemiAnnual,
        )
        .unwrap(),
    )
}

fn market_curve() -> RateCurve {
    RateCurve::new(
        Date::from_ymd(2025, 1, 15).unwrap(),
        vec![0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0],
        vec![
            0.0430, 0.0425, 0.0415, 0.0405, 0.0400, 0.0402, 0.0410, 0.0420, 0.0445, 0.0450,
        ],
    )
    .unwrap()
}

fn bench_curve_price(c: &mut Criterion) {
    let bond = thirty_year_bond();
    let curve = market_curve();
    let valuation = Date::from_ymd(2025, 1, 15).unwrap();

    c.bench_function("price_30y_semiannual", |b| {
        b.iter(|| {
            black_box(bond.price(black_box(valuation), &curve, None).unwrap());
        });
    });
}

fn bench_yield_solve(c: &mut Criterion) {
    let bond = thirty_year_bond();
    let valuation = Date::from_ymd(2025, 1, 15).unwrap();

    c.bench_function("ytm_30y_semiannual", |b| {
        b.iter(|| {
            black_box(
                bond.yield_to_maturity(black_box(valuation), 97.5, None)
                    .unwrap(),
            );
        });
    });
}

criterion_group!(benches, bench_curve_price, bench_yield_solve);
criterion_main!(benches);

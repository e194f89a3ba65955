criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_binomial_coefficient,
        computing_draw_probability,
        calculating_preflop_advice,
        calculating_river_advice,
        calculating_random_advice,
}

fn computing_binomial_coefficient(c: &mut criterion::Criterion) {
    c.bench_function("compute C(50, 25)", |b| {
        b.iter(|| choose(std::hint::black_box(50), std::hint::black_box(25)))
    });
}

fn computing_draw_probability(c: &mut criterion::Criterion) {
    let draw = Draw {
        needed: 2,
        qualifying: 9,
        population: 47,
        draws: 2,
    };
    c.bench_function("compute a Draw tail sum", |b| {
        b.iter(|| std::hint::black_box(draw).probability())
    });
}

fn calculating_preflop_advice(c: &mut criterion::Criterion) {
    let sight = Sight::try_from("Ah Kd").unwrap();
    let stakes = Stakes::default();
    c.bench_function("calculate preflop advice", |b| {
        b.iter(|| Calculation::from((std::hint::black_box(sight), stakes)))
    });
}

fn calculating_river_advice(c: &mut criterion::Criterion) {
    let sight = Sight::try_from("Ah Kd ~ 2c 7h Js 9d Qs").unwrap();
    let stakes = Stakes::default();
    c.bench_function("calculate river advice", |b| {
        b.iter(|| Calculation::from((std::hint::black_box(sight), stakes)))
    });
}

fn calculating_random_advice(c: &mut criterion::Criterion) {
    c.bench_function("calculate advice for a random Sight", |b| {
        b.iter(|| Calculation::from((Sight::random(), Stakes::default())))
    });
}

use oddsmaker::cards::Sight;
use oddsmaker::engine::Calculation;
use oddsmaker::engine::Stakes;
use oddsmaker::odds::Draw;
use oddsmaker::odds::choose;
use oddsmaker::Arbitrary;

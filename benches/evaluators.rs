criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(100)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_draw_high,
        evaluating_stud_high,
        evaluating_stud_low,
        evaluating_omaha_high,
        evaluating_omaha_low,
        evaluating_badugi,
        settling_side_pots,
}

fn pool(n: usize) -> Vec<Card> {
    French::distinct(n).into_iter().map(Card::from).collect()
}

fn evaluating_draw_high(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 5-card Draw hand (high)", |b| {
        let hand = pool(5);
        b.iter(|| Variant::Draw.high(&hand, &[]))
    });
}

fn evaluating_stud_high(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Stud hand (high)", |b| {
        let hand = pool(7);
        b.iter(|| Variant::Stud.high(&hand, &[]))
    });
}

fn evaluating_stud_low(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Stud hand (lowball)", |b| {
        let hand = pool(7);
        b.iter(|| Variant::Stud.low(&hand, &[]))
    });
}

fn evaluating_omaha_high(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 9-card Omaha hand (high)", |b| {
        let cards = pool(9);
        b.iter(|| Variant::Omaha.high(&cards[..4], &cards[4..]))
    });
}

fn evaluating_omaha_low(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 9-card Omaha hand (lowball)", |b| {
        let cards = pool(9);
        b.iter(|| Variant::Omaha.low(&cards[..4], &cards[4..]))
    });
}

fn evaluating_badugi(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 4-card Badugi hand", |b| {
        let hand = pool(4);
        b.iter(|| power_badugi(&hand))
    });
}

fn settling_side_pots(c: &mut criterion::Criterion) {
    let contributions = (0..9)
        .map(|i| (i, 25 * (i as Chips + 1), i % 3 != 0))
        .collect::<Vec<_>>();
    let podium = Podium::from((0..9).rev().map(|i| vec![i]).collect::<Vec<_>>());
    c.bench_function("settle 9-way side pots", |b| {
        b.iter(|| {
            let pots = Pots::layered(&contributions).unwrap();
            let mut seats = vec![Seat::from((State::Active, 0)); 9];
            award_mode_pots(Mode::Standard, &pots, &podium, &mut seats, &|_: Event| {})
        })
    });
}

use showdown::Chips;
use showdown::cards::Card;
use showdown::cards::French;
use showdown::evaluation::Variant;
use showdown::evaluation::power_badugi;
use showdown::settlement::Event;
use showdown::settlement::Mode;
use showdown::settlement::Podium;
use showdown::settlement::Pots;
use showdown::settlement::Seat;
use showdown::settlement::State;
use showdown::settlement::award_mode_pots;

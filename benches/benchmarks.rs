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
        evaluating_heuristic,
        drawing_full_hand,
        enumerating_roll_outcomes,
        searching_one_ply,
        searching_two_plies,
        playing_fish_game,
}

use zombiedice::*;

/// Player one mid-turn with one brain banked and two feet in hand.
fn midturn() -> Position {
    let mut position = Position::new();
    position.draw_hand();
    position.set_roll(&Roll::from([Face::Brain, Face::Feet, Face::Feet]));
    position.collect_hand();
    position
}

fn evaluating_heuristic(c: &mut criterion::Criterion) {
    let position = midturn();
    c.bench_function("evaluate heuristic", |b| {
        b.iter(|| heuristic(&position))
    });
}

fn drawing_full_hand(c: &mut criterion::Criterion) {
    c.bench_function("draw a full hand from a fresh cup", |b| {
        b.iter(|| Position::new().draw_hand())
    });
}

fn enumerating_roll_outcomes(c: &mut criterion::Criterion) {
    let mut position = Position::new();
    position.draw_hand();
    c.bench_function("weigh all joint roll outcomes", |b| {
        b.iter(|| {
            Roll::all()
                .map(|r| position.roll_probability(&r))
                .sum::<Probability>()
        })
    });
}

fn searching_one_ply(c: &mut criterion::Criterion) {
    let position = midturn();
    c.bench_function("expectimax to depth 1", |b| {
        b.iter(|| Expectimax::from(1).value(&position))
    });
}

fn searching_two_plies(c: &mut criterion::Criterion) {
    let position = midturn();
    c.bench_function("expectimax to depth 2", |b| {
        b.iter(|| Expectimax::from(2).value(&position))
    });
}

fn playing_fish_game(c: &mut criterion::Criterion) {
    c.bench_function("play a fish vs fish game", |b| {
        b.iter(|| {
            Session::new(Box::new(Fish::from(1)), Box::new(Fish::from(2)))
                .play()
                .expect("fish game")
        })
    });
}

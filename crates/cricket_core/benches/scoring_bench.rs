use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cricket_core::{
    BallEvent, InningsOpeners, MatchConfig, MatchPhase, MatchType, ScoringEngine,
};

fn full_t20_innings() -> ScoringEngine {
    let mut engine = ScoringEngine::new(MatchConfig::new(MatchType::T20, "Home", "Away"));
    engine
        .start_innings(InningsOpeners::new("Batter1", "Batter2", "Bowler1"))
        .expect("openers");

    let bowlers = ["Bowler1", "Bowler2"];
    let mut over = 0usize;
    while engine.phase() == MatchPhase::Live {
        if engine.lineup().bowler.is_none() {
            over += 1;
            engine.set_bowler(bowlers[over % 2]).expect("bowler");
        }
        let striker = engine
            .lineup()
            .batter_on_strike()
            .expect("striker")
            .to_string();
        let bowler = engine.lineup().bowler.clone().expect("bowler name");
        let event = BallEvent::runs(&striker, &bowler, 1)
            .with_reference(engine.next_ball_reference());
        engine.apply(event).expect("delivery");
    }
    engine
}

fn bench_score_innings(c: &mut Criterion) {
    c.bench_function("score_full_t20_innings", |b| {
        b.iter(|| black_box(full_t20_innings()))
    });
}

fn bench_scorecard(c: &mut Criterion) {
    let engine = full_t20_innings();
    c.bench_function("scorecard_from_120_ball_log", |b| {
        b.iter(|| black_box(engine.scorecard()))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = full_t20_innings();
    c.bench_function("derived_snapshot", |b| b.iter(|| black_box(engine.derived())));
}

criterion_group!(benches, bench_score_innings, bench_scorecard, bench_snapshot);
criterion_main!(benches);

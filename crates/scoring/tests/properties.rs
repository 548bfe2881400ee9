use proptest::prelude::*;
use scoring::models::{AgeGroup, Category, Direction, EventId, Gender, RawScores};
use scoring::{ScoringEngine, ScoringTable};

fn engine() -> ScoringEngine<'static> {
    ScoringEngine::new(ScoringTable::standard().unwrap())
}

fn event_strategy() -> impl Strategy<Value = EventId> {
    prop::sample::select(EventId::all().to_vec())
}

fn raw_scores_strategy() -> impl Strategy<Value = RawScores> {
    (
        0.0..500.0f64,
        0.0..20.0f64,
        0.0..100.0f64,
        60.0..300.0f64,
        0.0..500.0f64,
        600.0..2000.0f64,
    )
        .prop_map(|(mdl, spt, hrp, sdc, plk, run)| {
            RawScores::new()
                .with(EventId::Deadlift, mdl)
                .with(EventId::PowerThrow, spt)
                .with(EventId::Pushups, hrp)
                .with(EventId::SprintDragCarry, sdc)
                .with(EventId::Plank, plk)
                .with(EventId::TwoMileRun, run)
        })
}

proptest! {
    /// Property: points always fall in 0..=100.
    #[test]
    fn points_stay_in_range(event in event_strategy(), raw in -10_000.0..10_000.0f64) {
        let points = engine().score_event(event, raw).unwrap();
        prop_assert!(points <= 100);
    }

    /// Property: a better performance never scores fewer points.
    #[test]
    fn scoring_is_monotonic(event in event_strategy(), a in 0.0..2000.0f64, b in 0.0..2000.0f64) {
        let engine = engine();
        let direction = engine.table().direction_of(event).unwrap();
        let (better, worse) = if direction.is_better_or_equal(a, b) { (a, b) } else { (b, a) };

        prop_assert!(
            engine.score_event(event, better).unwrap() >= engine.score_event(event, worse).unwrap()
        );
    }

    /// Property: anything past either end of the chart scores 100 or 0.
    #[test]
    fn scores_saturate_past_chart_ends(event in event_strategy(), margin in 0.0..1000.0f64) {
        let engine = engine();
        let definition = engine.table().get_definition(event).unwrap();
        let (past_best, past_floor) = match definition.direction() {
            Direction::HigherIsBetter => (definition.best().value + margin, definition.floor().value - margin),
            Direction::LowerIsBetter => (definition.best().value - margin, definition.floor().value + margin),
        };

        prop_assert_eq!(engine.score_event(event, past_best).unwrap(), 100);
        prop_assert_eq!(engine.score_event(event, past_floor).unwrap(), 0);
    }

    /// Property: total is the sum of event points and the category agrees with it.
    #[test]
    fn result_is_consistent(raw in raw_scores_strategy()) {
        let result = engine()
            .score_test(&raw, Some(AgeGroup::From32To36), Some(Gender::Female))
            .unwrap();

        let sum: u16 = result.event_scores.values().map(|p| u16::from(*p)).sum();
        prop_assert_eq!(result.total_score, sum);
        prop_assert!(result.total_score <= 600);
        prop_assert_eq!(result.passed, result.category != Category::Fail);

        match result.category {
            Category::Black => prop_assert!(result.total_score >= 540),
            Category::Gold => prop_assert!((480..540).contains(&result.total_score)),
            Category::Silver => prop_assert!((420..480).contains(&result.total_score)),
            Category::Pass => prop_assert!((360..420).contains(&result.total_score)),
            Category::Fail => prop_assert!(
                result.total_score < 360 || result.event_scores.values().any(|p| *p < 60)
            ),
        }
    }
}

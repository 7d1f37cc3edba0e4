//! Property-based tests for the duration recorder and summary hooks
//!
//! Properties covered:
//! 1. Every timed call phase is logged, in order
//! 2. Setup/teardown phases never reach the log
//! 3. The slowest record is the first maximum
//! 4. The summary is read-only and repeatable

use proptest::prelude::*;
use slowest_test::duration_log::DurationLog;
use slowest_test::phase::{ExitStatus, Outcome, PhaseEvent, PhaseReport, TestItem, TestPhase};
use slowest_test::recorder::{record_report, runtest_makereport};
use slowest_test::session::Session;
use slowest_test::summary::terminal_summary;
use slowest_test::terminal::TerminalReporter;

fn phase_strategy() -> impl Strategy<Value = TestPhase> {
    prop_oneof![
        Just(TestPhase::Setup),
        Just(TestPhase::Call),
        Just(TestPhase::Teardown),
    ]
}

fn outcome_strategy() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Passed),
        Just(Outcome::Failed),
        Just(Outcome::Skipped),
    ]
}

fn render(log: &DurationLog) -> String {
    let mut reporter = TerminalReporter::new(Vec::new());
    terminal_summary(log, &mut reporter, ExitStatus::Ok);
    String::from_utf8(reporter.into_inner()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_call_phases_logged_in_order(
        durations in prop::collection::vec(0.0f64..100.0, 0..50),
    ) {
        let mut log = DurationLog::new();
        for (i, duration) in durations.iter().enumerate() {
            let item = TestItem::new(format!("t{}", i));
            let report = PhaseReport::new(TestPhase::Call, Outcome::Passed, Some(*duration));
            runtest_makereport(&mut log, &item, || report);
        }

        prop_assert_eq!(log.len(), durations.len());
        for (i, (record, duration)) in log.iter().zip(&durations).enumerate() {
            prop_assert_eq!(&record.name, &format!("t{}", i));
            prop_assert_eq!(record.duration, *duration);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_only_call_phase_recorded(
        reports in prop::collection::vec(
            (phase_strategy(), outcome_strategy(), 0.0f64..10.0),
            0..40,
        ),
    ) {
        let mut log = DurationLog::new();
        let item = TestItem::new("t");
        for (when, outcome, duration) in &reports {
            let report = PhaseReport::new(*when, *outcome, Some(*duration));
            let recorded = record_report(&mut log, &item, &report);
            prop_assert_eq!(recorded, *when == TestPhase::Call);
        }

        let expected = reports.iter().filter(|(when, _, _)| *when == TestPhase::Call).count();
        prop_assert_eq!(log.len(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_slowest_is_first_maximum(
        // Coarse values so ties are common
        steps in prop::collection::vec(0u8..5, 1..30),
    ) {
        let mut log = DurationLog::new();
        for (i, step) in steps.iter().enumerate() {
            let report = PhaseReport::new(TestPhase::Call, Outcome::Passed, Some(*step as f64 * 0.25));
            record_report(&mut log, &TestItem::new(format!("t{}", i)), &report);
        }

        let max = *steps.iter().max().unwrap();
        let first = steps.iter().position(|s| *s == max).unwrap();

        let slowest = log.slowest().unwrap();
        prop_assert_eq!(&slowest.name, &format!("t{}", first));
        prop_assert_eq!(slowest.duration, max as f64 * 0.25);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_summary_is_repeatable(
        durations in prop::collection::vec(0.0f64..5.0, 0..20),
    ) {
        let mut session = Session::new();
        for (i, duration) in durations.iter().enumerate() {
            session.observe(PhaseEvent::new(
                TestItem::new(format!("t{}", i)),
                PhaseReport::new(TestPhase::Call, Outcome::Passed, Some(*duration)),
            ));
        }

        let before = session.duration_log().records().to_vec();
        let first = render(session.duration_log());
        let second = render(session.duration_log());

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(session.duration_log().records(), before.as_slice());
        prop_assert_eq!(first.is_empty(), durations.is_empty());
        if !durations.is_empty() {
            prop_assert_eq!(first.lines().count(), 3);
        }
    }
}

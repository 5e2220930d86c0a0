//! End-to-end session flows: derive, assemble, edit, snapshot.

use pretty_assertions::assert_eq;
use scorecard_core::{Session, SessionError, Stage};
use scorecard_metrics::MetricName;
use scorecard_test_utils::{history, history_inputs, init_tracing, metric_names};

fn metric(name: &str) -> MetricName {
    MetricName::from(name)
}

#[test]
fn full_flow_with_derivation() {
    init_tracing();

    let mut session = Session::new();
    session.select_metrics(metric_names(&["Views", "DAU"]));

    // mean(actual)=150, mean(baseline)=150, lift=1
    let inputs = history_inputs(vec![
        ("Views", history(50.0, &[(100.0, 110.0), (200.0, 190.0)])),
        ("DAU", history(75.0, &[])),
    ]);

    let derivation = session.derive_benchmarks(&inputs).unwrap();
    assert_eq!(derivation.summary.len(), 2);

    let views = &derivation.summary[0];
    assert_eq!(views.proposed_benchmark, 50.0);
    assert_eq!(views.proposed_actual, 150.0);
    assert_eq!(views.n_events_used, 2);

    let dau = &derivation.summary[1];
    assert_eq!(dau.proposed_benchmark, 75.0);
    assert_eq!(dau.proposed_actual, 75.0);
    assert!(dau.used_fallback());

    // Working table pre-filled from the derivation
    session.begin_scorecard().unwrap();
    let table = session.working().unwrap();
    assert_eq!(table.row(&metric("Views")).unwrap().benchmark(), Some(50.0));
    assert_eq!(table.row(&metric("DAU")).unwrap().actuals(), Some(75.0));

    // User finalizes actuals, saves a moment
    session.set_actuals(&metric("Views"), Some(60.0)).unwrap();
    session.set_actuals(&metric("DAU"), Some(90.0)).unwrap();
    session.save_moment("Launch Week").unwrap();

    let saved = session.moments().get("Launch Week").unwrap();
    assert_eq!(
        saved.table().row(&metric("Views")).unwrap().pct_difference().as_deref(),
        Some("20.0%")
    );

    session.mark_presentation_ready().unwrap();
    assert_eq!(session.stage(), Stage::PresentationReady);
}

#[test]
fn fully_manual_flow_skips_derivation() {
    init_tracing();

    let mut session = Session::new();
    session.select_metrics(metric_names(&["Sessions"]));

    // Straight from NoData to building; no proposals anywhere
    session.begin_scorecard().unwrap();
    assert!(session.derivation().is_none());
    let row = session.working().unwrap().row(&metric("Sessions")).unwrap();
    assert_eq!(row.actuals(), None);
    assert_eq!(row.benchmark(), None);

    session.set_actuals(&metric("Sessions"), Some(500.0)).unwrap();
    session.set_benchmark(&metric("Sessions"), Some(400.0)).unwrap();
    session.save_moment("Manual Moment").unwrap();

    let saved = session.moments().get("Manual Moment").unwrap();
    assert_eq!(
        saved.table().row(&metric("Sessions")).unwrap().pct_difference().as_deref(),
        Some("25.0%")
    );
}

#[test]
fn multiple_moments_are_isolated_snapshots() {
    let mut session = Session::new();
    session.select_metrics(metric_names(&["Views"]));

    for (name, actual) in [("Pre-Reveal", 100.0), ("Launch", 200.0), ("Post", 300.0)] {
        session.begin_scorecard().unwrap();
        session.set_actuals(&metric("Views"), Some(actual)).unwrap();
        session.set_benchmark(&metric("Views"), Some(100.0)).unwrap();
        session.save_moment(name).unwrap();
    }

    let names: Vec<_> = session.moments().names().collect();
    assert_eq!(names, vec!["Pre-Reveal", "Launch", "Post"]);

    // Each snapshot kept its own numbers
    let launch = session.moments().get("Launch").unwrap();
    assert_eq!(launch.table().row(&metric("Views")).unwrap().actuals(), Some(200.0));
    assert_eq!(
        launch.table().row(&metric("Views")).unwrap().pct_difference().as_deref(),
        Some("100.0%")
    );
}

#[test]
fn session_survives_serde_round_trip() {
    let mut session = Session::new();
    session.select_metrics(metric_names(&["Views"]));
    session.begin_scorecard().unwrap();
    session.set_actuals(&metric("Views"), Some(42.0)).unwrap();
    session.save_moment("Persisted").unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.stage(), Stage::MomentSaved);
    assert_eq!(restored.moments().len(), 1);
    assert_eq!(
        restored
            .moments()
            .get("Persisted")
            .unwrap()
            .table()
            .row(&metric("Views"))
            .unwrap()
            .actuals(),
        Some(42.0)
    );
}

#[test]
fn empty_metric_selection_builds_an_empty_table() {
    let mut session = Session::new();
    session.select_metrics(Vec::new());
    let table = session.begin_scorecard().unwrap();
    assert!(table.is_empty());

    // Saving an empty table is the wizard's problem to prevent, not ours
    session.save_moment("Empty").unwrap();
    assert!(session.moments().get("Empty").unwrap().table().is_empty());
}

#[test]
fn illegal_jumps_are_rejected() {
    let mut session = Session::new();
    session.select_metrics(metric_names(&["Views"]));

    // Cannot mark presentation-ready before anything was saved
    assert!(matches!(
        session.mark_presentation_ready(),
        Err(SessionError::NoMoments)
    ));

    // Cannot derive while a table is open
    session.begin_scorecard().unwrap();
    let inputs = history_inputs(vec![("Views", history(1.0, &[]))]);
    assert!(matches!(
        session.derive_benchmarks(&inputs),
        Err(SessionError::IllegalTransition { .. })
    ));
}

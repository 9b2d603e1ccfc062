// tests/config.rs
#![cfg(feature = "config")]

use optimize_satisfy::{ConfigError, CriterionConfig, MetricSnapshot};

#[test]
fn parses_optimize_and_satisfy() {
    let cfg = CriterionConfig::from_json(r#"{"optimize": "recall", "satisfy": {"precision": 0.5}}"#)
        .unwrap();
    assert_eq!(cfg, CriterionConfig::new("recall").with_threshold("precision", 0.5));
}

#[test]
fn satisfy_defaults_to_empty() {
    let cfg = CriterionConfig::from_json(r#"{"optimize": "auc"}"#).unwrap();
    assert!(cfg.satisfy.is_empty());
    assert!(cfg.build().unwrap().constraints().is_empty());
}

#[test]
fn rejects_bad_descriptions() {
    assert!(matches!(
        CriterionConfig::from_json(r#"{"optimize": "recall", "patience": 3}"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(CriterionConfig::from_json(r#"{"satisfy": {}}"#), Err(ConfigError::Parse(_))));
    assert!(matches!(
        CriterionConfig::from_json(r#"{"optimize": "  "}"#),
        Err(ConfigError::EmptyMetricName)
    ));
    assert!(matches!(
        CriterionConfig::from_json(r#"{"optimize": "recall", "satisfy": {"": 0.1}}"#),
        Err(ConfigError::EmptyMetricName)
    ));
}

#[test]
fn non_finite_threshold_is_rejected() {
    let cfg = CriterionConfig::new("recall").with_threshold("precision", f64::NAN);
    let err = cfg.build().unwrap_err();
    assert!(matches!(
        &err,
        ConfigError::NonFiniteThreshold { metric, threshold } if metric == "precision" && threshold.is_nan()
    ));
    assert_eq!(err.to_string(), "threshold for `precision` must be finite, got NaN");
}

#[test]
fn built_monitor_runs_recall_precision_sequence() {
    let mut m = CriterionConfig::from_json(r#"{"optimize": "recall", "satisfy": {"precision": 0.5}}"#)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(m.optimize().label(), "recall");
    assert_eq!(m.constraints()[0].label(), "precision");
    assert_eq!(m.constraints()[0].threshold(), 0.5);

    let steps = [(0.6, 0.6), (0.7, 0.4), (0.5, 0.9), (0.4, 0.3)];
    let stops: Vec<bool> = steps
        .iter()
        .map(|&(r, p)| m.evaluate(MetricSnapshot::from([("recall", r), ("precision", p)])).unwrap())
        .collect();
    assert_eq!(stops, [false, false, false, true]);
}

#[test]
fn snapshot_reads_from_json_object() {
    let s: MetricSnapshot = serde_json::from_str(r#"{"recall": 0.7, "precision": 0.4}"#).unwrap();
    assert_eq!(s.require("recall"), Ok(0.7));
    assert_eq!(s.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["precision", "recall"]);
    assert_eq!(serde_json::to_string(&s).unwrap(), r#"{"precision":0.4,"recall":0.7}"#);
}

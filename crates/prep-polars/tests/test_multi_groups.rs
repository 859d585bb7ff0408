//! Tests for multi-group extraction

mod common;

use common::column_values;
use polars::prelude::*;
use prep_polars::{
    extract_groups, extract_groups_with_sink, CollectingSink, Diagnostic, Effects,
    GroupExtractExt, GroupSpec, NullSink,
};
use proptest::prelude::*;

fn within_df() -> DataFrame {
    df![
        "grp" => ["x", "x", "y"],
        "dv" => [1.0, 2.0, 3.0],
    ]
    .unwrap()
}

#[test]
fn test_within_groups_padded() {
    let df = within_df();
    let spec = GroupSpec::new("dv").within("grp").effects(Effects::Within);

    let grouped = df.grouped_with_sink(&spec, &NullSink).unwrap();

    assert_eq!(grouped.counts, vec![2, 1]);
    assert_eq!(grouped.labels(), vec!["x", "y"]);
    assert_eq!(grouped.table.shape(), (2, 2));
    assert_eq!(column_values(&grouped.table, "x"), vec![Some(1.0), Some(2.0)]);
    assert_eq!(column_values(&grouped.table, "y"), vec![Some(3.0), None]);
}

#[test]
fn test_between_groups() {
    let df = df![
        "subject" => ["s1", "s2", "s3", "s4", "s5", "s6"],
        "condition" => ["ctrl", "drug", "ctrl", "placebo", "drug", "ctrl"],
        "score" => [5.0, 7.0, 6.0, 4.0, 8.0, 5.5],
    ]
    .unwrap();
    let spec = GroupSpec::new("score").between("condition").effects(Effects::Between);

    let (table, counts) = extract_groups_with_sink(&df, &spec, &NullSink)
        .unwrap()
        .into_parts();

    assert_eq!(counts, vec![3, 2, 1]);
    assert_eq!(
        table.get_column_names().iter().map(|n| n.as_str()).collect::<Vec<_>>(),
        vec!["ctrl", "drug", "placebo"]
    );
    assert_eq!(column_values(&table, "ctrl"), vec![Some(5.0), Some(6.0), Some(5.5)]);
    assert_eq!(column_values(&table, "drug"), vec![Some(7.0), Some(8.0), None]);
    assert_eq!(column_values(&table, "placebo"), vec![Some(4.0), None, None]);
}

#[test]
fn test_counts_match_columns() {
    let df = df![
        "time" => ["t1", "t2", "t1", "t3", "t2", "t1"],
        "dv" => [1i64, 2, 3, 4, 5, 6],
    ]
    .unwrap();
    let spec = GroupSpec::new("dv").within("time").effects(Effects::Within);

    let grouped = df.grouped_with_sink(&spec, &NullSink).unwrap();

    assert_eq!(grouped.counts.len(), grouped.table.width());
    for (label, count) in grouped.labels().iter().zip(&grouped.counts) {
        let present = column_values(&grouped.table, label)
            .into_iter()
            .filter(Option::is_some)
            .count();
        assert_eq!(present, *count);
    }
}

#[test]
fn test_within_missing_fails() {
    let df = within_df();
    let spec = GroupSpec::new("dv").effects(Effects::Within);

    let err = df.grouped_with_sink(&spec, &NullSink).unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "within must be specified when effects=within");
}

#[test]
fn test_between_missing_fails() {
    let df = within_df();
    let spec = GroupSpec::new("dv").within("grp").effects(Effects::Between);

    let err = df.grouped_with_sink(&spec, &NullSink).unwrap_err();
    assert_eq!(err.to_string(), "between must be specified when effects=between");
}

#[test]
fn test_interaction_requires_both_columns() {
    let df = within_df();
    let spec = GroupSpec::new("dv").between("grp").effects(Effects::Interaction);

    let err = df.grouped_with_sink(&spec, &NullSink).unwrap_err();
    assert_eq!(
        err.to_string(),
        "within and between must be specified when effects=interaction"
    );
}

#[test]
fn test_interaction_and_all_are_unsupported() {
    let df = within_df();
    for effects in [Effects::Interaction, Effects::All] {
        let spec = GroupSpec::new("dv").within("grp").between("grp").effects(effects);

        let err = df.grouped_with_sink(&spec, &NullSink).unwrap_err();

        assert!(err.is_unsupported(), "{effects} should be unsupported");
        assert!(!err.is_invalid_argument());
    }
}

#[test]
fn test_empty_dv_fails() {
    let df = within_df();
    let spec = GroupSpec::new("").within("grp").effects(Effects::Within);

    let err = df.grouped_with_sink(&spec, &NullSink).unwrap_err();
    assert_eq!(err.to_string(), "DV and data must be specified");
}

#[test]
fn test_unknown_grouping_column() {
    let df = within_df();
    let spec = GroupSpec::new("dv").within("time").effects(Effects::Within);

    let err = df.grouped_with_sink(&spec, &NullSink).unwrap_err();
    assert_eq!(err.to_string(), "Could not interpret input 'time'");
}

#[test]
fn test_labels_are_reported() -> anyhow::Result<()> {
    let df = within_df();
    let spec = GroupSpec::new("dv").within("grp").effects(Effects::Within);
    let sink = CollectingSink::new();

    df.grouped_with_sink(&spec, &sink)?;

    assert_eq!(
        sink.events()?,
        vec![Diagnostic::LabelsDiscovered {
            column: "grp".to_string(),
            labels: vec!["x".to_string(), "y".to_string()],
        }]
    );
    Ok(())
}

#[test]
fn test_default_sink_logs() {
    let df = within_df();
    let spec = GroupSpec::new("dv").within("grp").effects(Effects::Within);

    let grouped = extract_groups(&df, &spec).unwrap();
    assert_eq!(grouped.counts, vec![2, 1]);
}

#[test]
fn test_repeated_calls_are_identical() {
    let df = within_df();
    let spec = GroupSpec::new("dv").within("grp").effects(Effects::Within);

    let first = df.grouped_with_sink(&spec, &NullSink).unwrap();
    let second = df.grouped_with_sink(&spec, &NullSink).unwrap();

    assert_eq!(first.counts, second.counts);
    assert!(first.table.equals_missing(&second.table));
}

fn labelled_df(rows: &[(u8, f64)]) -> DataFrame {
    let labels: Vec<String> = rows.iter().map(|(l, _)| format!("g{l}")).collect();
    let values: Vec<f64> = rows.iter().map(|(_, v)| *v).collect();
    df!["grp" => labels, "dv" => values].unwrap()
}

proptest! {
    #[test]
    fn columns_follow_discovery_order(
        rows in prop::collection::vec((0u8..6, -1e3f64..1e3), 1..60),
    ) {
        let df = labelled_df(&rows);
        let spec = GroupSpec::new("dv").between("grp").effects(Effects::Between);

        let grouped = df.grouped_with_sink(&spec, &NullSink).unwrap();

        let mut expected: Vec<String> = Vec::new();
        for (label, _) in &rows {
            let label = format!("g{label}");
            if !expected.contains(&label) {
                expected.push(label);
            }
        }
        prop_assert_eq!(grouped.labels(), expected);
        prop_assert_eq!(grouped.counts.iter().sum::<usize>(), rows.len());
        let largest = grouped.counts.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(grouped.table.height(), largest);
    }

    #[test]
    fn extraction_is_idempotent(rows in prop::collection::vec((0u8..4, -1e3f64..1e3), 1..40)) {
        let df = labelled_df(&rows);
        let spec = GroupSpec::new("dv").within("grp").effects(Effects::Within);

        let first = df.grouped_with_sink(&spec, &NullSink).unwrap();
        let second = df.grouped_with_sink(&spec, &NullSink).unwrap();

        prop_assert_eq!(&first.counts, &second.counts);
        prop_assert!(first.table.equals_missing(&second.table));
    }
}

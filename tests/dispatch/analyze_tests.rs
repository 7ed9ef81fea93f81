//! Integration tests for the analyze operation.

use super::helpers::{Harness, classified, exchange, harness, launch_with_items, offered_item_ids};
use rstest::rstest;
use triage::analyzer::services::DispatchError;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn later_exchange_only_sees_unclaimed_items(harness: Harness) {
    let first = exchange("analyzer.auto");
    let second = exchange("analyzer.pattern");
    harness.directory.set_exchanges([first.clone(), second.clone()]);
    harness
        .transport
        .script_analyze_reply(first.name(), Some(classified(&[1, 2])));
    harness
        .transport
        .script_analyze_reply(second.name(), Some(classified(&[3])));

    let report = harness
        .dispatch
        .analyze(launch_with_items(&[1, 2, 3]))
        .await
        .expect("analysis should succeed");

    let to_second = harness.transport.sent_to(second.name());
    let message = to_second.first().expect("one message to second exchange");
    assert_eq!(offered_item_ids(message.payload()), vec![3]);

    assert_eq!(
        report.results_for("analyzer.auto").map(<[_]>::len),
        Some(2)
    );
    assert_eq!(
        report.results_for("analyzer.pattern").map(<[_]>::len),
        Some(1)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_reply_adds_no_entry_to_the_report(harness: Harness) {
    let only = exchange("analyzer.auto");
    harness.directory.set_exchanges([only.clone()]);
    harness
        .transport
        .script_analyze_reply(only.name(), Some(Vec::new()));

    let report = harness
        .dispatch
        .analyze(launch_with_items(&[1, 2, 3]))
        .await
        .expect("analysis should succeed");

    assert!(report.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_directory_yields_an_empty_report(harness: Harness) {
    let report = harness
        .dispatch
        .analyze(launch_with_items(&[1]))
        .await
        .expect("analysis should succeed");

    assert!(report.is_empty());
    assert!(harness.transport.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn one_unreachable_exchange_fails_the_call(harness: Harness) {
    let first = exchange("analyzer.auto");
    let second = exchange("analyzer.pattern");
    harness.directory.set_exchanges([first.clone(), second]);
    harness.transport.fail_deliveries_to(first.name());

    let result = harness.dispatch.analyze(launch_with_items(&[1])).await;

    assert!(matches!(result, Err(DispatchError::Transport(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn membership_changes_take_effect_on_the_next_call(harness: Harness) {
    let first = exchange("analyzer.auto");
    harness.directory.set_exchanges([first.clone()]);
    harness
        .transport
        .script_analyze_reply(first.name(), Some(classified(&[1])));

    harness
        .dispatch
        .analyze(launch_with_items(&[1]))
        .await
        .expect("first analysis should succeed");

    let second = exchange("analyzer.pattern");
    harness.directory.register(second.clone());
    harness
        .transport
        .script_analyze_reply(second.name(), Some(classified(&[2])));

    let report = harness
        .dispatch
        .analyze(launch_with_items(&[2]))
        .await
        .expect("second analysis should succeed");

    assert!(report.results_for("analyzer.pattern").is_some());
}

//! Then steps for analyzer dispatch BDD scenarios.

use super::world::{DispatchWorld, exchange_name, offered_item_ids, parse_ids, run_async};
use rstest_bdd_macros::then;
use serde_json::Value;
use triage::analyzer::ports::{CLEAN_ROUTE, ExchangeDirectory};

#[then(r#"the report attributes items "{ids}" to "{key}""#)]
fn report_attributes_items(
    world: &mut DispatchWorld,
    ids: String,
    key: String,
) -> Result<(), eyre::Report> {
    let report = world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing analysis report in scenario world"))?;
    let expected = parse_ids(&ids)?;
    let actual: Vec<i64> = report
        .results_for(&key)
        .ok_or_else(|| eyre::eyre!("no report entry for '{key}'"))?
        .iter()
        .map(|item| item.item_id().value())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected '{key}' to claim {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the report is empty")]
fn the_report_is_empty(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let report = world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing analysis report in scenario world"))?;
    if !report.is_empty() {
        return Err(eyre::eyre!("expected empty report, found {report:?}"));
    }
    Ok(())
}

#[then("the reported indexed total is {count:u64}")]
fn the_indexed_total_is(world: &DispatchWorld, count: u64) -> Result<(), eyre::Report> {
    let indexed = world
        .last_indexed
        .ok_or_else(|| eyre::eyre!("missing index total in scenario world"))?;
    if indexed != count {
        return Err(eyre::eyre!("expected {count} indexed items, found {indexed}"));
    }
    Ok(())
}

#[then(r#"exchange "{name}" was only offered items "{ids}""#)]
fn exchange_was_only_offered(
    world: &mut DispatchWorld,
    name: String,
    ids: String,
) -> Result<(), eyre::Report> {
    let messages = world.transport.sent_to(&exchange_name(&name)?);
    let message = messages
        .first()
        .ok_or_else(|| eyre::eyre!("no message sent to '{name}'"))?;
    let offered = offered_item_ids(message.payload())?;
    let expected = parse_ids(&ids)?;
    if offered != expected {
        return Err(eyre::eyre!(
            "expected '{name}' to be offered {expected:?}, found {offered:?}"
        ));
    }
    Ok(())
}

#[then(r#"exchange "{name}" received no messages"#)]
fn exchange_received_no_messages(
    world: &mut DispatchWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let messages = world.transport.sent_to(&exchange_name(&name)?);
    if !messages.is_empty() {
        return Err(eyre::eyre!(
            "expected no traffic to '{name}', found {} messages",
            messages.len()
        ));
    }
    Ok(())
}

#[then("every exchange received a clean request for index {index:i64}")]
fn every_exchange_received_clean(
    world: &mut DispatchWorld,
    index: i64,
) -> Result<(), eyre::Report> {
    let exchanges = run_async(world.directory.analyzer_exchanges())
        .map_err(|err| eyre::eyre!("directory lookup failed: {err}"))?;
    if exchanges.is_empty() {
        return Err(eyre::eyre!("scenario world holds no exchanges"));
    }
    for exchange in exchanges {
        let messages = world.transport.sent_to(exchange.name());
        let message = messages
            .first()
            .ok_or_else(|| eyre::eyre!("no message sent to '{}'", exchange.name()))?;
        if message.route() != CLEAN_ROUTE {
            return Err(eyre::eyre!(
                "expected clean route for '{}', found '{}'",
                exchange.name(),
                message.route()
            ));
        }
        let cleaned_index = message
            .payload()
            .pointer("/indexId")
            .and_then(Value::as_i64);
        if cleaned_index != Some(index) {
            return Err(eyre::eyre!(
                "expected clean request for index {index}, found {cleaned_index:?}"
            ));
        }
    }
    Ok(())
}

use crate::error::SsqError;
use crate::types::DrawRecord;
use chrono::NaiveDate;
use serde_json::{Map, Value};

const SITE_ORIGIN: &str = "https://www.cwl.gov.cn";

/// Parses the raw draw-notice payload into records, payload order preserved.
///
/// A structurally malformed payload aborts the whole batch; a record that is
/// merely missing a field keeps empty values for it instead of being dropped.
pub fn parse_draw_notice(raw: &str) -> Result<Vec<DrawRecord>, SsqError> {
    let payload: Value = serde_json::from_str(raw)?;
    let items = locate_draw_list(&payload).ok_or_else(|| {
        SsqError::Parse("no draw list under result/list/data".to_string())
    })?;
    items.iter().map(record_from_item).collect()
}

/// The draw list has been observed under `result`, `list` and `data`, either
/// at the top level or one level down. External contract, may change.
fn locate_draw_list(payload: &Value) -> Option<&Vec<Value>> {
    for key in ["result", "list", "data"] {
        match payload.get(key) {
            Some(Value::Array(items)) => return Some(items),
            Some(Value::Object(inner)) => {
                for inner_key in ["list", "data"] {
                    if let Some(Value::Array(items)) = inner.get(inner_key) {
                        return Some(items);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

fn record_from_item(item: &Value) -> Result<DrawRecord, SsqError> {
    let item = item
        .as_object()
        .ok_or_else(|| SsqError::Parse("draw list item is not an object".to_string()))?;

    Ok(DrawRecord {
        issue: text_field(item, &["code"]),
        draw_date: parse_draw_date(&text_field(item, &["date"])),
        red_numbers: split_numbers(&text_field(item, &["red", "redStr"]))?,
        blue_numbers: split_numbers(&text_field(item, &["blue", "blueStr"]))?,
        sales: text_field(item, &["sales"]),
        pool_money: text_field(item, &["poolmoney"]),
        prize_details: text_field(item, &["content"]),
        details_link: absolute_link(text_field(item, &["detailsLink"])),
    })
}

/// First present, non-empty value among the candidate wire keys.
fn text_field(item: &Map<String, Value>, keys: &[&str]) -> String {
    for key in keys {
        match item.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    String::new()
}

/// Splits a comma-delimited ball string into integers, drawn order kept.
pub fn split_numbers(raw: &str) -> Result<Vec<u8>, SsqError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u8>().map_err(|_| {
                SsqError::Parse(format!("ball value {token:?} is not a number"))
            })
        })
        .collect()
}

/// Wire dates look like `2024-06-23(日)`; the weekday suffix is dropped.
fn parse_draw_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('(').next().unwrap_or(raw).trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn absolute_link(link: String) -> String {
    if link.is_empty() || link.starts_with("http") {
        link
    } else {
        format!("{SITE_ORIGIN}{link}")
    }
}

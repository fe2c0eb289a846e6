use chrono::NaiveDate;
use serde::Serialize;
use std::time::Duration;

/// A single SSQ draw as returned by the findDrawNotice endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    pub issue: String,
    pub draw_date: Option<NaiveDate>,
    /// Red balls in drawn order, never sorted.
    pub red_numbers: Vec<u8>,
    pub blue_numbers: Vec<u8>,
    pub sales: String,
    pub pool_money: String,
    /// Free-text description of the top prize tiers.
    pub prize_details: String,
    pub details_link: String,
}

impl DrawRecord {
    /// Cells in the fixed export column order.
    pub fn to_row(&self) -> [String; 8] {
        [
            self.issue.clone(),
            self.draw_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            join_numbers(&self.red_numbers),
            join_numbers(&self.blue_numbers),
            self.sales.clone(),
            self.pool_money.clone(),
            self.prize_details.clone(),
            self.details_link.clone(),
        ]
    }
}

/// Renders a ball sequence in the comma-joined form used by both export
/// formats. Inverse of the parser's split.
pub fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Query string for the findDrawNotice endpoint. The API expects every
/// parameter present even when empty.
#[derive(Serialize, Debug)]
pub struct DrawNoticeQuery {
    pub name: String,
    #[serde(rename = "issueCount")]
    pub issue_count: String,
    #[serde(rename = "issueStart")]
    pub issue_start: String,
    #[serde(rename = "issueEnd")]
    pub issue_end: String,
    #[serde(rename = "dayStart")]
    pub day_start: String,
    #[serde(rename = "dayEnd")]
    pub day_end: String,
    #[serde(rename = "pageNo")]
    pub page_no: String,
}

impl DrawNoticeQuery {
    pub fn new(issue_count: u32) -> Self {
        Self {
            name: "ssq".to_string(),
            issue_count: issue_count.to_string(),
            issue_start: String::new(),
            issue_end: String::new(),
            day_start: String::new(),
            day_end: String::new(),
            page_no: "1".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Number of most recent draws to request. Advisory: the endpoint caps
    /// large values server-side.
    pub issue_count: u32,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            issue_count: 2000,
            timeout: Duration::from_secs(15),
        }
    }
}

//! Temporal categories for stratifying metric computation.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::{EvalError, Result};

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A temporal grouping applied to a series before metric computation.
///
/// The set is closed: every pair's index can be partitioned by any category,
/// and every index position lands in exactly one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Single bucket containing every point, keyed "0".
    Total,
    /// Calendar year, keyed "2019".
    Year,
    /// Month of the year, keyed "Jan".."Dec".
    Month,
    /// Hour of the day, keyed "0".."23".
    Hour,
    /// Calendar date, keyed as an ISO date string.
    Date,
    /// Day of the week, keyed "Mon".."Sun".
    Weekday,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 6] = [
        Category::Total,
        Category::Year,
        Category::Month,
        Category::Hour,
        Category::Date,
        Category::Weekday,
    ];

    /// Resolve a category identifier.
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "total" => Ok(Category::Total),
            "year" => Ok(Category::Year),
            "month" => Ok(Category::Month),
            "hour" => Ok(Category::Hour),
            "date" => Ok(Category::Date),
            "weekday" => Ok(Category::Weekday),
            other => Err(EvalError::UnknownCategory(other.to_string())),
        }
    }

    /// Identifier used in requests and results.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Total => "total",
            Category::Year => "year",
            Category::Month => "month",
            Category::Hour => "hour",
            Category::Date => "date",
            Category::Weekday => "weekday",
        }
    }

    /// Human-readable name for report forms and plots.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Total => "Total",
            Category::Year => "Year",
            Category::Month => "Month of the year",
            Category::Hour => "Hour of the day",
            Category::Date => "Date",
            Category::Weekday => "Day of the week",
        }
    }

    /// Partition a timestamp index into groups.
    ///
    /// Returns (rendered key, index positions) pairs ordered by ascending
    /// group key. Every position appears in exactly one group, so the same
    /// positions can slice the forecast, observation, and reference series
    /// identically.
    pub fn groups(&self, timestamps: &[DateTime<Utc>]) -> Vec<(String, Vec<usize>)> {
        match self {
            Category::Total => vec![("0".to_string(), (0..timestamps.len()).collect())],
            Category::Year => group_by(timestamps, |t| t.year(), |y| y.to_string()),
            Category::Month => group_by(
                timestamps,
                |t| t.month0() as usize,
                |m| MONTH_ABBR[*m].to_string(),
            ),
            Category::Hour => group_by(timestamps, |t| t.hour(), |h| h.to_string()),
            Category::Date => group_by(timestamps, |t| t.date_naive(), |d| d.to_string()),
            Category::Weekday => group_by(
                timestamps,
                |t| t.weekday().num_days_from_monday() as usize,
                |d| DAY_ABBR[*d].to_string(),
            ),
        }
    }
}

/// Catalog of category identifiers, for request validation by callers.
pub fn category_ids() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.id()).collect()
}

fn group_by<K, F, R>(timestamps: &[DateTime<Utc>], key: F, render: R) -> Vec<(String, Vec<usize>)>
where
    K: Ord,
    F: Fn(&DateTime<Utc>) -> K,
    R: Fn(&K) -> String,
{
    let mut groups: BTreeMap<K, Vec<usize>> = BTreeMap::new();
    for (position, timestamp) in timestamps.iter().enumerate() {
        groups.entry(key(timestamp)).or_default().push(position);
    }
    groups
        .into_iter()
        .map(|(k, positions)| (render(&k), positions))
        .collect()
}

//! Grouping of todos into per-day buckets.
//!
//! Buckets are ordered newest day first. Inside a bucket todos keep the
//! relative order they had in the source list, and every entry remembers its
//! index in that list so clicks can be reported against it.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::entities::Todo;
use crate::utils::datetime;

/// Header text of the bucket holding todos whose date could not be read
pub const UNSCHEDULED_LABEL: &str = "Unscheduled";

/// Key of a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKey {
    Day(NaiveDate),
    /// Todos whose date did not parse
    Unscheduled,
}

impl DateKey {
    /// Header text for this bucket using a chrono format string
    pub fn label(&self, format: &str) -> String {
        match self {
            DateKey::Day(date) => datetime::format_header_date(*date, format),
            DateKey::Unscheduled => UNSCHEDULED_LABEL.to_string(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(datetime::HEADER_DATE_FORMAT))
    }
}

/// A todo inside a bucket, with its position in the ungrouped list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketEntry<'a> {
    pub index: usize,
    pub todo: &'a Todo,
}

/// Todos sharing one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DateBucket<'a> {
    pub key: DateKey,
    pub entries: Vec<BucketEntry<'a>>,
}

impl DateBucket<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupingError {
    #[error("todo #{index} has an unreadable date '{date}' (expected DD/MM/YYYY)")]
    UnparsableDate { index: usize, date: String },
}

/// Group todos by calendar day, newest day first.
///
/// Todos with an unreadable date end up together in a trailing
/// [`DateKey::Unscheduled`] bucket.
pub fn group_by_day(todos: &[Todo]) -> Vec<DateBucket<'_>> {
    let mut days: BTreeMap<Reverse<NaiveDate>, Vec<BucketEntry<'_>>> = BTreeMap::new();
    let mut unscheduled = Vec::new();

    for (index, todo) in todos.iter().enumerate() {
        let entry = BucketEntry { index, todo };
        match datetime::parse_todo_date(&todo.date) {
            Ok(date) => days.entry(Reverse(date)).or_default().push(entry),
            Err(_) => {
                log::warn!("Todo '{}' has unreadable date '{}'", todo.title, todo.date);
                unscheduled.push(entry);
            }
        }
    }

    let mut buckets: Vec<DateBucket<'_>> = days
        .into_iter()
        .map(|(Reverse(date), entries)| DateBucket {
            key: DateKey::Day(date),
            entries,
        })
        .collect();

    if !unscheduled.is_empty() {
        buckets.push(DateBucket {
            key: DateKey::Unscheduled,
            entries: unscheduled,
        });
    }

    buckets
}

/// Group todos by calendar day, failing on the first unreadable date
pub fn try_group_by_day(todos: &[Todo]) -> Result<Vec<DateBucket<'_>>, GroupingError> {
    if let Some((index, todo)) = todos
        .iter()
        .enumerate()
        .find(|(_, todo)| datetime::parse_todo_date(&todo.date).is_err())
    {
        return Err(GroupingError::UnparsableDate {
            index,
            date: todo.date.clone(),
        });
    }

    Ok(group_by_day(todos))
}

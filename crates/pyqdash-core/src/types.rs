//! Domain types shared by the dataset resource and the view engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Learner progress state. Wire strings match the dataset exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// One topical chapter within a subject; the atomic record of the dataset.
///
/// - `subject`: matched by exact string comparison; the engine never
///   special-cases subject values, so new subjects in the dataset
///   participate automatically
/// - `chapter`: display name; NOT unique across subjects and never used
///   as a key
/// - `year_wise_question_count`: 4-digit year string -> past-year question
///   count; a missing year reads as 0
/// - `question_solved`: learner progress, bounded by the sum of the
///   year-wise counts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub subject: String,
    pub chapter: String,
    pub class: String,
    pub unit: String,
    pub year_wise_question_count: BTreeMap<String, u32>,
    pub question_solved: u32,
    pub status: Status,
    pub is_weak_chapter: bool,
}

impl Chapter {
    /// Question count for a single year, 0 when the year is absent.
    #[must_use]
    pub fn questions_in(&self, year: &str) -> u32 {
        self.year_wise_question_count.get(year).copied().unwrap_or(0)
    }

    /// Sum of the year-wise question counts.
    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.year_wise_question_count.values().sum()
    }
}

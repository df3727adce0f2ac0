//! The list-view pipeline: subject restriction, filter predicates, stable
//! ordering, and per-chapter derived statistics.

use serde::Serialize;
use std::collections::HashSet;

use pyqdash_core::types::{Chapter, Status};

use crate::facets::{facets_for, FacetDomain};

/// Filter and sort configuration for one view computation.
///
/// Empty selection sets are neutral: every record passes. That is the only
/// mechanism for "no constraint" on a facet.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub active_subject: String,
    pub weak_chapters_only: bool,
    pub not_started_only: bool,
    pub selected_classes: HashSet<String>,
    pub selected_units: HashSet<String>,
    pub sort_ascending: bool,
}

impl ViewConfig {
    /// Default view of one subject: no filters, ascending order.
    #[must_use]
    pub fn for_subject(active_subject: impl Into<String>) -> Self {
        Self {
            active_subject: active_subject.into(),
            weak_chapters_only: false,
            not_started_only: false,
            selected_classes: HashSet::new(),
            selected_units: HashSet::new(),
            sort_ascending: true,
        }
    }
}

/// Year-over-year direction of past-year question counts.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    None,
}

impl Trend {
    /// `None` if the latest year has no questions; otherwise `Up` exactly
    /// when the latest count exceeds the previous year's.
    #[must_use]
    pub fn from_counts(latest: u32, previous: u32) -> Self {
        if latest == 0 {
            Trend::None
        } else if latest > previous {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// A chapter record enriched with derived statistics. The source record is
/// flattened on the wire, so consumers see the original fields plus
/// `questions2025`, `questions2024`, `totalQuestions`, and `trend`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterView {
    #[serde(flatten)]
    pub chapter: Chapter,
    pub questions_2025: u32,
    pub questions_2024: u32,
    pub total_questions: u32,
    pub trend: Trend,
}

impl ChapterView {
    fn enrich(chapter: &Chapter) -> Self {
        let questions_2025 = chapter.questions_in("2025");
        let questions_2024 = chapter.questions_in("2024");
        Self {
            questions_2025,
            questions_2024,
            total_questions: chapter.total_questions(),
            trend: Trend::from_counts(questions_2025, questions_2024),
            chapter: chapter.clone(),
        }
    }
}

/// The visible chapter list plus the facet domains of the active subject.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewResult {
    pub chapters: Vec<ChapterView>,
    pub count: usize,
    pub facet_domain: FacetDomain,
}

/// Compute the view for `config` over the full dataset.
///
/// Pure: identical inputs give identical outputs, and the dataset is never
/// mutated. The facet domain depends only on `active_subject`; the chapter
/// list additionally honors the filter predicates and sort direction.
///
/// Ordering is a stable sort on the chapter display name. There is no
/// locale-aware collation in std, so the collation is Unicode code-point
/// order. Ties keep their relative dataset order in both directions.
#[must_use]
pub fn list_view(dataset: &[Chapter], config: &ViewConfig) -> ViewResult {
    let facet_domain = facets_for(dataset, &config.active_subject);

    let mut survivors: Vec<&Chapter> = dataset
        .iter()
        .filter(|r| r.subject == config.active_subject)
        .filter(|r| passes_filters(r, config))
        .collect();

    survivors.sort_by(|a, b| {
        let ord = a.chapter.cmp(&b.chapter);
        if config.sort_ascending {
            ord
        } else {
            ord.reverse()
        }
    });

    let chapters: Vec<ChapterView> = survivors.into_iter().map(ChapterView::enrich).collect();
    ViewResult {
        count: chapters.len(),
        chapters,
        facet_domain,
    }
}

fn passes_filters(record: &Chapter, config: &ViewConfig) -> bool {
    (!config.weak_chapters_only || record.is_weak_chapter)
        && (!config.not_started_only || record.status == Status::NotStarted)
        && (config.selected_classes.is_empty() || config.selected_classes.contains(&record.class))
        && (config.selected_units.is_empty() || config.selected_units.contains(&record.unit))
}

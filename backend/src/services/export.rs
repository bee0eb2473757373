//! Fitness plan export
//!
//! Turns the session's profile summary and plan text into an
//! [`ExportDocument`] and renders it as a PDF.
//!
//! # Plan text grammar
//!
//! The generated text is loosely structured markdown. The parser relies on
//! two conventions the text generator is expected to follow:
//!
//! - Meal plan: each day starts with `**Day` (e.g. `**Day 1: Monday**`).
//!   The day header is the text before the first colon; the `*`-separated
//!   fragments after it are the meals.
//! - Workout plan: sections are delimited by `**`. The first line of each
//!   fragment is the section header, the rest is its body.
//!
//! Text before the first marker is preamble and is dropped. Text that does
//! not follow the conventions degrades to fewer blocks or header-only
//! sections, never to an error.

use crate::services::pdf;
use fittrack_shared::models::PlanText;
use serde::Serialize;
use tracing::debug;

/// Title printed in every page header
pub const DOCUMENT_TITLE: &str = "FitTrack Pro - Your Personalized Fitness Plan";

/// Marker that opens a day block in meal plan text
const DAY_MARKER: &str = "**Day";

/// Delimiter between workout plan sections
const WORKOUT_SECTION_DELIMITER: &str = "**";

/// A block of body content inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    /// Single-line text such as `"Name: Alex"`
    Line(String),
    /// Bold subheading (day or workout section)
    Heading(String),
    /// Wrapped body text
    Paragraph(String),
}

/// A titled section of the exported document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub starts_new_page: bool,
    pub blocks: Vec<Block>,
}

/// Document assembled at export time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

/// One day of a parsed meal plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDay {
    pub header: String,
    pub meals: Vec<String>,
}

/// One section of a parsed workout plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSection {
    pub header: String,
    pub body: String,
}

/// Remove markdown bold/italic asterisks
pub fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// Split meal plan text into day blocks
pub fn parse_meal_days(meal_plan: &str) -> Vec<MealDay> {
    meal_plan
        .split(DAY_MARKER)
        .skip(1)
        .map(|day| {
            let header = day.split(':').next().unwrap_or_default().trim();
            let meals = day
                .split('*')
                .skip(1)
                .map(|meal| strip_emphasis(meal.trim()).trim().to_string())
                .filter(|meal| !meal.is_empty())
                .collect();

            MealDay {
                header: format!("Day {header}"),
                meals,
            }
        })
        .collect()
}

/// Split workout plan text into sections
pub fn parse_workout_sections(workout_plan: &str) -> Vec<WorkoutSection> {
    workout_plan
        .split(WORKOUT_SECTION_DELIMITER)
        .skip(1)
        .filter_map(|fragment| {
            let mut lines = fragment.split('\n');
            let header = lines.next().unwrap_or_default().trim().to_string();
            let rest = lines.collect::<Vec<_>>().join("\n");
            let body = strip_emphasis(rest.trim()).trim().to_string();

            if header.is_empty() && body.is_empty() {
                None
            } else {
                Some(WorkoutSection { header, body })
            }
        })
        .collect()
}

impl ExportDocument {
    /// Assemble the three-section document
    ///
    /// `profile_fields` are printed in the given order as `"Key: Value"`.
    pub fn build(profile_fields: &[(String, String)], plan: &PlanText) -> Self {
        let personal = Section {
            title: "Personal Information".to_string(),
            starts_new_page: false,
            blocks: profile_fields
                .iter()
                .map(|(key, value)| Block::Line(format!("{key}: {value}")))
                .collect(),
        };

        let mut meal_blocks = Vec::new();
        for day in parse_meal_days(&plan.meal_plan) {
            meal_blocks.push(Block::Heading(day.header));
            meal_blocks.extend(day.meals.into_iter().map(Block::Paragraph));
        }
        let meals = Section {
            title: "7-Day Meal Plan".to_string(),
            starts_new_page: false,
            blocks: meal_blocks,
        };

        let mut workout_blocks = Vec::new();
        for section in parse_workout_sections(&plan.workout_plan) {
            if !section.header.is_empty() {
                workout_blocks.push(Block::Heading(section.header));
            }
            if !section.body.is_empty() {
                workout_blocks.push(Block::Paragraph(section.body));
            }
        }
        let workouts = Section {
            title: "Weekly Workout Plan".to_string(),
            starts_new_page: true,
            blocks: workout_blocks,
        };

        debug!(
            meal_blocks = meals.blocks.len(),
            workout_blocks = workouts.blocks.len(),
            "Export document assembled"
        );

        Self {
            title: DOCUMENT_TITLE.to_string(),
            sections: vec![personal, meals, workouts],
        }
    }
}

/// Fitness plan export service
pub struct ExportService;

impl ExportService {
    /// Build and render the fitness plan PDF
    pub fn export_pdf(profile_fields: &[(String, String)], plan: &PlanText) -> anyhow::Result<Vec<u8>> {
        let document = ExportDocument::build(profile_fields, plan);
        pdf::render(&document)
    }
}

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{RetrospectError, RetrospectResult};

/// First year covered by the questionnaire.
pub const FIRST_YEAR: u16 = 2016;
/// Number of consecutive years covered by the questionnaire.
pub const YEAR_COUNT: u16 = 10;

/// All years in the fixed range, in order.
pub fn years() -> impl Iterator<Item = u16> + Clone {
    FIRST_YEAR..FIRST_YEAR + YEAR_COUNT
}

/// Years drawn in the left column (first half of the range).
pub fn left_years() -> impl Iterator<Item = u16> + Clone {
    FIRST_YEAR..FIRST_YEAR + YEAR_COUNT / 2
}

/// Years drawn in the right column (second half of the range).
pub fn right_years() -> impl Iterator<Item = u16> + Clone {
    FIRST_YEAR + YEAR_COUNT / 2..FIRST_YEAR + YEAR_COUNT
}

/// Identity block shown above the year columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Poster title.
    #[serde(default)]
    pub title: String,
    /// Name of whoever designed the questionnaire.
    #[serde(default)]
    pub creator: String,
    /// Name of whoever filled it in. May be empty.
    #[serde(default)]
    pub writer: String,
    /// Free-form date label.
    #[serde(default)]
    pub date: String,
}

/// The four prompts answered for each year, in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    /// What the writer worked on that year.
    WorkSummary,
    /// A passage representative of that year's style.
    StyleExcerpt,
    /// The event with the largest influence on the writing.
    MajorInfluence,
    /// Closing reflection on the year.
    Reflection,
}

impl Question {
    /// Every question in drawing order.
    pub const ALL: [Question; 4] = [
        Question::WorkSummary,
        Question::StyleExcerpt,
        Question::MajorInfluence,
        Question::Reflection,
    ];
}

/// Answers for a single year. Absent, `null` and `""` all mean "no answer".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    /// "What I was writing this year".
    #[serde(default)]
    pub work_summary: Option<String>,
    #[serde(default)]
    pub style_excerpt: Option<String>,
    #[serde(default)]
    pub major_influence: Option<String>,
    #[serde(default)]
    pub reflection: Option<String>,
}

impl YearEntry {
    /// All four answers present as empty strings, as written by the template command.
    pub fn blank() -> Self {
        Self {
            work_summary: Some(String::new()),
            style_excerpt: Some(String::new()),
            major_influence: Some(String::new()),
            reflection: Some(String::new()),
        }
    }

    /// The answer to `q`, or `None` when it is absent or empty.
    pub fn answer(&self, q: Question) -> Option<&str> {
        let slot = match q {
            Question::WorkSummary => &self.work_summary,
            Question::StyleExcerpt => &self.style_excerpt,
            Question::MajorInfluence => &self.major_influence,
            Question::Reflection => &self.reflection,
        };
        slot.as_deref().filter(|s| !s.is_empty())
    }

    /// Replace the answer to `q`.
    pub fn set_answer(&mut self, q: Question, text: impl Into<String>) {
        let slot = match q {
            Question::WorkSummary => &mut self.work_summary,
            Question::StyleExcerpt => &mut self.style_excerpt,
            Question::MajorInfluence => &mut self.major_influence,
            Question::Reflection => &mut self.reflection,
        };
        *slot = Some(text.into());
    }
}

/// A filled-in questionnaire: identity block plus per-year answers.
///
/// This is the JSON document the CLI reads. Years missing from `years` render as all-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Identity block.
    #[serde(default)]
    pub form: FormRecord,
    /// Answers keyed by year.
    #[serde(default)]
    pub years: BTreeMap<u16, YearEntry>,
}

static EMPTY_YEAR: YearEntry = YearEntry {
    work_summary: None,
    style_excerpt: None,
    major_influence: None,
    reflection: None,
};

impl Questionnaire {
    /// Questionnaire with the given identity block and no answers.
    pub fn new(form: FormRecord) -> Self {
        Self {
            form,
            years: BTreeMap::new(),
        }
    }

    /// Parse a questionnaire from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RetrospectResult<Self> {
        let q: Questionnaire = serde_json::from_reader(r)
            .map_err(|e| RetrospectError::serde(format!("parse questionnaire JSON: {e}")))?;
        Ok(q)
    }

    /// Parse a questionnaire from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RetrospectResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RetrospectError::validation(format!(
                "open questionnaire JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject year keys outside the fixed range. Field contents are never validated.
    pub fn validate(&self) -> RetrospectResult<()> {
        let last = FIRST_YEAR + YEAR_COUNT - 1;
        if let Some(bad) = self.years.keys().find(|y| !(FIRST_YEAR..=last).contains(*y)) {
            return Err(RetrospectError::validation(format!(
                "year {bad} is outside {FIRST_YEAR}..={last}"
            )));
        }
        Ok(())
    }

    /// Answers for `year`; an all-empty entry when the year was not filled in.
    pub fn year(&self, year: u16) -> &YearEntry {
        self.years.get(&year).unwrap_or(&EMPTY_YEAR)
    }

    /// Mutable answers for `year`, inserting an empty entry first if needed.
    pub fn year_mut(&mut self, year: u16) -> &mut YearEntry {
        self.years.entry(year).or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/model.rs"]
mod tests;

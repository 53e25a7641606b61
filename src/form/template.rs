use chrono::NaiveDate;

use crate::form::model::{FormRecord, Questionnaire, YearEntry, years};

/// Title printed on every poster.
pub const DEFAULT_TITLE: &str = "创作者十年变化总结表";
/// Fixed questionnaire author.
pub const DEFAULT_CREATOR: &str = "南极冰雕师";
/// `strftime` pattern for the date label.
pub const DATE_FORMAT: &str = "%Y年%m月%d日";

/// Format a calendar date the way the date field expects it.
pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in the local timezone, formatted for the date field.
pub fn today_label() -> String {
    date_label(chrono::Local::now().date_naive())
}

impl FormRecord {
    /// Identity block with the fixed title and creator, an empty writer and today's date.
    pub fn with_defaults() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            creator: DEFAULT_CREATOR.to_owned(),
            writer: String::new(),
            date: today_label(),
        }
    }
}

/// A blank questionnaire: default identity block and every year present with empty answers.
///
/// `writer` and `date` override the defaults when given.
pub fn blank_questionnaire(writer: Option<&str>, date: Option<&str>) -> Questionnaire {
    let mut form = FormRecord::with_defaults();
    if let Some(w) = writer {
        form.writer = w.to_owned();
    }
    if let Some(d) = date {
        form.date = d.to_owned();
    }

    let mut q = Questionnaire::new(form);
    for year in years() {
        q.years.insert(year, YearEntry::blank());
    }
    q
}

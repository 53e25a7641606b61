//! Poster geometry, colors and fixed locale strings.
//!
//! Every field has a default matching the stock poster, so a config file only needs to list what
//! it overrides.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{RetrospectError, RetrospectResult};
use crate::form::model::Question;

/// Default font file, resolved against the working directory.
pub const DEFAULT_FONT_PATH: &str = "./font.ttf";

/// Everything that shapes the poster apart from the questionnaire itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    /// Geometry.
    pub layout: PosterLayout,
    /// Colors.
    pub theme: Theme,
    /// Fixed strings.
    pub labels: Labels,
    /// TrueType/OpenType font file. Falls back to the built-in face when unreadable.
    pub font_path: PathBuf,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            layout: PosterLayout::default(),
            theme: Theme::default(),
            labels: Labels::default(),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
        }
    }
}

impl PosterConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RetrospectResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RetrospectError::serde(format!("parse poster config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RetrospectResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RetrospectError::validation(format!("open poster config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the layout for values that would produce an empty or inverted poster.
    pub fn validate(&self) -> RetrospectResult<()> {
        self.layout.validate()
    }
}

/// Font sizes in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title: f32,
    pub year: f32,
    pub question: f32,
    pub answer: f32,
    pub identity: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 55.0,
            year: 30.0,
            question: 25.0,
            answer: 20.0,
            identity: 20.0,
        }
    }
}

/// Poster geometry. All distances are in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterLayout {
    /// Canvas width.
    pub width: u32,
    /// Outer left/right margin.
    pub margin: u32,
    /// Gap between the two columns; the divider sits in its middle.
    pub gutter: u32,
    /// Column width minus this is the width answers wrap to.
    pub text_inset: u32,
    /// Height of every text line below the title.
    pub line_height: u32,
    pub font_sizes: FontSizes,
    /// Estimated glyph advance as a fraction of the answer font size.
    pub char_width_ratio: f32,

    /// Baseline of the centered title.
    pub title_baseline: u32,
    /// Title baseline to the top of the identity line.
    pub identity_gap: u32,
    /// Identity line to the header rule.
    pub rule_gap: u32,
    /// Header rule to the first year header.
    pub content_gap: u32,
    /// Space kept below the taller column.
    pub bottom_margin: u32,

    /// Vertical space taken by a year heading.
    pub year_header: u32,
    /// Offset of the heading text inside its space.
    pub year_header_text_offset: u32,
    /// Extra space after each question/answer block.
    pub question_spacing: u32,
    /// Extra space after the separator that closes a year.
    pub year_trailing: u32,
    /// Horizontal indent of answer text under its question.
    pub answer_indent: u32,
    /// Separator rule inset from both column edges.
    pub separator_inset: u32,
    /// Separator rule distance above the cursor after the last block.
    pub separator_lift: u32,

    /// Header rule and column divider thickness.
    pub rule_width: u32,
    /// Per-year separator thickness.
    pub separator_width: u32,
}

impl Default for PosterLayout {
    fn default() -> Self {
        Self {
            width: 1600,
            margin: 50,
            gutter: 40,
            text_inset: 40,
            line_height: 30,
            font_sizes: FontSizes::default(),
            char_width_ratio: 0.9,
            title_baseline: 50,
            identity_gap: 70,
            rule_gap: 50,
            content_gap: 40,
            bottom_margin: 50,
            year_header: 80,
            year_header_text_offset: 5,
            question_spacing: 20,
            year_trailing: 40,
            answer_indent: 10,
            separator_inset: 50,
            separator_lift: 10,
            rule_width: 2,
            separator_width: 1,
        }
    }
}

impl PosterLayout {
    /// Width of each of the two columns.
    pub fn column_width(&self) -> u32 {
        self.width
            .saturating_sub(self.margin.saturating_mul(2))
            .saturating_sub(self.gutter)
            / 2
    }

    /// Width answers are wrapped to.
    pub fn text_width(&self) -> u32 {
        self.column_width().saturating_sub(self.text_inset)
    }

    /// Left edge of the left and right columns.
    pub fn column_x(&self) -> [u32; 2] {
        [
            self.margin,
            self.margin
                .saturating_add(self.column_width())
                .saturating_add(self.gutter),
        ]
    }

    /// Horizontal center of the gutter.
    pub fn divider_x(&self) -> f64 {
        f64::from(self.margin.saturating_add(self.column_width())) + f64::from(self.gutter) / 2.0
    }

    /// Top of the identity line.
    pub fn identity_y(&self) -> u32 {
        self.title_baseline.saturating_add(self.identity_gap)
    }

    /// Vertical position of the header rule.
    pub fn rule_y(&self) -> u32 {
        self.identity_y().saturating_add(self.rule_gap)
    }

    /// Where both columns start.
    pub fn content_top(&self) -> u32 {
        self.rule_y().saturating_add(self.content_gap)
    }

    /// Characters per answer line, estimated from the text width and answer font size.
    pub fn wrap_width_chars(&self) -> usize {
        let advance = self.font_sizes.answer * self.char_width_ratio;
        if !advance.is_finite() || advance <= 0.0 {
            return 1;
        }
        ((self.text_width() as f32 / advance).floor() as usize).max(1)
    }

    /// Canvas height of a poster whose answers are all empty, or `None` when it overflows.
    fn empty_poster_height(&self) -> Option<u32> {
        let chrome = self
            .title_baseline
            .checked_add(self.identity_gap)?
            .checked_add(self.rule_gap)?
            .checked_add(self.content_gap)?
            .checked_add(self.bottom_margin)?;
        let block = self
            .line_height
            .checked_mul(2)?
            .checked_add(self.question_spacing)?;
        let year = self
            .year_header
            .checked_add(block.checked_mul(4)?)?
            .checked_add(self.year_trailing)?
            .checked_add(self.year_header_text_offset)?;
        chrome.checked_add(year.checked_mul(5)?)
    }

    /// Reject layouts that cannot hold any text or whose fixed chrome overflows.
    pub fn validate(&self) -> RetrospectResult<()> {
        let sizes = [
            ("title", self.font_sizes.title),
            ("year", self.font_sizes.year),
            ("question", self.font_sizes.question),
            ("answer", self.font_sizes.answer),
            ("identity", self.font_sizes.identity),
        ];
        for (name, size) in sizes {
            if !size.is_finite() || size <= 0.0 {
                return Err(RetrospectError::validation(format!(
                    "{name} font size must be finite and > 0"
                )));
            }
        }
        if !self.char_width_ratio.is_finite() || self.char_width_ratio <= 0.0 {
            return Err(RetrospectError::validation(
                "char_width_ratio must be finite and > 0",
            ));
        }
        if self.line_height == 0 {
            return Err(RetrospectError::validation("line_height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) {
            return Err(RetrospectError::validation("width must be <= 65535"));
        }
        let horizontal = self
            .margin
            .checked_mul(2)
            .and_then(|m| m.checked_add(self.gutter))
            .and_then(|m| m.checked_add(self.text_inset));
        if horizontal.is_none_or(|h| h >= self.width) {
            return Err(RetrospectError::validation(format!(
                "width {} leaves no room for text after margins, gutter and inset",
                self.width
            )));
        }
        if self.empty_poster_height().is_none() {
            return Err(RetrospectError::validation(
                "title, identity, rule, content and bottom offsets overflow the canvas height",
            ));
        }
        if self.text_width() == 0 {
            return Err(RetrospectError::validation(format!(
                "width {} leaves no room for text after margins, gutter and inset",
                self.width
            )));
        }
        Ok(())
    }
}

/// Poster colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Rgb8,
    /// Answers, identity line and column divider.
    pub text: Rgb8,
    /// Title and header rule.
    pub title: Rgb8,
    /// Per-year separators.
    pub accent: Rgb8,
    /// Year headings and question labels.
    pub highlight: Rgb8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb8::new(0xF4, 0xF1, 0xEA),
            text: Rgb8::new(0x2D, 0x47, 0x39),
            title: Rgb8::new(0x12, 0x16, 0x19),
            accent: Rgb8::new(0xBC, 0xB3, 0x82),
            highlight: Rgb8::new(0x47, 0x34, 0x0C),
        }
    }
}

/// Fixed locale strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Year heading; `{year}` is replaced with the year number.
    pub year_heading: String,
    pub work_summary: String,
    pub style_excerpt: String,
    pub major_influence: String,
    pub reflection: String,
    pub writer_prefix: String,
    pub date_prefix: String,
    pub creator_prefix: String,
    /// Drawn in place of an empty answer.
    pub placeholder: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            year_heading: "🌟 【 {year} 年 创作小结 】".to_owned(),
            work_summary: "(1) 本年我在写：".to_owned(),
            style_excerpt: "(2) 最能代表我本年风格的段落是：".to_owned(),
            major_influence: "(3) 本年对我创作影响最大的事是：".to_owned(),
            reflection: "(4) 本年创作的总结感想是：".to_owned(),
            writer_prefix: "填表人: ".to_owned(),
            date_prefix: "填写时间: ".to_owned(),
            creator_prefix: "制表人: ".to_owned(),
            placeholder: "(暂无内容)".to_owned(),
        }
    }
}

impl Labels {
    /// Label printed above the answer to `q`.
    pub fn question(&self, q: Question) -> &str {
        match q {
            Question::WorkSummary => &self.work_summary,
            Question::StyleExcerpt => &self.style_excerpt,
            Question::MajorInfluence => &self.major_influence,
            Question::Reflection => &self.reflection,
        }
    }

    /// Heading for `year`.
    pub fn heading_for(&self, year: u16) -> String {
        self.year_heading.replace("{year}", &year.to_string())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

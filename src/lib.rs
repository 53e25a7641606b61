//! Retrospect renders a ten-year creator retrospective questionnaire into one poster image.
//!
//! The flow is two passes over the same text:
//!
//! - [`plan_poster`] wraps every answer and sums the extents of both columns
//! - [`render_poster`] allocates a canvas of that size and draws into it at matching offsets
//!
//! A missing font never fails a render; [`FontBook`] falls back to a built-in bitmap face.
#![forbid(unsafe_code)]

mod config;
mod form;
mod foundation;
mod layout;
mod render;
mod text;

pub use crate::config::{DEFAULT_FONT_PATH, FontSizes, Labels, PosterConfig, PosterLayout, Theme};
pub use crate::form::model::{
    FIRST_YEAR, FormRecord, Question, Questionnaire, YEAR_COUNT, YearEntry, left_years,
    right_years, years,
};
pub use crate::form::template::{
    DATE_FORMAT, DEFAULT_CREATOR, DEFAULT_TITLE, blank_questionnaire, date_label, today_label,
};
pub use crate::foundation::core::{Canvas, Rgb8};
pub use crate::foundation::error::{RetrospectError, RetrospectResult};
pub use crate::layout::plan::{
    ColumnPlan, ColumnSummary, PlanSummary, PosterPlan, YearPlan, YearSummary, plan_poster,
    year_height,
};
pub use crate::layout::wrap::{AnswerLines, LayoutBlock, estimate_height, wrap_text};
pub use crate::render::poster::{PosterImage, render, render_poster};
pub use crate::text::font::{Anchor, FontBook};

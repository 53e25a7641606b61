use serde::Serialize;

use crate::config::PosterLayout;
use crate::form::model::{Question, Questionnaire, left_years, right_years};
use crate::foundation::core::Canvas;
use crate::layout::wrap::LayoutBlock;

/// Measured blocks for one year.
#[derive(Clone, Debug)]
pub struct YearPlan {
    pub year: u16,
    /// One block per [`Question::ALL`] entry, in the same order.
    pub blocks: Vec<LayoutBlock>,
    /// Heading, four question/answer blocks and trailing margin.
    pub height_px: u32,
}

/// One column of five years.
#[derive(Clone, Debug)]
pub struct ColumnPlan {
    /// Left edge of the column.
    pub x: u32,
    pub years: Vec<YearPlan>,
    /// Sum of the year heights.
    pub height_px: u32,
}

/// Pre-computed extents for a whole poster. The renderer draws from this plan.
#[derive(Clone, Debug)]
pub struct PosterPlan {
    pub canvas: Canvas,
    /// Y coordinate where both columns start.
    pub content_top: u32,
    pub wrap_width_chars: usize,
    /// Left column, then right column.
    pub columns: [ColumnPlan; 2],
}

impl PosterPlan {
    /// Height of the taller column.
    pub fn content_height(&self) -> u32 {
        self.columns[0].height_px.max(self.columns[1].height_px)
    }

    /// Serializable digest, used by the `measure` command.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            canvas: self.canvas,
            content_top: self.content_top,
            wrap_width_chars: self.wrap_width_chars,
            columns: self
                .columns
                .iter()
                .map(|c| ColumnSummary {
                    height_px: c.height_px,
                    years: c
                        .years
                        .iter()
                        .map(|y| YearSummary {
                            year: y.year,
                            height_px: y.height_px,
                            answer_lines: y.blocks.iter().map(LayoutBlock::line_count).collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PlanSummary {
    pub canvas: Canvas,
    pub content_top: u32,
    pub wrap_width_chars: usize,
    pub columns: Vec<ColumnSummary>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ColumnSummary {
    pub height_px: u32,
    pub years: Vec<YearSummary>,
}

#[derive(Clone, Debug, Serialize)]
pub struct YearSummary {
    pub year: u16,
    pub height_px: u32,
    pub answer_lines: Vec<usize>,
}

/// Height of one year given its measured answer blocks.
pub fn year_height(layout: &PosterLayout, blocks: &[LayoutBlock]) -> u32 {
    let per_question: u32 = blocks
        .iter()
        .map(|b| {
            layout
                .line_height
                .saturating_add(b.height_px)
                .saturating_add(layout.question_spacing)
        })
        .fold(0, u32::saturating_add);
    layout
        .year_header
        .saturating_add(per_question)
        .saturating_add(layout.year_trailing)
}

fn plan_year(q: &Questionnaire, layout: &PosterLayout, wrap: usize, year: u16) -> YearPlan {
    let entry = q.year(year);
    let blocks: Vec<LayoutBlock> = Question::ALL
        .iter()
        .map(|&question| LayoutBlock::for_answer(entry.answer(question), wrap, layout.line_height))
        .collect();
    let height_px = year_height(layout, &blocks);
    YearPlan {
        year,
        blocks,
        height_px,
    }
}

fn plan_column(
    q: &Questionnaire,
    layout: &PosterLayout,
    wrap: usize,
    x: u32,
    years: impl Iterator<Item = u16>,
) -> ColumnPlan {
    let years: Vec<YearPlan> = years.map(|y| plan_year(q, layout, wrap, y)).collect();
    let height_px = years.iter().map(|y| y.height_px).fold(0, u32::saturating_add);
    ColumnPlan {
        x,
        years,
        height_px,
    }
}

/// Measure every answer and size the canvas: `content_top + max(left, right) + bottom_margin`.
pub fn plan_poster(q: &Questionnaire, layout: &PosterLayout) -> PosterPlan {
    let wrap = layout.wrap_width_chars();
    let [left_x, right_x] = layout.column_x();
    let columns = [
        plan_column(q, layout, wrap, left_x, left_years()),
        plan_column(q, layout, wrap, right_x, right_years()),
    ];

    let content_top = layout.content_top();
    let content = columns[0].height_px.max(columns[1].height_px);
    let canvas = Canvas {
        width: layout.width,
        height: content_top
            .saturating_add(content)
            .saturating_add(layout.bottom_margin),
    };

    tracing::debug!(
        wrap_width_chars = wrap,
        left_px = columns[0].height_px,
        right_px = columns[1].height_px,
        height = canvas.height,
        "planned poster"
    );

    PosterPlan {
        canvas,
        content_top,
        wrap_width_chars: wrap,
        columns,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;

use crate::config::PosterConfig;
use crate::form::model::{Question, Questionnaire};
use crate::foundation::error::{RetrospectError, RetrospectResult};
use crate::layout::plan::{ColumnPlan, PosterPlan, plan_poster};
use crate::layout::wrap::AnswerLines;
use crate::render::canvas::Surface;
use crate::text::font::{Anchor, FontBook};

/// A finished poster plus the layout it was drawn from.
#[derive(Clone, Debug)]
pub struct PosterImage {
    /// Opaque RGB pixels.
    pub image: image::RgbImage,
    /// Extents computed before drawing.
    pub plan: PosterPlan,
    /// Where the drawing cursor of each column ended, left then right.
    pub drawn_column_bottoms: [u32; 2],
    /// Whether text was drawn with the built-in bitmap face.
    pub builtin_font: bool,
}

impl PosterImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Render with the font named by `config.font_path`, falling back to the built-in face.
pub fn render(q: &Questionnaire, config: &PosterConfig) -> RetrospectResult<PosterImage> {
    let mut fonts = FontBook::load(&config.font_path);
    render_poster(q, config, &mut fonts)
}

/// Measure the questionnaire, allocate a canvas that fits both columns and draw the poster.
#[tracing::instrument(level = "debug", skip_all, fields(builtin_font = fonts.is_builtin()))]
pub fn render_poster(
    q: &Questionnaire,
    config: &PosterConfig,
    fonts: &mut FontBook,
) -> RetrospectResult<PosterImage> {
    config.validate()?;
    let layout = &config.layout;
    let theme = &config.theme;
    let sizes = layout.font_sizes;

    let plan = plan_poster(q, layout);
    let mut surface = Surface::new(plan.canvas, theme.background)?;
    let width = f64::from(plan.canvas.width);
    let height = f64::from(plan.canvas.height);
    let margin = f64::from(layout.margin);

    fonts.draw(
        &mut surface,
        &q.form.title,
        width / 2.0,
        f64::from(layout.title_baseline),
        Anchor::CenterBaseline,
        sizes.title,
        theme.title,
    )?;

    let identity_y = f64::from(layout.identity_y());
    let labels = &config.labels;
    let identity = [
        (
            format!("{}{}", labels.writer_prefix, q.form.writer),
            margin,
            Anchor::LeftTop,
        ),
        (
            format!("{}{}", labels.date_prefix, q.form.date),
            width / 2.0,
            Anchor::CenterTop,
        ),
        (
            format!("{}{}", labels.creator_prefix, q.form.creator),
            width - margin,
            Anchor::RightTop,
        ),
    ];
    for (text, x, anchor) in &identity {
        fonts.draw(
            &mut surface,
            text,
            *x,
            identity_y,
            *anchor,
            sizes.identity,
            theme.text,
        )?;
    }

    surface.hline(
        margin,
        width - margin,
        f64::from(layout.rule_y()),
        layout.rule_width,
        theme.title,
    );

    let mut drawn_column_bottoms = [0u32; 2];
    for (bottom, column) in drawn_column_bottoms.iter_mut().zip(&plan.columns) {
        *bottom = draw_column(&mut surface, fonts, config, column, plan.content_top)?;
        let planned = plan.content_top.saturating_add(column.height_px);
        if *bottom != planned {
            return Err(RetrospectError::layout(format!(
                "column at x={} drew to y={} but was planned to end at y={planned}",
                column.x, *bottom
            )));
        }
    }

    surface.vline(
        layout.divider_x(),
        f64::from(plan.content_top),
        height - f64::from(layout.bottom_margin),
        layout.rule_width,
        theme.text,
    );

    let image = surface.finish()?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "rendered poster"
    );

    Ok(PosterImage {
        image,
        plan,
        drawn_column_bottoms,
        builtin_font: fonts.is_builtin(),
    })
}

/// Draw one column top to bottom and return where the cursor ended.
fn draw_column(
    surface: &mut Surface,
    fonts: &mut FontBook,
    config: &PosterConfig,
    column: &ColumnPlan,
    top: u32,
) -> RetrospectResult<u32> {
    let layout = &config.layout;
    let theme = &config.theme;
    let labels = &config.labels;
    let sizes = layout.font_sizes;
    let lh = layout.line_height;
    let x = f64::from(column.x);
    let answer_x = x + f64::from(layout.answer_indent);

    let mut y = top;
    for year in &column.years {
        fonts.draw(
            surface,
            &labels.heading_for(year.year),
            x,
            f64::from(y.saturating_add(layout.year_header_text_offset)),
            Anchor::LeftTop,
            sizes.year,
            theme.highlight,
        )?;
        y = y.saturating_add(layout.year_header);

        for (question, block) in Question::ALL.iter().zip(&year.blocks) {
            fonts.draw(
                surface,
                labels.question(*question),
                x,
                f64::from(y),
                Anchor::LeftTop,
                sizes.question,
                theme.highlight,
            )?;
            y = y.saturating_add(lh);

            match &block.lines {
                AnswerLines::Placeholder => {
                    fonts.draw(
                        surface,
                        &labels.placeholder,
                        answer_x,
                        f64::from(y),
                        Anchor::LeftTop,
                        sizes.answer,
                        theme.text,
                    )?;
                    y = y.saturating_add(lh);
                }
                AnswerLines::Wrapped(lines) => {
                    for line in lines {
                        fonts.draw(
                            surface,
                            line,
                            answer_x,
                            f64::from(y),
                            Anchor::LeftTop,
                            sizes.answer,
                            theme.text,
                        )?;
                        y = y.saturating_add(lh);
                    }
                }
            }
            y = y.saturating_add(layout.question_spacing);
        }

        let rule_y = f64::from(y) - f64::from(layout.separator_lift);
        surface.hline(
            x + f64::from(layout.separator_inset),
            x + f64::from(layout.column_width()) - f64::from(layout.separator_inset),
            rule_y,
            layout.separator_width,
            theme.accent,
        );
        y = y.saturating_add(layout.year_trailing);
    }
    Ok(y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/poster.rs"]
mod tests;

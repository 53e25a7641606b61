use super::*;
use crate::form::model::FormRecord;

fn identity() -> FormRecord {
    FormRecord {
        title: "T".to_owned(),
        creator: "C".to_owned(),
        writer: "W".to_owned(),
        date: "D".to_owned(),
    }
}

#[test]
fn empty_year_is_fixed_chrome_plus_four_placeholders() {
    let layout = PosterLayout::default();
    let blocks: Vec<LayoutBlock> = (0..4)
        .map(|_| LayoutBlock::for_answer(None, 38, layout.line_height))
        .collect();
    // 80 heading + 4 * (30 label + 30 placeholder + 20 spacing) + 40 trailing
    assert_eq!(year_height(&layout, &blocks), 440);
}

#[test]
fn all_empty_poster_has_documented_minimum_height() {
    let layout = PosterLayout::default();
    let plan = plan_poster(&Questionnaire::new(identity()), &layout);

    assert_eq!(plan.columns[0].height_px, 2200);
    assert_eq!(plan.columns[1].height_px, 2200);
    assert_eq!(plan.content_top, 210);
    assert_eq!(
        plan.canvas,
        Canvas {
            width: 1600,
            height: 2460
        }
    );
    assert_eq!(plan.columns[0].x, 50);
    assert_eq!(plan.columns[1].x, 820);
    assert_eq!(
        plan.columns[0].years.iter().map(|y| y.year).collect::<Vec<_>>(),
        vec![2016, 2017, 2018, 2019, 2020]
    );
}

#[test]
fn taller_column_drives_canvas_height() {
    let layout = PosterLayout::default();
    let mut q = Questionnaire::new(identity());
    q.year_mut(2023)
        .set_answer(Question::Reflection, "line one\nline two\n\nline four");

    let plan = plan_poster(&q, &layout);
    assert_eq!(plan.columns[0].height_px, 2200);
    assert_eq!(plan.columns[1].height_px, 2200 + 3 * 30);
    assert_eq!(plan.canvas.height, 2460 + 90);
    assert_eq!(plan.content_height(), 2290);
}

#[test]
fn style_excerpt_with_manual_breaks_adds_its_extra_lines() {
    let layout = PosterLayout::default();
    let excerpt = format!("{}\n{}\n{}", "x".repeat(100), "y".repeat(98), "z".repeat(100));
    assert_eq!(excerpt.chars().count(), 300);

    let mut q = Questionnaire::new(identity());
    q.year_mut(2016).set_answer(Question::StyleExcerpt, excerpt);

    let plan = plan_poster(&q, &layout);
    // 3 + 3 + 3 wrapped lines replace the single placeholder line.
    assert_eq!(plan.columns[0].years[0].blocks[1].line_count(), 9);
    assert_eq!(plan.canvas.height, 2460 + 8 * 30);
}

#[test]
fn summary_reports_per_year_line_counts() {
    let layout = PosterLayout::default();
    let mut q = Questionnaire::new(identity());
    q.year_mut(2021).set_answer(Question::WorkSummary, "a\nb");

    let summary = plan_poster(&q, &layout).summary();
    assert_eq!(summary.wrap_width_chars, 38);
    assert_eq!(summary.columns.len(), 2);
    assert_eq!(summary.columns[1].years[0].year, 2021);
    assert_eq!(summary.columns[1].years[0].answer_lines, vec![2, 1, 1, 1]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["canvas"]["height"], 2490);
}

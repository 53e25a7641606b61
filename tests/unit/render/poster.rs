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

fn render_builtin(q: &Questionnaire, config: &PosterConfig) -> RetrospectResult<PosterImage> {
    render_poster(q, config, &mut FontBook::builtin())
}

#[test]
fn all_empty_poster_has_minimum_size_and_chrome() {
    let config = PosterConfig::default();
    let poster = render_builtin(&Questionnaire::new(identity()), &config).unwrap();

    assert_eq!((poster.width(), poster.height()), (1600, 2460));
    assert_eq!(poster.drawn_column_bottoms, [2410, 2410]);
    assert!(poster.builtin_font);

    let bg = image::Rgb::from(config.theme.background);
    let text = image::Rgb::from(config.theme.text);
    let title = image::Rgb::from(config.theme.title);
    let px = |x: u32, y: u32| *poster.image.get_pixel(x, y);

    assert_eq!(px(5, 5), bg);
    assert_eq!(px(1595, 2455), bg);
    // Header rule spans the margins.
    assert_eq!(px(300, 169), title);
    assert_eq!(px(1500, 170), title);
    assert_eq!(px(20, 170), bg);
    // Column divider runs from the content top to the bottom margin.
    assert_eq!(px(800, 1000), text);
    assert_eq!(px(800, 2400), text);
    assert_eq!(px(800, 2430), bg);
}

#[test]
fn placeholder_is_drawn_for_empty_answers() {
    let config = PosterConfig::default();
    let poster = render_builtin(&Questionnaire::new(identity()), &config).unwrap();
    let text = config.theme.text;

    // First placeholder line of 2016 sits at y = 210 + 80 + 30, indented to x = 60.
    let inked = (320..344)
        .flat_map(|y| (60..300).map(move |x| (x, y)))
        .any(|(x, y)| {
            let p = poster.image.get_pixel(x, y).0;
            p == [text.r, text.g, text.b]
        });
    assert!(inked);
}

#[test]
fn drawn_columns_match_plan_for_growing_answers() {
    let config = PosterConfig::default();
    let sentence = "Wrote a long serial about lighthouse keepers, then rewrote it twice. ";
    for n in [0usize, 1, 3, 10, 40] {
        let mut q = Questionnaire::new(identity());
        let body = sentence.repeat(n);
        q.year_mut(2018)
            .set_answer(Question::StyleExcerpt, format!("{body}\n\n{body}"));
        q.year_mut(2024).set_answer(Question::Reflection, body.clone());

        let poster = render_builtin(&q, &config).unwrap();
        let plan = &poster.plan;
        for (col, bottom) in plan.columns.iter().zip(poster.drawn_column_bottoms) {
            assert_eq!(bottom, plan.content_top + col.height_px);
        }
        assert!(
            poster.height()
                >= plan.content_top + plan.content_height() + config.layout.bottom_margin
        );
    }
}

#[test]
fn style_excerpt_with_breaks_grows_canvas_by_extra_lines() {
    let config = PosterConfig::default();
    let empty = render_builtin(&Questionnaire::new(identity()), &config).unwrap();

    let excerpt = format!("{}\n{}\n{}", "x".repeat(100), "y".repeat(98), "z".repeat(100));
    let mut q = Questionnaire::new(identity());
    q.year_mut(2016).set_answer(Question::StyleExcerpt, excerpt);
    let tall = render_builtin(&q, &config).unwrap();

    let extra_lines = tall.plan.columns[0].years[0].blocks[1].line_count() - 1;
    assert_eq!(extra_lines, 8);
    assert_eq!(
        tall.height() - empty.height(),
        extra_lines as u32 * config.layout.line_height
    );
}

#[test]
fn poster_taller_than_one_raster_surface_is_drawn_in_full() {
    let mut config = PosterConfig::default();
    config.layout.width = 320;
    let mut q = Questionnaire::new(identity());
    q.year_mut(2016)
        .set_answer(Question::Reflection, "\n".repeat(2200));

    let poster = render_builtin(&q, &config).unwrap();
    let plan = &poster.plan;
    assert!(poster.height() > u32::from(u16::MAX));
    assert_eq!(poster.height(), 2460 + 2200 * config.layout.line_height);
    for (col, bottom) in plan.columns.iter().zip(poster.drawn_column_bottoms) {
        assert_eq!(bottom, plan.content_top + col.height_px);
    }

    let highlight = image::Rgb::from(config.theme.highlight);
    let text = image::Rgb::from(config.theme.text);
    // 2017 starts below the 65535px mark; its heading must still be inked.
    let heading_top = plan.content_top + plan.columns[0].years[0].height_px;
    assert!(heading_top > u32::from(u16::MAX));
    let inked = (heading_top..heading_top + config.layout.year_header)
        .flat_map(|y| (50..140).map(move |x| (x, y)))
        .any(|(x, y)| *poster.image.get_pixel(x, y) == highlight);
    assert!(inked);

    let divider_x = config.layout.divider_x() as u32;
    assert_eq!(*poster.image.get_pixel(divider_x, poster.height() - 60), text);
}

#[test]
fn invalid_config_is_rejected_before_drawing() {
    let mut config = PosterConfig::default();
    config.layout.line_height = 0;
    let err = render_builtin(&Questionnaire::default(), &config).unwrap_err();
    assert!(matches!(err, RetrospectError::Validation(_)));
}

#[test]
fn render_uses_fallback_when_font_path_is_missing() {
    let config = PosterConfig {
        font_path: "no/such/font.ttf".into(),
        ..PosterConfig::default()
    };
    let poster = render(&Questionnaire::new(identity()), &config).unwrap();
    assert!(poster.builtin_font);
    assert_eq!(poster.height(), 2460);
}

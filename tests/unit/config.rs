use super::*;

#[test]
fn default_geometry_matches_stock_poster() {
    let l = PosterLayout::default();
    assert_eq!(l.column_width(), 730);
    assert_eq!(l.text_width(), 690);
    assert_eq!(l.column_x(), [50, 820]);
    assert_eq!(l.divider_x(), 800.0);
    assert_eq!(l.identity_y(), 120);
    assert_eq!(l.rule_y(), 170);
    assert_eq!(l.content_top(), 210);
    assert_eq!(l.wrap_width_chars(), 38);
    l.validate().unwrap();
}

#[test]
fn partial_config_keeps_other_defaults() {
    let json = r##"{
        "layout": { "line_height": 40 },
        "theme": { "background": "#ffffff" },
        "font_path": "fonts/custom.otf"
    }"##;
    let cfg = PosterConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.layout.line_height, 40);
    assert_eq!(cfg.layout.width, 1600);
    assert_eq!(cfg.theme.background, Rgb8::new(255, 255, 255));
    assert_eq!(cfg.theme.text, Theme::default().text);
    assert_eq!(cfg.labels, Labels::default());
    assert_eq!(cfg.font_path, PathBuf::from("fonts/custom.otf"));
}

#[test]
fn validation_rejects_degenerate_layouts() {
    let mut l = PosterLayout {
        line_height: 0,
        ..PosterLayout::default()
    };
    assert!(l.validate().is_err());

    l = PosterLayout {
        width: 100,
        ..PosterLayout::default()
    };
    assert!(l.validate().is_err());

    l = PosterLayout::default();
    l.font_sizes.answer = 0.0;
    assert!(l.validate().is_err());
    assert_eq!(l.wrap_width_chars(), 1);
}

#[test]
fn heading_substitutes_year() {
    let labels = Labels {
        year_heading: "Year {year}".to_owned(),
        ..Labels::default()
    };
    assert_eq!(labels.heading_for(2019), "Year 2019");
    assert_eq!(
        Labels::default().question(Question::Reflection),
        "(4) 本年创作的总结感想是："
    );
}

#[test]
fn overflowing_offsets_fail_validation_instead_of_panicking() {
    let wide_margin = PosterConfig::from_reader(r#"{"layout":{"margin":3000000000}}"#.as_bytes())
        .unwrap();
    assert_eq!(wide_margin.layout.column_width(), 0);
    assert!(matches!(
        wide_margin.validate(),
        Err(RetrospectError::Validation(_))
    ));

    let low_title =
        PosterConfig::from_reader(r#"{"layout":{"title_baseline":4294967295}}"#.as_bytes())
            .unwrap();
    assert_eq!(low_title.layout.content_top(), u32::MAX);
    assert!(matches!(
        low_title.validate(),
        Err(RetrospectError::Validation(_))
    ));

    let tall_header = PosterLayout {
        year_header: u32::MAX / 4,
        ..PosterLayout::default()
    };
    assert!(tall_header.validate().is_err());
}

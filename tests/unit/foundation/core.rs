use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(
        Rgb8::from_hex("#F4F1EA").unwrap(),
        Rgb8::new(0xf4, 0xf1, 0xea)
    );
    assert_eq!(Rgb8::from_hex("2d4739").unwrap(), Rgb8::new(0x2d, 0x47, 0x39));
    assert!(Rgb8::from_hex("#fff").is_err());
    assert!(Rgb8::from_hex("#gg0000").is_err());
}

#[test]
fn color_serde_accepts_hex_and_array() {
    let a: Rgb8 = serde_json::from_str("\"#121619\"").unwrap();
    let b: Rgb8 = serde_json::from_str("[18, 22, 25]").unwrap();
    assert_eq!(a, b);
    assert_eq!(serde_json::to_string(&a).unwrap(), "\"#121619\"");
    assert!(serde_json::from_str::<Rgb8>("[1, 2]").is_err());
}

#[test]
fn raster_width_limits_width_only() {
    let tall = Canvas {
        width: 1600,
        height: 70_000,
    };
    assert_eq!(tall.raster_width().unwrap(), 1600);
    assert_eq!(tall.rgb_len().unwrap(), 1600 * 70_000 * 3);

    let wide = Canvas {
        width: 70_000,
        height: 10,
    };
    assert!(wide.raster_width().is_err());

    let empty = Canvas {
        width: 0,
        height: 10,
    };
    assert!(empty.raster_width().is_err());

    let flat = Canvas {
        width: 10,
        height: 0,
    };
    assert!(flat.raster_width().is_err());
}

#[test]
fn rgb_len_reports_buffers_that_cannot_exist() {
    let huge = Canvas {
        width: u32::MAX,
        height: u32::MAX,
    };
    assert!(matches!(huge.rgb_len(), Err(RetrospectError::Render(_))));
}

#[test]
fn converts_to_image_pixel() {
    let px: image::Rgb<u8> = Rgb8::new(1, 2, 3).into();
    assert_eq!(px.0, [1, 2, 3]);
}

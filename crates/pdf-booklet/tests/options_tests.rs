use pdf_booklet::*;

#[test]
fn test_defaults() {
    let options = BookletOptions::default();
    assert_eq!(options.sheet_format, SheetFormat::Folded(PaperSize::A4));
    assert_eq!(options.scaling_mode, ScalingMode::Fit);
    assert!(!options.fold_line);
    assert!(options.validate().is_ok());
}

#[test]
fn test_custom_paper_validation() {
    let mut options = BookletOptions::default();

    options.sheet_format = SheetFormat::Spread(PaperSize::Custom {
        width_mm: 140.0,
        height_mm: 216.0,
    });
    assert!(options.validate().is_ok());

    options.sheet_format = SheetFormat::Spread(PaperSize::Custom {
        width_mm: -1.0,
        height_mm: 216.0,
    });
    assert!(matches!(options.validate(), Err(BookletError::Config(_))));

    options.sheet_format = SheetFormat::Folded(PaperSize::Custom {
        width_mm: 210.0,
        height_mm: f32::NAN,
    });
    assert!(options.validate().is_err());
}

#[test]
fn test_sheet_dimensions_are_landscape() {
    for format in [
        SheetFormat::Folded(PaperSize::A3),
        SheetFormat::Folded(PaperSize::Letter),
        SheetFormat::Spread(PaperSize::A5),
        SheetFormat::Spread(PaperSize::Letter),
    ] {
        let (w, h) = format.dimensions_mm();
        assert!(w > h, "{:?} gave {} x {}", format, w, h);
    }
}

#[test]
fn test_folded_and_spread_agree() {
    // An A4 sheet folds into A5 pages; two A5 pages spread to nearly A4
    let (folded_w, folded_h) = SheetFormat::Folded(PaperSize::A4).dimensions_mm();
    assert_eq!((folded_w, folded_h), (297.0, 210.0));

    let (spread_w, spread_h) = SheetFormat::Spread(PaperSize::A5).dimensions_mm();
    assert_eq!((spread_w, spread_h), (296.0, 210.0));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        sheet_format: SheetFormat::Spread(PaperSize::Letter),
        scaling_mode: ScalingMode::ShrinkToFit,
        fold_line: true,
    };

    let temp = NamedTempFile::new().unwrap();
    options.save(temp.path()).await.unwrap();

    let loaded = BookletOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), r#"{ "fold_line": true }"#).unwrap();

    let loaded = BookletOptions::load(temp.path()).await.unwrap();
    assert!(loaded.fold_line);
    assert_eq!(loaded.sheet_format, SheetFormat::default());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_bad_config() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), "not json").unwrap();
    assert!(matches!(
        BookletOptions::load(temp.path()).await,
        Err(BookletError::Config(_))
    ));

    std::fs::write(
        temp.path(),
        r#"{ "sheet_format": { "Folded": { "Custom": { "width_mm": 0.0, "height_mm": 10.0 } } } }"#,
    )
    .unwrap();
    assert!(matches!(
        BookletOptions::load(temp.path()).await,
        Err(BookletError::Config(_))
    ));
}

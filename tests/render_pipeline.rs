use gitart::{
    ActivityRecord, ActivitySeries, Compositor, LevelPolicy, RenderGeometry, StyleId, StyleParams,
    ViewportClass, caption_text,
};

use chrono::NaiveDate;

fn year_series(seed: u64) -> ActivitySeries {
    ActivitySeries::synthetic(2026, seed, LevelPolicy::Absolute).unwrap()
}

fn init_diagnostics() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn every_style_renders_a_full_year_at_the_resolved_size() {
    let series = year_series(42);
    let comp = Compositor::new();
    let params = StyleParams::default();

    for style in StyleId::ALL {
        let raster = comp
            .render(&series, style, &params, ViewportClass::Standard)
            .unwrap();
        let geo = RenderGeometry::resolve(series.len(), ViewportClass::Standard, false, false);
        assert_eq!((raster.width, raster.height), (geo.canvas_width, geo.canvas_height), "{style}");
        assert_eq!(raster.data.len(), (raster.width * raster.height * 4) as usize);
    }
}

#[test]
fn rendering_twice_is_pixel_identical_for_every_style() {
    // Covers the scatter determinism property and, more broadly, that no
    // style consults a clock or entropy source.
    let series = year_series(7);
    let comp = Compositor::new();
    let params = StyleParams {
        text: Some("RUST".into()),
        display_name: Some("ada".into()),
        show_caption: true,
        show_month_labels: true,
        ..Default::default()
    };

    for style in StyleId::ALL {
        let a = comp
            .render(&series, style, &params, ViewportClass::Standard)
            .unwrap();
        let b = comp
            .render(&series, style, &params, ViewportClass::Standard)
            .unwrap();
        assert_eq!(a.data, b.data, "{style} is not deterministic");
    }
}

#[test]
fn rendering_leaves_the_series_untouched() {
    let series = year_series(9);
    let before = series.clone();
    let comp = Compositor::new();
    for style in StyleId::ALL {
        comp.render(&series, style, &StyleParams::default(), ViewportClass::Compact)
            .unwrap();
    }
    assert_eq!(series, before);
}

#[test]
fn compact_viewport_is_denser_than_standard() {
    let series = year_series(3);
    let comp = Compositor::new();
    let std_r = comp
        .render(&series, StyleId::Classic, &StyleParams::default(), ViewportClass::Standard)
        .unwrap();
    let compact = comp
        .render(&series, StyleId::Classic, &StyleParams::default(), ViewportClass::Compact)
        .unwrap();
    assert!(compact.width < std_r.width);
    assert!(compact.height < std_r.height);
}

#[test]
fn empty_series_renders_only_background() {
    let comp = Compositor::new();
    for style in StyleId::ALL {
        let raster = comp
            .render(
                &ActivitySeries::default(),
                style,
                &StyleParams::default(),
                ViewportClass::Standard,
            )
            .unwrap();
        let bg = comp.registry().get(style).unwrap().background();
        assert!(
            raster.data.chunks_exact(4).all(|px| px == bg),
            "{style} drew on an empty series"
        );
    }
}

#[test]
fn caption_scenario_matches_the_contract() {
    // 365 commits across a week, name "ada".
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let counts = [52u32, 52, 52, 52, 52, 52, 53];
    let series = ActivitySeries {
        days: counts
            .iter()
            .enumerate()
            .map(|(i, &count)| ActivityRecord {
                date: start + chrono::Days::new(i as u64),
                count,
                level: LevelPolicy::Absolute.classify(count, 53),
            })
            .collect(),
    };
    assert_eq!(series.total_count(), 365);
    assert_eq!(
        caption_text("ada", series.total_count(), series.year().unwrap()),
        "@ada \u{2022} 365 commits in 2026"
    );

    // The captioned render reserves the caption band.
    let comp = Compositor::new();
    let params = StyleParams {
        display_name: Some("ada".into()),
        show_caption: true,
        ..Default::default()
    };
    let with = comp
        .render(&series, StyleId::Classic, &params, ViewportClass::Standard)
        .unwrap();
    let without = comp
        .render(&series, StyleId::Classic, &StyleParams::default(), ViewportClass::Standard)
        .unwrap();
    assert!(with.height > without.height);
}

#[test]
fn overlong_overlay_text_degrades_instead_of_failing() {
    // The overflow warning goes through the subscriber; the render itself
    // must still succeed under both overflow policies.
    init_diagnostics();

    let series = ActivitySeries {
        days: year_series(6).days[..14].to_vec(),
    };
    let comp = Compositor::new();

    let overlap = comp
        .render(
            &series,
            StyleId::Text,
            &StyleParams {
                text: Some("OVERLONGTEXT".into()),
                ..Default::default()
            },
            ViewportClass::Standard,
        )
        .unwrap();
    let truncated = comp
        .render(
            &series,
            StyleId::Text,
            &StyleParams {
                text: Some("OVERLONGTEXT".into()),
                text_overflow: gitart::TextOverflow::Truncate,
                ..Default::default()
            },
            ViewportClass::Standard,
        )
        .unwrap();

    assert_eq!(overlap.width, truncated.width);
    assert_ne!(overlap.data, truncated.data);
}

#[test]
fn relative_policy_on_an_all_zero_series_is_all_level_zero() {
    let json = r#"[
        {"date": "2026-01-01", "count": 0},
        {"date": "2026-01-02", "count": 0},
        {"date": "2026-01-03", "count": 0}
    ]"#;
    let series = ActivitySeries::from_json(json, LevelPolicy::RelativeToMax).unwrap();
    assert!(series.days.iter().all(|d| d.level == 0));

    // And it still renders.
    Compositor::new()
        .render(&series, StyleId::Heatmap, &StyleParams::default(), ViewportClass::Standard)
        .unwrap();
}

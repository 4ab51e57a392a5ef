use chart_vega::api::{Converter, ConverterConfig, CurrentChartProvider, convert};
use chart_vega::core::{
    AxisMetadata, BinningResult, ChartSource, ClassifierConfig, DataPoint, GroupedContainer,
    PathCollection, PlotKind, PointCollection, SceneChart, ShapeKind, ShapePrimitive,
};
use chart_vega::error::ChartError;

struct CurrentFigure {
    active: Option<SceneChart>,
}

impl CurrentChartProvider for CurrentFigure {
    fn current_chart(&self) -> Option<&dyn ChartSource> {
        self.active.as_ref().map(|chart| chart as &dyn ChartSource)
    }
}

fn line_chart() -> SceneChart {
    SceneChart::new()
        .with_path_collection(
            PathCollection::from_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).with_label("f"),
        )
        .with_metadata(AxisMetadata::new("squares", "n", "n^2"))
}

#[test]
fn line_chart_converts_end_to_end() {
    let conversion = convert(&line_chart()).expect("convert");

    assert_eq!(conversion.kind, PlotKind::Line);
    assert_eq!(conversion.table.numbers("x").expect("x"), &[0.0, 1.0, 2.0]);
    assert_eq!(conversion.table.numbers("y").expect("y"), &[0.0, 1.0, 4.0]);
    assert_eq!(
        conversion.table.texts("label").expect("label"),
        &["f", "f", "f"]
    );
    assert_eq!(conversion.metadata, AxisMetadata::new("squares", "n", "n^2"));
}

#[test]
fn empty_chart_is_an_unsupported_kind() {
    let err = convert(&SceneChart::new()).expect_err("empty chart must fail");
    assert!(matches!(
        err,
        ChartError::UnsupportedKind {
            kind: PlotKind::Unknown
        }
    ));
}

#[test]
fn non_rectangular_shapes_are_an_unsupported_kind() {
    let chart = SceneChart::new()
        .with_shape(ShapePrimitive::rectangle(0.0, 0.0, 1.0, 1.0).with_kind(ShapeKind::Polygon));
    let err = convert(&chart).expect_err("polygons are not supported");
    assert!(matches!(err, ChartError::UnsupportedKind { .. }));
}

#[test]
fn recognized_but_empty_chart_reports_no_data() {
    let chart = SceneChart::new().with_point_collection(PointCollection::new(Vec::new()));
    let err = convert(&chart).expect_err("no points to extract");
    assert!(matches!(
        err,
        ChartError::NoDataExtracted {
            kind: PlotKind::Scatter
        }
    ));
    assert!(format!("{err}").contains("scatter"));
}

#[test]
fn histogram_container_without_rectangles_reports_no_data() {
    let chart = SceneChart::new().with_grouped_container(GroupedContainer::new("hist"));
    let err = convert(&chart).expect_err("nothing to rebuild bins from");
    assert!(matches!(
        err,
        ChartError::NoDataExtracted {
            kind: PlotKind::Histogram
        }
    ));
}

#[test]
fn explicit_chart_wins_over_current_chart() {
    let provider = CurrentFigure {
        active: Some(
            SceneChart::new()
                .with_point_collection(PointCollection::new(vec![DataPoint::new(1.0, 1.0)])),
        ),
    };
    let explicit = line_chart();
    let converter = Converter::new(ConverterConfig::default()).expect("converter");

    let conversion = converter
        .convert_or_current(Some(&explicit as &dyn ChartSource), &provider)
        .expect("convert explicit");
    assert_eq!(conversion.kind, PlotKind::Line);

    let fallback = converter
        .convert_or_current(None, &provider)
        .expect("convert current");
    assert_eq!(fallback.kind, PlotKind::Scatter);
}

#[test]
fn missing_current_chart_is_reported() {
    let provider = CurrentFigure { active: None };
    let err = Converter::new(ConverterConfig::default())
        .expect("converter")
        .convert_or_current(None, &provider)
        .expect_err("no chart at all");
    assert!(matches!(err, ChartError::MissingChart));
}

#[test]
fn converter_applies_classifier_config() {
    let chart = SceneChart::new().with_shapes(
        (0..4).map(|i| ShapePrimitive::rectangle(f64::from(i), 0.0, 1.0, 1.0 + f64::from(i))),
    );
    assert_eq!(convert(&chart).expect("default").kind, PlotKind::Bar);

    let config = ConverterConfig::new()
        .with_classifier(ClassifierConfig::default().with_min_rectangles_exclusive(2));
    let converter = Converter::new(config).expect("converter");
    let conversion = converter.convert(&chart).expect("convert");
    assert_eq!(conversion.kind, PlotKind::Histogram);
    assert_eq!(conversion.table.row_count(), 4);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ConverterConfig::new()
        .with_classifier(ClassifierConfig::default().with_adjacency_tolerance(f64::NAN));
    assert!(Converter::new(config).is_err());
}

#[test]
fn config_json_round_trip_fills_defaults() {
    let config = ConverterConfig::from_json_str(r#"{"classifier": {"max_distinct_widths": 1}}"#)
        .expect("parse config");
    assert_eq!(config.classifier.max_distinct_widths, 1);
    assert_eq!(config.classifier.min_rectangles_exclusive, 5);
    assert_eq!(config.synthesis.width, 400);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ConverterConfig::from_json_str(&json).expect("reparse");
    assert_eq!(parsed, config);
}

#[test]
fn histogram_with_retained_binning_converts_to_spec() {
    let chart = SceneChart::new()
        .with_retained_binning(BinningResult::new(
            vec![1.0, 3.0, 1.0],
            vec![0.0, 1.0, 2.0, 3.0],
        ))
        .with_axis_labels("value", "");
    let converter = Converter::new(ConverterConfig::default()).expect("converter");
    let spec = converter.to_spec(&chart).expect("spec");

    assert_eq!(spec.mark_type(), Some("bar"));
    assert_eq!(spec.record_count(), 3);
    assert_eq!(spec.as_value()["title"], "Histogram");
    assert_eq!(spec.as_value()["encoding"]["x"]["title"], "value");
    assert_eq!(spec.as_value()["encoding"]["y"]["title"], "Frequency");
}

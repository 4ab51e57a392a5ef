use chart_vega::api::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
use chart_vega::core::{
    BinningResult, GroupedContainer, PathCollection, PlotKind, SceneChart, ShapeKind,
    ShapePrimitive, classify,
};

fn sample_scene() -> SceneChart {
    SceneChart::new()
        .with_path_collection(PathCollection::from_xy(&[0.0, 1.0], &[2.0, 3.0]).with_label("a"))
        .with_shape(ShapePrimitive::rectangle(0.0, 0.0, 1.0, 2.0).with_kind(ShapeKind::Ellipse))
        .with_grouped_container(GroupedContainer::new("bars").with_shape_indices(vec![0]))
        .with_retained_binning(BinningResult::new(vec![1.0], vec![0.0, 1.0]))
        .with_title("scene")
}

#[test]
fn contract_v1_round_trips() {
    let scene = sample_scene();
    let json = scene.to_json_contract_v1_pretty().expect("serialize");

    let payload: SceneJsonContractV1 = serde_json::from_str(&json).expect("payload");
    assert_eq!(payload.schema_version, SCENE_JSON_SCHEMA_V1);

    let parsed = SceneChart::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, scene);
}

#[test]
fn bare_scene_with_defaults_is_accepted() {
    let raw = r#"{
        "shapes": [
            {"x": 0.0, "y": 0.0, "width": 1.0, "height": 2.0},
            {"x": 2.0, "y": 0.0, "width": 1.0, "height": 3.0}
        ],
        "metadata": {"x_label": "group"}
    }"#;
    let scene = SceneChart::from_json_compat_str(raw).expect("parse");

    assert_eq!(scene.shapes.len(), 2);
    assert!(scene.shapes.iter().all(|shape| shape.kind == ShapeKind::Rectangle));
    assert_eq!(scene.metadata.x_label, "group");
    assert_eq!(classify(&scene), PlotKind::Bar);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let raw = r#"{"schema_version": 99, "scene": {}}"#;
    let err = SceneChart::from_json_compat_str(raw).expect_err("version 99");
    assert!(format!("{err}").contains("unsupported scene schema version"));
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = SceneChart::from_json_compat_str("{not json").expect_err("malformed");
    assert!(format!("{err}").contains("invalid data"));
}

#[test]
fn out_of_range_point_colors_are_rejected_on_load() {
    let bare = r#"{
        "point_collections": [
            {"offsets": [{"x": 0.0, "y": 1.0}], "colors": [{"red": 2.0, "green": 0.0, "blue": 0.0, "alpha": 1.0}]}
        ]
    }"#;
    let err = SceneChart::from_json_compat_str(bare).expect_err("color channel above 1");
    assert!(matches!(err, chart_vega::ChartError::InvalidData(_)));

    let versioned = format!(r#"{{"schema_version": 1, "scene": {bare}}}"#);
    assert!(SceneChart::from_json_compat_str(&versioned).is_err());
}

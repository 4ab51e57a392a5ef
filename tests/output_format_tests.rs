use chart_vega::error::ChartError;
use chart_vega::render::{DeclarativeSpec, OutputFormat, save_spec, save_spec_as};
use serde_json::json;
use std::fs;

fn sample_spec() -> DeclarativeSpec {
    DeclarativeSpec::new(json!({
        "mark": "line",
        "data": {"values": [{"x": 1.0, "label": "</script>"}]},
    }))
}

#[test]
fn format_tokens_parse_case_insensitively() {
    assert_eq!("json".parse::<OutputFormat>().expect("json"), OutputFormat::Json);
    assert_eq!(" HTML ".parse::<OutputFormat>().expect("html"), OutputFormat::Html);
}

#[test]
fn unknown_format_token_is_a_configuration_error() {
    let err = "png".parse::<OutputFormat>().expect_err("png is unsupported");
    assert!(matches!(err, ChartError::UnsupportedOutputFormat(ref token) if token == "png"));
}

#[test]
fn save_json_writes_the_raw_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.json");

    let written = save_spec(&sample_spec(), &path, "json").expect("save");
    assert_eq!(written, path);

    let raw = fs::read_to_string(&path).expect("read back");
    let parsed = DeclarativeSpec::from_json_str(&raw).expect("parse");
    assert_eq!(parsed, sample_spec());
}

#[test]
fn save_html_embeds_the_spec_with_svg_renderer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.html");

    save_spec_as(&sample_spec(), &path, OutputFormat::Html).expect("save");
    let html = fs::read_to_string(&path).expect("read back");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("vegaEmbed(\"#vis\""));
    assert!(html.contains("\"renderer\": \"svg\""));
    assert!(html.contains("\"mark\":\"line\""));
    assert!(html.contains("<\\/script>"));
}

#[test]
fn unsupported_format_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.svg");

    let err = save_spec(&sample_spec(), &path, "svg").expect_err("svg is unsupported");
    assert!(matches!(err, ChartError::UnsupportedOutputFormat(_)));
    assert!(!path.exists());
}

#[test]
fn mark_type_reads_both_mark_forms() {
    assert_eq!(sample_spec().mark_type(), Some("line"));
    let object_mark = DeclarativeSpec::new(json!({"mark": {"type": "bar"}}));
    assert_eq!(object_mark.mark_type(), Some("bar"));
}

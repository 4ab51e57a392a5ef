use chart_vega::api::{Converter, ConverterConfig};
use chart_vega::core::SceneChart;
use chart_vega::render::{OutputFormat, save_spec_as};
use std::fs;
use std::path::PathBuf;

const USAGE: &str =
    "usage: scene_to_vega --input <scene.json> --output <path> [--format json|html] [--config <config.json>] [--log-filter <directive>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    format: OutputFormat,
    config: Option<PathBuf>,
    log_filter: Option<String>,
}

fn main() {
    if let Err(err) = parse_args().and_then(run) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), String> {
    let filter = chart_vega::telemetry::resolve_filter(args.log_filter.as_deref());
    let _ = chart_vega::telemetry::init_tracing_with_filter(&filter);

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ConverterConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ConverterConfig::default(),
    };
    let converter = Converter::new(config).map_err(|err| err.to_string())?;

    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let scene = SceneChart::from_json_compat_str(&raw).map_err(|err| err.to_string())?;

    let conversion = converter.convert(&scene).map_err(|err| err.to_string())?;
    let spec = converter
        .synthesize(&conversion)
        .map_err(|err| err.to_string())?;
    let written = save_spec_as(&spec, &args.output, args.format).map_err(|err| err.to_string())?;

    println!(
        "{} chart with {} rows written to {}",
        conversion.kind,
        conversion.table.row_count(),
        written.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut format = OutputFormat::Json;
    let mut config = None::<PathBuf>;
    let mut log_filter = None::<String>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--format" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --format".to_owned())?;
                format = value.parse().map_err(|err: chart_vega::ChartError| err.to_string())?;
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--log-filter" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --log-filter".to_owned())?;
                log_filter = Some(value);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
        format,
        config,
        log_filter,
    })
}

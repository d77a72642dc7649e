use log::{info, warn};
use sheet_detector::config::{load_config, RuntimeConfig};
use sheet_detector::image::io::{load_grayscale, save_grayscale, write_json_file};
use sheet_detector::output::{render_staves, render_symbols, write_detection_txt};
use sheet_detector::symbols::{load_template, Template};
use sheet_detector::{DetectError, SheetDetector, SymbolKind};
use std::env;
use std::path::Path;
use std::time::Instant;

const USAGE: &str = "usage: sheet_detector input_image [config.json]";

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }
    if let Err(err) = run(&args[0], args.get(1).map(String::as_str)) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(input: &str, config_path: Option<&str>) -> Result<(), DetectError> {
    let config = match config_path {
        Some(p) => load_config(Path::new(p))?,
        None => RuntimeConfig::default(),
    };

    let input = Path::new(input);
    let gray = load_grayscale(input)?;
    info!("loaded {} ({}x{})", input.display(), gray.cols, gray.rows);

    let base = input.parent().unwrap_or_else(|| Path::new(""));
    let mut templates: Vec<Template> = Vec::new();
    for spec in config.templates.resolved(base) {
        if !spec.path.exists() {
            warn!(
                "{} template {} not found, skipping",
                spec.kind,
                spec.path.display()
            );
            continue;
        }
        templates.push(load_template(&spec.path, spec.kind)?);
    }

    let detector = SheetDetector::new(config.params, templates);
    let report = detector.process(&gray)?;
    info!(
        "staves={} noteheads={} quarter_rests={} eighth_rests={}",
        report.staves.len(),
        report.count(SymbolKind::Notehead),
        report.count(SymbolKind::QuarterRest),
        report.count(SymbolKind::EighthRest)
    );

    let write_start = Instant::now();
    let out = &config.output;
    write_detection_txt(&out.detections_txt, &report.symbols)?;
    if let Some(path) = &out.detections_image {
        render_symbols(&gray, &report.symbols).save(path)?;
    }
    if let Some(path) = &out.staves_image {
        render_staves(&gray, &report.staves).save(path)?;
    }
    if let (Some(path), Some(edges)) = (&out.edges_image, &report.edges) {
        save_grayscale(edges, path)?;
    }
    if let Some(path) = &out.report_json {
        write_json_file(path, &report)?;
    }
    info!(
        "wrote outputs in {:.3} ms (detection {:.3} ms)",
        write_start.elapsed().as_secs_f64() * 1000.0,
        report.timing.total_ms
    );
    Ok(())
}

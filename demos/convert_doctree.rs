use std::env;
use std::fs;

use anyhow::{bail, Context};
use rst2slides::{outline::render_outline, parse_docutils_xml, ConvertConfig, ConverterBuilder};

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(xml_path) = args.first() else {
        bail!("usage: convert_doctree <doctree.xml> [out-prefix] [config.json]");
    };
    let prefix = args.get(1).map(String::as_str).unwrap_or("presentation");
    let config = match args.get(2) {
        Some(path) => ConvertConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => ConvertConfig::default(),
    };

    log::info!("Loading doctree from {}...", xml_path);
    let xml = fs::read_to_string(xml_path).with_context(|| format!("Unable to read {}", xml_path))?;
    let root = parse_docutils_xml(&xml)?;

    let converter = ConverterBuilder::new().set_config(config).build()?;
    let translation = converter.convert(&root)?;
    log::info!(
        "Converted {} slides ({} warnings).",
        translation.presentation.slides.len(),
        translation.warnings.len()
    );

    let json_path = format!("{}.json", prefix);
    let json = serde_json::to_string_pretty(&translation.presentation)?;
    fs::write(&json_path, json).with_context(|| format!("Unable to write {}", json_path))?;
    log::info!("Deck saved to {}", json_path);

    let md_path = format!("{}.md", prefix);
    fs::write(&md_path, render_outline(&translation.presentation))
        .with_context(|| format!("Unable to write {}", md_path))?;
    log::info!("Outline saved to {}", md_path);
    Ok(())
}

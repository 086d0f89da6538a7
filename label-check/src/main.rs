mod config;
mod logger;

use std::process::ExitCode;

use anyhow::{Context, bail};
use label_engine::{load_template, suggest_layout, validate_template};
use serde_json::json;

use config::Config;

const USAGE: &str = "usage: label-check <template.json> [--suggest]";

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env()?.with_args(&args);
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        bail!(USAGE);
    };

    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let template = load_template(&raw).with_context(|| format!("parsing {path}"))?;
    let label_size = config.label_size.unwrap_or(template.label_size);

    tracing::info!(template = %template.name, %label_size, "Validating template");
    let result = validate_template(&template.fields, label_size, &template.name);

    let mut report = json!({
        "template": template.name,
        "labelSize": label_size.key(),
        "result": result,
    });

    if config.suggest_layout {
        let fields = suggest_layout(&template.fields, label_size);
        let revalidated = validate_template(&fields, label_size, &template.name);
        report["suggestion"] = json!({
            "fields": fields,
            "result": revalidated,
        });
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

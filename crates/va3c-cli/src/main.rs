use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use va3c_core::model::Model;
use va3c_export::{ExportConfig, Exporter, UnknownSurfacePolicy};

#[derive(Debug, Parser)]
#[command(name = "va3c")]
#[command(about = "Export building model surfaces to a vA3C / three.js JSON scene.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnknownSurfaces {
    Reject,
    Omit,
}

impl From<UnknownSurfaces> for UnknownSurfacePolicy {
    fn from(value: UnknownSurfaces) -> Self {
        match value {
            UnknownSurfaces::Reject => UnknownSurfacePolicy::Reject,
            UnknownSurfaces::Omit => UnknownSurfacePolicy::Omit,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    Export {
        /// Model snapshot (JSON).
        input: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long, default_value = "OpenStudio")]
        generator: String,
        #[arg(long, default_value_t = 0.001)]
        tolerance: f64,
        #[arg(long, value_enum, default_value_t = UnknownSurfaces::Reject)]
        unknown_surfaces: UnknownSurfaces,
        #[arg(long)]
        parallel: bool,
        /// Store default rendering colors in the model (see --write-model).
        #[arg(long)]
        assign_default_colors: bool,
        #[arg(long, requires = "assign_default_colors")]
        write_model: Option<PathBuf>,
        /// Single-line JSON instead of pretty printed.
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Export {
            input,
            output,
            report,
            generator,
            tolerance,
            unknown_surfaces,
            parallel,
            assign_default_colors,
            write_model,
            compact,
        } => {
            let cfg = ExportConfig {
                generator,
                vertex_tolerance: tolerance,
                unknown_surfaces: unknown_surfaces.into(),
                parallel,
                assign_default_colors,
            };
            export(
                &input,
                output.as_deref(),
                report.as_deref(),
                write_model.as_deref(),
                cfg,
                compact,
            )
        }
    }
}

fn export(
    input: &Path,
    output: Option<&Path>,
    report: Option<&Path>,
    write_model: Option<&Path>,
    cfg: ExportConfig,
    compact: bool,
) -> Result<()> {
    let text =
        std::fs::read_to_string(input).with_context(|| format!("read model: {input:?}"))?;
    let mut model: Model =
        serde_json::from_str(&text).with_context(|| format!("parse model: {input:?}"))?;

    let exporter = Exporter::new(cfg);
    let export = exporter
        .export_mut(&mut model)
        .with_context(|| format!("export scene: {input:?}"))?;

    if let Some(extents) = &export.report.extents {
        tracing::info!("model extents diagonal {:.3}", extents.diag());
    }

    if let Some(path) = write_model {
        write_json(path, &to_json(&model, compact).context("serialize model")?)?;
    }

    if let Some(path) = report {
        let json = serde_json::to_string_pretty(&export.report).context("serialize report")?;
        write_json(path, &json)?;
    }

    let json = to_json(&export.scene, compact).context("serialize scene")?;
    match output {
        Some(path) => write_json(path, &json)?,
        None => println!("{json}"),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

fn write_json(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(path, json).with_context(|| format!("write: {path:?}"))
}

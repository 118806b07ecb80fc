use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use folio_codegen::{BuildStamp, RenderOptions};
use folio_export::{ExportError, Exporter};
use folio_model::{
    ApprovedTemplates, BuiltinCatalog, DirectoryStore, PortfolioDocument, PortfolioStore,
    StoreError, TemplateCatalog,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio — static portfolio site generator")]
#[command(version)]
struct Cli {
    /// Log debug details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site for a portfolio .json file and package it as a .zip
    Build {
        /// Input portfolio .json file
        path: PathBuf,

        /// Template name (see `folio templates`)
        #[arg(short, long, default_value = "minimal")]
        template: String,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Premium template with an approved purchase (repeatable)
        #[arg(long = "approved")]
        approved: Vec<String>,
    },

    /// Write a single self-contained preview page
    Preview {
        /// Input portfolio .json file
        path: PathBuf,

        /// Template name
        #[arg(short, long, default_value = "minimal")]
        template: String,

        /// Output file (defaults to `<name>.preview.html` next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a portfolio .json file without writing anything
    Check {
        /// Input portfolio .json file
        path: PathBuf,
    },

    /// List available templates
    Templates,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("expected a .json portfolio file: {}", .0.display())]
    NotJson(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Generation(#[from] folio_codegen::GenerationError),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Build {
            path,
            template,
            out,
            approved,
        } => cmd_build(&path, &template, out.as_deref(), &approved),
        Command::Preview {
            path,
            template,
            output,
        } => cmd_preview(&path, &template, output.as_deref()),
        Command::Check { path } => cmd_check(&path),
        Command::Templates => {
            cmd_templates();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Split `dir/name.json` into a directory store and the id `name`.
fn open_store(path: &Path) -> Result<(DirectoryStore, String), CliError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext == "json");
    let id = path.file_stem().and_then(|s| s.to_str());
    match (is_json, id) {
        (true, Some(id)) => {
            let dir = parent_dir(path);
            Ok((DirectoryStore::new(dir), id.to_string()))
        }
        _ => Err(CliError::NotJson(path.to_path_buf())),
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn load(path: &Path) -> Result<PortfolioDocument, CliError> {
    let (store, id) = open_store(path)?;
    debug!(root = %store.root().display(), id = %id, "loading portfolio");
    Ok(store.fetch(&id)?)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn cmd_build(
    path: &Path,
    template: &str,
    out: Option<&Path>,
    approved: &[String],
) -> Result<(), CliError> {
    let (store, id) = open_store(path)?;
    let gate = ApprovedTemplates::new(approved);
    let exporter = Exporter::new(&BuiltinCatalog, &gate);

    let bundle = exporter.export_stored(&store, &id, template, BuildStamp::today())?;

    let dir = out.map(Path::to_path_buf).unwrap_or_else(|| parent_dir(path));
    let zip_path = dir.join(&bundle.filename);
    write_file(&zip_path, &bundle.archive)?;

    info!(path = %zip_path.display(), bytes = bundle.archive.len(), "archive written");
    eprintln!("Built: {}", zip_path.display());
    Ok(())
}

fn cmd_preview(path: &Path, template: &str, output: Option<&Path>) -> Result<(), CliError> {
    let doc = load(path)?;
    let gate = ApprovedTemplates::default();
    let html = Exporter::new(&BuiltinCatalog, &gate).preview(&doc, template, BuildStamp::today())?;

    let html_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| preview_path(path));
    write_file(&html_path, html.as_bytes())?;

    eprintln!("Preview: {}", html_path.display());
    Ok(())
}

fn preview_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("portfolio");
    parent_dir(path).join(format!("{stem}.preview.html"))
}

fn cmd_check(path: &Path) -> Result<(), CliError> {
    let doc = load(path)?;

    // Run the generator too, so anything that would fail an export fails here.
    folio_codegen::generate(&doc, "minimal", &RenderOptions::linked())?;

    info!(
        skills = doc.skills.len(),
        projects = doc.projects.len(),
        education = doc.education.len(),
        "portfolio is valid"
    );
    eprintln!("OK: {}", path.display());
    Ok(())
}

fn cmd_templates() {
    for template in BuiltinCatalog.templates() {
        println!(
            "{:<14} {:<14} {:<7} {}",
            template.name,
            template.title,
            template.price_label(),
            template.description
        );
    }
}

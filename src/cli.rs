// src/cli.rs
use std::path::PathBuf;

use clap::{ Args, Parser, Subcommand };
use color_eyre::eyre::{ eyre, Result, WrapErr };

use crate::catalog::{ docs, schema, Catalog };
use crate::config::consts::SUMMARY_SAMPLE;
use crate::config::options::{ ExportFormat, ExportOptions };
use crate::config::sources::SourceConfig;
use crate::core::net::SourceFetcher;
use crate::log::{ self, LogLevel };
use crate::naming::segment;
use crate::progress::{ ConsoleProgress, NullProgress, Progress };

/// Build a catalog of Microsoft 365 resource types and their permissions.
#[derive(Parser, Debug)]
#[command(name = "m365_catalog", version, about, long_about = None)]
pub struct Cli {
    /// Write a debug log to .store/debug.log
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    /// No progress lines on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the documentation pages for resource names and permissions
    Docs(BuildArgs),

    /// Take resource names from a JSON schema's $defs
    Schema {
        /// Schema URL or local path (overrides the config's "schema")
        #[arg(long)]
        schema: Option<String>,

        /// Do not read the documentation pages (no camelCase names, no permissions)
        #[arg(long)]
        no_docs: bool,

        #[command(flatten)]
        build: BuildArgs,
    },

    /// Show how identifiers are named, to check dictionary or override edits
    Name {
        /// Identifiers, e.g. devicecompliancepolicy
        #[arg(required = true)]
        idents: Vec<String>,

        /// Source config with extra words and overrides
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Source config (JSON): pages, schema, overrides, extra words
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory, or a file path whose stem names the outputs
    #[arg(short, long)]
    out: Option<String>,

    #[arg(long, value_enum, default_value = "both")]
    format: ExportFormat,
}

impl BuildArgs {
    fn export_options(&self) -> ExportOptions {
        let mut export = ExportOptions::default();
        export.format = self.format;
        if let Some(out) = &self.out {
            export.set_path(out);
        }
        export
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = log::init(cli.log_level).wrap_err("could not open the debug log")?;

    let mut progress: Box<dyn Progress> = if cli.quiet {
        Box::new(NullProgress)
    } else {
        Box::new(ConsoleProgress::stderr())
    };

    match cli.command {
        Command::Docs(build) => {
            let cfg = load_config(build.config.as_deref())?;
            let fetcher = SourceFetcher::new()?;
            let catalog = docs::build(&fetcher, &cfg.pages, &cfg.resolver(), progress.as_mut());
            finish(&catalog, &build.export_options())
        }
        Command::Schema { schema: schema_src, no_docs, build } => {
            let cfg = load_config(build.config.as_deref())?;
            let src = schema_src
                .or_else(|| cfg.schema.clone())
                .ok_or_else(|| eyre!("no schema source: pass --schema or set \"schema\" in the config"))?;
            let pages = if no_docs { &[][..] } else { &cfg.pages[..] };

            let fetcher = SourceFetcher::new()?;
            let (catalog, report) = schema::build(&fetcher, &src, pages, cfg.resolver(), progress.as_mut())
                .wrap_err_with(|| format!("schema build from {src} failed"))?;
            for key in &report.skipped_keys {
                eprintln!("warning: skipped schema key {key:?}");
            }
            finish(&catalog, &build.export_options())
        }
        Command::Name { idents, config } => {
            let cfg = load_config(config.as_deref())?;
            let resolver = cfg.resolver();
            for ident in &idents {
                let (friendly, source) = resolver.resolve(ident);
                let words = segment(resolver.dictionary(), ident);
                println!("{ident}\n  {friendly} ({source})\n  [{}]", words.join("|"));
            }
            Ok(())
        }
    }
}

/* ---------- helpers ---------- */

fn load_config(path: Option<&std::path::Path>) -> Result<SourceConfig> {
    match path {
        Some(p) => Ok(SourceConfig::load(p)?),
        None => Ok(SourceConfig::default()),
    }
}

fn finish(catalog: &Catalog, export: &ExportOptions) -> Result<()> {
    let written = crate::file::write_export(export, catalog)?;
    print_summary(catalog);
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn print_summary(catalog: &Catalog) {
    let permissions = docs::distinct_permissions(catalog).len();
    println!(
        "{} resource(s), {} type(s), {} distinct permission(s)",
        catalog.total_resources,
        catalog.resource_types.len(),
        permissions
    );
    for (kind, count) in &catalog.summary {
        println!("  {kind:<24} {count:>5}");
    }
    if catalog.resources.is_empty() {
        return;
    }
    println!("Sample:");
    for r in catalog.resources.iter().take(SUMMARY_SAMPLE) {
        println!("  {:<56} {}", r.prefixed_name(), r.friendly_name);
    }
}

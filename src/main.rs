mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::{fs, path::PathBuf};

use inputkit::{settings, Document};

#[derive(Debug, Parser)]
#[clap(about = "Renders form input components to HTML")]
struct Args {
    #[clap(name = "document", parse(from_os_str))]
    /// RON file describing the component to render
    document: Option<PathBuf>,

    #[clap(long = "settings-path", parse(from_os_str))]
    /// Path to the settings file, which sets the class name prefix
    settings_path: Option<PathBuf>,

    #[clap(long = "create-settings")]
    /// Writes the default settings to `--settings-path`, if the file doesn't exist
    create_settings: bool,

    #[clap(short = 'v', long = "verbose")]
    /// Log what the components do to stderr
    verbose: bool,
}

fn run() -> Result<()> {
    let args = Args::parse();
    logging::configure_for_cli(args.verbose)?;

    if args.create_settings {
        let settings_path = args
            .settings_path
            .as_ref()
            .context("`--create-settings` requires `--settings-path`")?;
        if settings_path.exists() {
            log::warn!(
                "Default settings file won't be created; a file already exists `{}`",
                settings_path.display()
            );
        } else {
            settings::create_default_file(settings_path).with_context(|| {
                format!("Could not write settings to `{}`", settings_path.display())
            })?;
            log::info!("Created settings file `{}`", settings_path.display());
        }
    }

    // Missing or broken settings fall back to the default prefix
    let settings = args
        .settings_path
        .as_ref()
        .map_or_else(Default::default, settings::read_settings);

    let document_path = match args.document {
        Some(path) => path,
        None if args.create_settings => return Ok(()),
        None => anyhow::bail!("No document to render"),
    };
    let source = fs::read_to_string(&document_path)
        .with_context(|| format!("Could not read document `{}`", document_path.display()))?;
    let document = Document::parse(&source)
        .with_context(|| format!("Invalid document `{}`", document_path.display()))?;

    println!("{}", document.render(&settings));
    Ok(())
}

fn main() -> Result<()> {
    run().map_err(|error| {
        log::error!("inputkit exited with: {}", error);
        error
    })
}

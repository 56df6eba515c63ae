//! Developer tasks: options schema export and headless import inspection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use molimport::elements::ElementTable;
use molimport::importer::Importer;
use molimport::options::ImportOptions;
use molimport::sink::RecordingSink;

#[derive(Parser)]
#[command(name = "xtask", about = "molimport developer tasks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the JSON schema of the import options.
    Schema {
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import a PDB file into a recording sink and print a summary.
    Inspect {
        /// PDB file to import.
        pdb: PathBuf,
        /// TOML options preset.
        #[arg(long)]
        options: Option<PathBuf>,
        /// Custom element data file.
        #[arg(long)]
        elements: Option<PathBuf>,
        /// Also dump every recorded object.
        #[arg(long)]
        objects: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match Cli::parse().command {
        Command::Schema { out } => schema(out),
        Command::Inspect {
            pdb,
            options,
            elements,
            objects,
        } => inspect(&pdb, options, elements, objects),
    }
}

fn schema(out: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(&ImportOptions::json_schema())?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn inspect(
    pdb: &Path,
    options: Option<PathBuf>,
    elements: Option<PathBuf>,
    dump_objects: bool,
) -> Result<()> {
    let options = match options {
        Some(path) => ImportOptions::load(&path)
            .with_context(|| format!("loading options {}", path.display()))?,
        None => ImportOptions::default(),
    };
    let custom;
    let table = match elements {
        Some(path) => {
            custom = ElementTable::load_custom(&path).with_context(|| {
                format!("loading elements {}", path.display())
            })?;
            &custom
        }
        None => ElementTable::default_table(),
    };

    let importer = Importer::new(table, options)?;
    let mut sink = RecordingSink::new();
    let report = importer
        .import_path(pdb, &mut sink)
        .with_context(|| format!("importing {}", pdb.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    if dump_objects {
        println!("{}", serde_json::to_string_pretty(&sink)?);
    }
    Ok(())
}

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;
use foodtruck_catalog::{
    Cancellation, Catalog, CatalogConfig, FoodTruck, ImportReport, LocationId, Outcome,
};
use serde::Serialize;

use crate::cli::*;

/// How the process should exit after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    NotFound,
}

/// Read the configuration named on the command line, or the defaults.
pub fn load_config(cli: &Cli) -> anyhow::Result<CatalogConfig> {
    match &cli.config {
        Some(path) => CatalogConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(CatalogConfig::default()),
    }
}

pub fn run_command(cli: Cli, config: &CatalogConfig, out: &mut impl Write) -> anyhow::Result<Status> {
    let catalog = Catalog::in_memory();
    let cancel = Cancellation::none();

    let fail_fast = match &cli.command {
        Command::Import(args) => args.fail_fast || config.seed.fail_fast,
        _ => config.seed.fail_fast,
    };
    let seeds: Vec<PathBuf> = config.seed.files.iter().chain(&cli.seed).cloned().collect();
    let reports = load_seeds(&catalog, &seeds, fail_fast, &cancel)?;
    tracing::debug!(files = seeds.len(), records = catalog.count(), "catalog loaded");

    match cli.command {
        Command::Import(_) => cmd_import(&reports, &cli.format, out),
        Command::Get(args) => cmd_get(&catalog, args.location_id, &cancel, &cli.format, out),
        Command::Block(args) => cmd_block(&catalog, &args.block, &cancel, &cli.format, out),
        Command::Count => cmd_count(&catalog, &cli.format, out),
    }
}

fn load_seeds(
    catalog: &Catalog,
    seeds: &[PathBuf],
    fail_fast: bool,
    cancel: &Cancellation,
) -> anyhow::Result<Vec<(PathBuf, ImportReport)>> {
    seeds
        .iter()
        .map(|path| {
            let report = catalog
                .import_file(path, fail_fast, cancel)
                .with_context(|| format!("importing {}", path.display()))?;
            Ok((path.clone(), report))
        })
        .collect()
}

fn cmd_import(
    reports: &[(PathBuf, ImportReport)],
    format: &OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<Status> {
    if let OutputFormat::Json = format {
        #[derive(Serialize)]
        struct FileReport<'a> {
            file: String,
            #[serde(flatten)]
            report: &'a ImportReport,
        }
        let files: Vec<_> = reports
            .iter()
            .map(|(path, report)| FileReport {
                file: path.display().to_string(),
                report,
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&files)?)?;
        return Ok(Status::Success);
    }

    if reports.is_empty() {
        writeln!(out, "No seed files given.")?;
        return Ok(Status::Success);
    }

    let mut total = ImportReport::default();
    for (path, report) in reports {
        writeln!(
            out,
            "{} {}: {} created, {} rejected",
            "✓".green().bold(),
            path.display().to_string().bold(),
            report.created,
            report.rejected.len()
        )?;
        for rejected in &report.rejected {
            writeln!(
                out,
                "  {} entry {}: {}",
                "✗".red(),
                rejected.index,
                rejected.reason
            )?;
        }
        total.merge(report.clone());
    }
    if reports.len() > 1 {
        writeln!(
            out,
            "Total: {} created, {} rejected",
            total.created,
            total.rejected.len()
        )?;
    }
    Ok(Status::Success)
}

fn cmd_get(
    catalog: &Catalog,
    location_id: LocationId,
    cancel: &Cancellation,
    format: &OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<Status> {
    let outcome = Outcome::from_get(catalog.get(location_id, cancel));
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?,
        OutputFormat::Text => match &outcome {
            Outcome::Ok(truck) => write_truck(out, truck)?,
            Outcome::NotFound => writeln!(
                out,
                "No food truck at location {}",
                location_id.to_string().yellow()
            )?,
            Outcome::Failed(msg) => anyhow::bail!("{msg}"),
        },
    }
    Ok(status_of(&outcome))
}

fn cmd_block(
    catalog: &Catalog,
    block: &str,
    cancel: &Cancellation,
    format: &OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<Status> {
    let outcome = Outcome::from_block(catalog.get_by_block(block, cancel));
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?,
        OutputFormat::Text => match &outcome {
            Outcome::Ok(trucks) => {
                writeln!(out, "Block {} ({} trucks)", block.cyan().bold(), trucks.len())?;
                for truck in trucks {
                    write_truck(out, truck)?;
                }
            }
            Outcome::NotFound => writeln!(out, "No food trucks in block {}", block.cyan())?,
            Outcome::Failed(msg) => anyhow::bail!("{msg}"),
        },
    }
    Ok(status_of(&outcome))
}

fn cmd_count(catalog: &Catalog, format: &OutputFormat, out: &mut impl Write) -> anyhow::Result<Status> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "count": catalog.count() }))?,
        OutputFormat::Text => writeln!(out, "{} food trucks", catalog.count().to_string().bold())?,
    }
    Ok(Status::Success)
}

fn write_truck(out: &mut impl Write, truck: &FoodTruck) -> std::io::Result<()> {
    writeln!(
        out,
        "  {}  block {}  {}",
        format!("#{}", truck.location_id).yellow().bold(),
        truck.block.cyan(),
        truck.address
    )
}

fn status_of<T>(outcome: &Outcome<T>) -> Status {
    match outcome {
        Outcome::NotFound => Status::NotFound,
        _ => Status::Success,
    }
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cutplan::config::PlanConfig;
use cutplan::io::export::export_plan;
use cutplan::io::import::import_job;
use cutplan::io::svg::{cutlist_to_svg, sheet_to_svg};
use cutplan::plan::Planner;
use cutplan_cli::io;
use cutplan_cli::io::cli::Cli;
use cutplan_cli::io::output::PlanOutput;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlanConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    info!("[MAIN] Successfully parsed PlanConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_job = io::read_job(&args.input_file)?;
    let job = import_job(&ext_job);
    let bom = Planner::new(config.clone()).plan(&job)?;

    for (stock, count) in bom.lumber().map(|(s, c)| (s, c.n_boards())) {
        info!("[MAIN] {stock}: {count} board(s)");
    }
    for (stock, count) in bom.sheet_goods().map(|(s, l)| (s, l.n_sheets())) {
        info!("[MAIN] {stock}: {count} sheet(s)");
    }
    for (item, count) in bom.hardware() {
        info!("[MAIN] {item}: {count}");
    }

    {
        let plan = export_plan(&bom, &ext_job.labels);
        let output = PlanOutput {
            job: ext_job,
            plan,
            config: config.clone(),
        };
        let solution_path = args.solution_folder.join(format!("plan_{input_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let options = config.svg_draw_options;
        for (stock, cutlist) in bom.lumber() {
            let svg_path = args
                .solution_folder
                .join(format!("plan_{input_stem}_{stock}.svg"));
            io::write_svg(&cutlist_to_svg(cutlist, options), &svg_path)?;
        }
        for (stock, layout) in bom.sheet_goods() {
            for (i, sheet) in layout.sheets.iter().enumerate() {
                let svg_path = args
                    .solution_folder
                    .join(format!("plan_{input_stem}_{stock}_{i}.svg"));
                io::write_svg(&sheet_to_svg(sheet, options), &svg_path)?;
            }
        }
    }

    Ok(())
}

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use loadforge_core::error::{LfResult, LoadForgeError};
use loadforge_core::schedule::Schedule;
use std::fs;
use tracing::info;

/// Prints the per-processor load listing.
pub fn print_load_table(schedule: &Schedule) {
    let mut counts = vec![0usize; schedule.num_processors()];
    for job in 0..schedule.num_jobs() {
        counts[schedule.processor_of(job)] += 1;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Processor", "Jobs", "Load"]);

    for (processor, &load) in schedule.loads().iter().enumerate() {
        table.add_row(vec![
            Cell::new(processor).set_alignment(CellAlignment::Right),
            Cell::new(counts[processor]).set_alignment(CellAlignment::Right),
            Cell::new(load).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

/// Writes a JSON summary of the schedule when a path was requested.
pub fn write_summary(schedule: &Schedule, path: Option<&str>) -> LfResult<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let summary = schedule.summary();
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| LoadForgeError::Validation(e.to_string()))?;
    fs::write(path, json)?;
    info!("💾 Wrote schedule summary to {}", path);
    Ok(())
}

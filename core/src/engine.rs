//! The forge engine: generate, corrupt, export, report.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Row synthesis           (StageSlot::Synthesis)
//!   2. Dataset assembly        (no randomness)
//!   3. Corruption passes       (one StageSlot each, see pass.rs)
//!   4. Spreadsheet + delimited export
//!   5. Corruption log
//!   6. HTML report, then browser open
//!
//! RULES:
//!   - All randomness flows through the RngBank.
//!   - Corruption passes see only the table handed to them.
//!   - Export and report never modify the table.

use crate::{
    config::ForgeConfig,
    domain::DomainTables,
    error::ForgeResult,
    event::CorruptionEvent,
    export::{export_all, ExportPaths},
    pass::CorruptionPipeline,
    report::{open_in_browser, write_report},
    rng::{RngBank, StageSlot},
    synthesizer::RowSynthesizer,
    table::Table,
};
use std::path::PathBuf;

/// Result of one generation run, before anything touches disk.
#[derive(Debug, Clone)]
pub struct ForgeOutput {
    /// The assembled table before any corruption pass.
    pub clean: Table,
    /// The final, corrupted table.
    pub table: Table,
    /// One event per corruption pass, in pass order.
    pub events: Vec<CorruptionEvent>,
}

impl ForgeOutput {
    pub fn rows_before(&self) -> usize {
        self.clean.len()
    }

    pub fn rows_after(&self) -> usize {
        self.table.len()
    }
}

#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub exports: ExportPaths,
    pub corruption_log: PathBuf,
    pub report: Option<PathBuf>,
}

pub struct ForgeEngine {
    pub config: ForgeConfig,
    pub tables: DomainTables,
    pub rng_bank: RngBank,
    pipeline: CorruptionPipeline,
}

impl ForgeEngine {
    pub fn new(config: ForgeConfig, tables: DomainTables) -> Self {
        Self {
            rng_bank: RngBank::new(config.seed),
            pipeline: CorruptionPipeline::standard(&config.corruption),
            config,
            tables,
        }
    }

    /// Build a fully wired engine, loading domain tables from
    /// `config.domain_file` when one is set.
    pub fn build(config: ForgeConfig) -> ForgeResult<Self> {
        let tables = match &config.domain_file {
            Some(path) => DomainTables::load(path)?,
            None => DomainTables::builtin(),
        };
        Ok(Self::new(config, tables))
    }

    /// Built-in tables, no report, no browser.
    pub fn build_test(seed: u64, rows: usize) -> Self {
        Self::new(ForgeConfig::default_test(seed, rows), DomainTables::builtin())
    }

    pub fn pipeline(&self) -> &CorruptionPipeline {
        &self.pipeline
    }

    /// Synthesize and assemble the clean table.
    pub fn synthesize(&self) -> ForgeResult<Table> {
        let mut rng = self.rng_bank.for_stage(StageSlot::Synthesis);
        let records = RowSynthesizer::new(&self.tables).synthesize(self.config.rows, &mut rng)?;
        Ok(Table::from_records(records))
    }

    pub fn corrupt(&self, table: Table) -> ForgeResult<(Table, Vec<CorruptionEvent>)> {
        self.pipeline.run(table, &self.rng_bank)
    }

    pub fn generate(&self) -> ForgeResult<ForgeOutput> {
        log::info!(
            "forge: seed={} rows={}",
            self.rng_bank.master_seed(),
            self.config.rows
        );
        let clean = self.synthesize()?;
        let (table, events) = self.corrupt(clean.clone())?;
        Ok(ForgeOutput {
            clean,
            table,
            events,
        })
    }

    /// Write exports, the corruption log and (if enabled) the report.
    pub fn write_outputs(&self, output: &ForgeOutput) -> ForgeResult<RunArtifacts> {
        let exports = export_all(&output.table, &self.config)?;

        let corruption_log = self.config.corruption_log_path();
        std::fs::write(
            &corruption_log,
            serde_json::to_string_pretty(&output.events)?,
        )?;
        log::info!("forge: corruption log written to {}", corruption_log.display());

        let report = if self.config.write_report {
            let path = write_report(&output.table, &self.config.report_path(), &self.config.na_rep)?;
            if self.config.open_report {
                if let Err(e) = open_in_browser(&path) {
                    log::warn!("report: could not open {} in a browser: {e}", path.display());
                }
            }
            Some(path)
        } else {
            None
        };

        Ok(RunArtifacts {
            exports,
            corruption_log,
            report,
        })
    }

    /// Generate and write everything. Used by the CLI.
    pub fn run(&self) -> ForgeResult<(ForgeOutput, RunArtifacts)> {
        let output = self.generate()?;
        let artifacts = self.write_outputs(&output)?;
        Ok((output, artifacts))
    }
}

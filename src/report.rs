use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::analysis_types::StatsReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Writes `value` as pretty-printed JSON to `path`, or to stdout when no path is given.
pub fn write_json(path: Option<&Path>, value: &impl Serialize) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
            writer.flush()
        }
        None => {
            let mut writer = io::stdout().lock();
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)
        }
    }
}

pub fn write_report(path: Option<&Path>, report: &StatsReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(path, report),
        OutputFormat::Text => match path {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                write_text(&mut writer, report)?;
                writer.flush()
            }
            None => write_text(&mut io::stdout().lock(), report),
        },
    }
}

pub fn write_text(out: &mut impl Write, report: &StatsReport) -> io::Result<()> {
    writeln!(out, "=== MATCH STATISTICS ===\n")?;

    writeln!(out, "## Teams")?;
    if report.teams.is_empty() {
        writeln!(out, "No matches found.")?;
    }
    for (name, stat) in &report.teams {
        writeln!(
            out,
            "  {name}: P {} W {} D {} L {} GF {} GA {} GD {:+} CS {}",
            stat.played(),
            stat.wins,
            stat.draws,
            stat.losses,
            stat.goals_for,
            stat.goals_against,
            stat.goal_difference(),
            stat.clean_sheets
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Top Scorers")?;
    for (rank, entry) in report.rankings.top_scorers.iter().enumerate() {
        writeln!(out, "  {}. {} - {}", rank + 1, entry.name, entry.goals)?;
    }
    writeln!(out)?;

    writeln!(out, "## Top Assist Providers")?;
    for (rank, entry) in report.rankings.top_assist_providers.iter().enumerate() {
        writeln!(out, "  {}. {} - {}", rank + 1, entry.name, entry.assists)?;
    }
    writeln!(out)?;

    writeln!(out, "## Player of the Match")?;
    for (match_id, player) in &report.player_of_the_match {
        writeln!(out, "  Match {match_id}: {player}")?;
    }

    if !report.rejected.is_empty() {
        writeln!(out, "\n## Rejected Records")?;
        for rejected in &report.rejected {
            writeln!(out, "  {}", rejected.reason)?;
        }
    }
    Ok(())
}

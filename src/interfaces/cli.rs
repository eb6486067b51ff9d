// ============================================================
// CLI COMMANDS
// ============================================================
// Thin glue over the matrix loader, job board and daily log.
// All parsing/normalization decisions live in the layers below;
// this file only routes input and formats output.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::application::use_cases::{JobBoard, MatrixLoader};
use crate::domain::error::{AppError, Result};
use crate::domain::jobs::JobStatus;
use crate::domain::logbook::DailyLog;
use crate::domain::matrix::{MatrixLoadConfig, TrainingMatrix};

#[derive(Parser)]
#[command(name = "floortrack", about = "Shop-floor training matrix and job tracker")]
pub struct Cli {
    /// Path to the training sheet CSV export
    #[arg(short, long)]
    pub sheet: PathBuf,

    /// Use the legacy fixed sheet layout instead of header sniffing
    #[arg(long)]
    pub legacy_layout: bool,

    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every part number on the sheet
    Parts,
    /// List every operator found on the sheet
    Operators,
    /// Scan a part number and list operators trained on it
    Scan { part_number: String },
    /// Show the parts an operator is involved with
    Operator { name: String },
    /// Interactive supervisor session: scan, assign, track, log
    Session,
}

pub fn execute(cli: Cli) -> Result<()> {
    let config = if cli.legacy_layout {
        MatrixLoadConfig::legacy_sheet()
    } else {
        MatrixLoadConfig::default()
    };

    let matrix = MatrixLoader::new(config).load_file(&cli.sheet)?;

    match cli.command {
        Command::Parts => {
            if cli.json {
                print_json(&matrix.part_numbers())?;
            } else {
                for pn in matrix.part_numbers() {
                    let meta = matrix.part(&pn);
                    match meta {
                        Some(m) if !m.common_name.is_empty() => {
                            println!("{}  ({})", pn, m.common_name)
                        }
                        _ => println!("{}", pn),
                    }
                }
            }
        }
        Command::Operators => {
            if cli.json {
                print_json(&matrix.operator_names())?;
            } else {
                for name in matrix.operator_names() {
                    println!("{}", name);
                }
            }
        }
        Command::Scan { part_number } => {
            let trained = matrix.trained_operators_for_part(&part_number);
            if cli.json {
                print_json(&trained)?;
            } else if trained.is_empty() {
                println!("No trained operators found for part \"{}\".", part_number.trim());
            } else {
                println!(
                    "Found {} trained operator(s) for part \"{}\":",
                    trained.len(),
                    part_number.trim()
                );
                for record in &trained {
                    println!("  {} ({})", record.name, record.level);
                }
            }
        }
        Command::Operator { name } => {
            let parts = matrix.parts_for_operator(&name);
            if cli.json {
                print_json(&parts)?;
            } else if parts.is_empty() {
                println!("No recorded parts for operator \"{}\".", name.trim());
            } else {
                println!("{} is involved with {} part(s):", name.trim(), parts.len());
                for pn in &parts {
                    println!("  {}", pn);
                }
            }
        }
        Command::Session => run_session(&matrix)?,
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Validation(format!("JSON encoding failed: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// Interactive loop mirroring the supervisor workflow: scan a part,
/// assign a trained operator, move jobs through the workflow, and
/// keep the day's activity log.
fn run_session(matrix: &TrainingMatrix) -> Result<()> {
    let mut board = JobBoard::new();
    let mut log = DailyLog::new();
    let mut last_scanned: Option<String> = None;

    println!("Training sheet loaded. Commands:");
    println!("  scan <part>            list trained operators, remember the part");
    println!("  assign <job> <name>    assign the scanned part");
    println!("  status <job> <status> <initials>   Assigned|In-Progress|Completed|Cancelled");
    println!("  jobs                   show active and completed jobs");
    println!("  log [term]             show today's log, optionally filtered");
    println!("  quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();

        match words.next() {
            Some("scan") => {
                let part = words.collect::<Vec<_>>().join(" ");
                let trained = matrix.trained_operators_for_part(&part);
                if trained.is_empty() {
                    println!("No trained operators found for part \"{}\".", part.trim());
                } else {
                    for record in &trained {
                        println!("  {} ({})", record.name, record.level);
                    }
                }
                last_scanned = Some(part.trim().to_string()).filter(|p| !p.is_empty());
            }
            Some("assign") => {
                let Some(job_number) = words.next() else {
                    println!("Usage: assign <job> <operator name>");
                    continue;
                };
                let operator = words.collect::<Vec<_>>().join(" ");
                let part = last_scanned.clone().unwrap_or_default();

                match board.assign(job_number, &part, &operator) {
                    Ok(assignment) => {
                        let entry = format!(
                            "{} — Assigned job {} (part {}) to {}",
                            Local::now().format("%H:%M"),
                            assignment.job_number,
                            assignment.part_number,
                            assignment.operator
                        );
                        log.append(Local::now().date_naive(), entry);
                        println!(
                            "Assigned job {} (part {}) to {}.",
                            assignment.job_number, assignment.part_number, assignment.operator
                        );
                    }
                    Err(err) => println!("{}", err),
                }
            }
            Some("status") => {
                let (Some(job_number), Some(status_word), Some(initials)) =
                    (words.next(), words.next(), words.next())
                else {
                    println!("Usage: status <job> <status> <initials>");
                    continue;
                };
                let status = match status_word.parse::<JobStatus>() {
                    Ok(s) => s,
                    Err(msg) => {
                        println!("{}", msg);
                        continue;
                    }
                };

                let Some(id) = find_job(&board, job_number) else {
                    println!("No job numbered {}.", job_number);
                    continue;
                };
                match board.update(id, initials, None, Some(status)) {
                    Ok(Some(summary)) => {
                        let entry = format!(
                            "{} — [{}] updated job {}: {}",
                            Local::now().format("%H:%M"),
                            initials,
                            job_number,
                            summary
                        );
                        log.append(Local::now().date_naive(), entry);
                        println!("Updated: {}", summary);
                    }
                    Ok(None) => println!("No changes."),
                    Err(err) => println!("{}", err),
                }
            }
            Some("jobs") => {
                let active = board.active_page(1);
                println!("Active jobs ({} page(s)):", active.total_pages);
                for a in active.items {
                    println!(
                        "  {}  {}  {}  {}  {}",
                        a.job_number,
                        a.part_number,
                        a.operator,
                        a.status,
                        a.assigned_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
                    );
                }
                let completed = board.completed_page(1);
                println!("Completed jobs ({} page(s)):", completed.total_pages);
                for a in completed.items {
                    println!("  {}  {}  {}  {}", a.job_number, a.part_number, a.operator, a.status);
                }
            }
            Some("log") => {
                let term = words.collect::<Vec<_>>().join(" ");
                let today = Local::now().date_naive();
                let entries = log.search(today, &term);
                if entries.is_empty() {
                    println!("No log entries for this day.");
                }
                for entry in entries {
                    println!("  {}", entry);
                }
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("Unknown command: {}", other),
            None => {}
        }
    }

    Ok(())
}

fn find_job(board: &JobBoard, job_number: &str) -> Option<Uuid> {
    board
        .active()
        .into_iter()
        .chain(board.completed())
        .find(|a| a.job_number == job_number)
        .map(|a| a.id)
}

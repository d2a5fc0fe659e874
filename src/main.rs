use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use exam_room_scheduler::{build_scheduler, logger, report};

/// Assigns exams to rooms from delimited record files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Exam file: name,start,end triples with H:MM times.
    exam_file: Option<String>,

    /// Room file: name,opening,closing triples with H:MM times.
    room_file: Option<String>,
}

fn main() -> ExitCode {
    logger::init();

    let args = Args::parse();

    let exam_file = match resolve_path(args.exam_file, "Please enter the name of the exam file: ") {
        Ok(path) => path,
        Err(e) => {
            log::error!("Failed to read the exam file name: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let room_file = match resolve_path(args.room_file, "Please enter the name of the room file: ") {
        Ok(path) => path,
        Err(e) => {
            log::error!("Failed to read the room file name: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut scheduler = match build_scheduler(&exam_file, &room_file) {
        Ok(scheduler) => scheduler,
        Err(e) => {
            log::error!("Failed to load the scheduling problem: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if scheduler.solve() {
        println!("\nSchedule for exam file {} and room file {}:\n", exam_file, room_file);
        print!("{}", report::render_schedule(&scheduler));
    } else {
        println!(
            "No schedule is possible for exams in {} using room availability in {}",
            exam_file, room_file
        );
    }

    ExitCode::SUCCESS
}

/// Uses the path given on the command line, or prompts for one on stdin.
fn resolve_path(arg: Option<String>, prompt: &str) -> io::Result<String> {
    match arg {
        Some(path) => Ok(path),
        None => {
            print!("{}", prompt);
            io::stdout().flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line.trim().to_string())
        }
    }
}

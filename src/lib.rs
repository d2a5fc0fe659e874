use crate::domain::exam::Exam;
use crate::domain::room::Room;
use crate::domain::scheduler::Scheduler;
use crate::error::Result;
use crate::loader::parser::{load_exam_records, load_room_records};

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod report;

/// Loads both record files and builds a [`Scheduler`] over the validated
/// entities.
///
/// Malformed files, unparseable times and reversed intervals all fail here,
/// before any search runs.
pub fn build_scheduler(exam_path: &str, room_path: &str) -> Result<Scheduler> {
    let exams = load_exam_records(exam_path)?
        .into_iter()
        .map(Exam::from_record)
        .collect::<Result<Vec<_>>>()?;
    log::info!("Loaded {} exam(s) from '{}'.", exams.len(), exam_path);

    let rooms = load_room_records(room_path)?
        .into_iter()
        .map(Room::from_record)
        .collect::<Result<Vec<_>>>()?;
    log::info!("Loaded {} room(s) from '{}'.", rooms.len(), room_path);

    Ok(Scheduler::new(exams, rooms))
}

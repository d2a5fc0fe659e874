use std::fs::File;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;

use crate::api::record::{ExamRecord, RoomRecord};
use crate::error::{Error, Result};

/// Reads every exam record from a delimited exam file.
pub fn load_exam_records(path: &str) -> Result<Vec<ExamRecord>> {
    load_records(path)
}

/// Reads every room record from a delimited room file.
pub fn load_room_records(path: &str) -> Result<Vec<RoomRecord>> {
    load_records(path)
}

/// Parses a delimited record file into typed records.
///
/// Record files are flat comma-separated token streams, three tokens per
/// logical record. Line breaks carry no meaning: a line may hold several
/// records and a record may span lines, so all tokens are collected first
/// and then grouped in threes. A token count that is not a multiple of
/// three would silently misalign every following field, and is rejected as
/// `MalformedRecord` instead.
fn load_records<T: DeserializeOwned>(path: &str) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut tokens: Vec<String> = Vec::new();
    for row in reader.records() {
        let row = row?;
        tokens.extend(row.iter().map(str::to_string));
    }

    if tokens.len() % 3 != 0 {
        return Err(Error::MalformedRecord(format!(
            "'{}' holds {} token(s), which do not form whole (name, start, end) triples",
            path,
            tokens.len()
        )));
    }

    tokens
        .chunks(3)
        .map(|triple| {
            let record: StringRecord = triple.iter().collect();
            record.deserialize(None).map_err(Error::from)
        })
        .collect()
}

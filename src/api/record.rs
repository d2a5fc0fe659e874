use serde::Deserialize;

/// Raw exam record as it appears in an exam file, prior to validation.
///
/// One logical record is the token triple `name,start,end` with times in
/// `H:MM` form. Validation happens in `domain::exam::Exam::from_record`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExamRecord {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// Raw room record: the token triple `name,opening,closing`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomRecord {
    pub name: String,
    pub opening: String,
    pub closing: String,
}

use exam_room_scheduler::build_scheduler;
use exam_room_scheduler::error::Error;
use exam_room_scheduler::loader::parser::{load_exam_records, load_room_records};

fn fixture(name: &str) -> String {
    format!("{}/src/data/test/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn loads_exam_records_in_file_order() {
    let records = load_exam_records(&fixture("exam_times_1.csv")).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "CS101");
    assert_eq!(records[0].start, "9:00");
    assert_eq!(records[0].end, "10:00");
    assert_eq!(records[2].name, "PHYS150");
    assert_eq!(records[2].end, "11:30");
}

#[test]
fn loads_room_records_in_file_order() {
    let records = load_room_records(&fixture("room_avail_1.csv")).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "A");
    assert_eq!(records[0].opening, "8:00");
    assert_eq!(records[1].name, "B");
    assert_eq!(records[1].closing, "12:00");
}

#[test]
fn tokenization_ignores_line_structure() {
    // exam_times_flat.csv holds the same token stream as exam_times_1.csv,
    // but with records sharing and spanning physical lines.
    let per_line = load_exam_records(&fixture("exam_times_1.csv")).unwrap();
    let flat = load_exam_records(&fixture("exam_times_flat.csv")).unwrap();

    assert_eq!(flat.len(), per_line.len());
    for (a, b) in flat.iter().zip(per_line.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
    }
}

#[test]
fn rejects_dangling_tokens() {
    let result = load_exam_records(&fixture("exam_times_dangling.csv"));
    assert!(matches!(result, Err(Error::MalformedRecord(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = load_exam_records(&fixture("no_such_file.csv"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn out_of_range_time_fails_at_construction() {
    let result = build_scheduler(&fixture("exam_times_bad_time.csv"), &fixture("room_avail_1.csv"));
    assert!(matches!(result, Err(Error::InvalidTime(_))));
}

#[test]
fn reversed_room_interval_fails_at_construction() {
    let result = build_scheduler(&fixture("exam_times_1.csv"), &fixture("room_avail_reversed.csv"));
    assert!(matches!(result, Err(Error::InvalidInterval(_))));
}

use crate::domain::scheduler::Scheduler;

/// Renders a solved schedule as human-readable text.
///
/// One heading per room in input order, followed by an indented line for
/// each exam placed there. Rendering is a pure read of the scheduler's
/// state and performs no solving of its own; call it after `solve()` has
/// returned true.
pub fn render_schedule(scheduler: &Scheduler) -> String {
    let mut out = String::new();

    for (room_index, room) in scheduler.rooms().iter().enumerate() {
        let interval = room.interval();
        out.push_str(&format!("Room {}: {} - {} :\n", room.name(), interval.start(), interval.end()));

        for &exam_index in &scheduler.assignments()[room_index] {
            let exam = &scheduler.exams()[exam_index];
            let interval = exam.interval();
            out.push_str(&format!("\t{}: {} - {}\n", exam.name(), interval.start(), interval.end()));
        }
    }

    out
}

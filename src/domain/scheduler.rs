use crate::domain::exam::Exam;
use crate::domain::interval::TimeInterval;
use crate::domain::room::Room;

/// Assigns every exam to a room via depth-first backtracking search.
///
/// A room can host an exam iff its availability window fully contains the
/// exam's window and the exam does not overlap any exam already placed in
/// that room. Exams are processed in input order and rooms are tried in
/// input order; the first complete assignment found wins. No objective is
/// optimized and no ordering heuristics are applied, so the worst case is
/// exponential in the number of exams. The intended problem sizes are
/// small enough for that to be acceptable.
#[derive(Debug, Clone)]
pub struct Scheduler {
    exams: Vec<Exam>,
    rooms: Vec<Room>,

    /// Per room (input order), the exam indices placed there, in placement
    /// order. Placements are only ever appended and removed from the tail,
    /// since backtracking always undoes the most recent one first.
    schedule: Vec<Vec<usize>>,
}

impl Scheduler {
    pub fn new(exams: Vec<Exam>, rooms: Vec<Room>) -> Self {
        let schedule = vec![Vec::new(); rooms.len()];
        Self { exams, rooms, schedule }
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Exam indices assigned to each room, indexed like [`Self::rooms`].
    ///
    /// Reflects a complete assignment only after [`Self::solve`] has
    /// returned true; after a failed solve every list is empty again.
    pub fn assignments(&self) -> &[Vec<usize>] {
        &self.schedule
    }

    /// Runs the search. Returns false when no full assignment exists for
    /// the given rooms and exams. That is a normal negative result, not an
    /// error; every tentative placement made along the way has been undone.
    pub fn solve(&mut self) -> bool {
        log::debug!("Solving for {} exam(s) across {} room(s).", self.exams.len(), self.rooms.len());
        self.place_from(0)
    }

    /// Places the exam at `exam_index` and all later exams, recursively.
    fn place_from(&mut self, exam_index: usize) -> bool {
        if exam_index == self.exams.len() {
            return true;
        }

        let exam_interval = *self.exams[exam_index].interval();

        for room_index in 0..self.rooms.len() {
            if !self.rooms[room_index].interval().contains(&exam_interval) {
                continue;
            }
            if self.conflicts_in_room(room_index, &exam_interval) {
                continue;
            }

            self.schedule[room_index].push(exam_index);
            if self.place_from(exam_index + 1) {
                return true;
            }

            // Dead end further down: undo exactly this placement and move
            // on to the next room.
            self.schedule[room_index].pop();
            log::trace!("Backtracked exam {} out of room {}.", exam_index, room_index);
        }

        false
    }

    /// True iff `exam_interval` overlaps any exam already placed in the room.
    fn conflicts_in_room(&self, room_index: usize, exam_interval: &TimeInterval) -> bool {
        self.schedule[room_index]
            .iter()
            .any(|&placed| !exam_interval.disjoint(self.exams[placed].interval()))
    }
}

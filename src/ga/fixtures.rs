//! Shared test collaborators.
//!
//! A small in-memory [`SessionSet`]/[`RoomSet`] pair standing in for the
//! external scoring collaborator. The rating rewards constraint
//! satisfaction and peaks at exactly 1.0 on a violation-free grid, so
//! convergence tests can use the default target score.

use crate::models::{Rating, RoomSet, ScheduleGrid, SessionSet};

pub(crate) struct StubSessions {
    titles: Vec<&'static str>,
    priorities: Vec<u32>,
    theme_of: Vec<usize>,
    theme_names: Vec<&'static str>,
    /// `(first, second)`: `first` must not be in a later slot than `second`.
    ordered_pairs: Vec<(u32, u32)>,
}

impl StubSessions {
    /// Four sessions, two themes, one two-part ordering constraint
    /// (0 before 1), one standout priority (session 2).
    pub(crate) fn conference() -> Self {
        Self {
            titles: vec![
                "Sparse Solvers I",
                "Sparse Solvers II",
                "Opening Keynote",
                "GPU Kernels",
            ],
            priorities: vec![2, 2, 5, 1],
            theme_of: vec![0, 0, 1, 1],
            theme_names: vec!["Linear Algebra", "Architecture"],
            ordered_pairs: vec![(0, 1)],
        }
    }

    fn slot_of(&self, grid: &ScheduleGrid, id: u32) -> Option<usize> {
        grid.find_in_leading_slots(id, grid.slots()).map(|p| p.0)
    }
}

impl SessionSet for StubSessions {
    fn len(&self) -> usize {
        self.titles.len()
    }

    fn theme_count(&self) -> usize {
        self.theme_names.len()
    }

    fn rate(&self, grid: &ScheduleGrid) -> Rating {
        let real = self.len() as u32;

        let mut order_penalty = 0;
        for &(first, second) in &self.ordered_pairs {
            if let (Some(a), Some(b)) = (self.slot_of(grid, first), self.slot_of(grid, second)) {
                if a > b {
                    order_penalty += 1;
                }
            }
        }

        let mut priority_penalty = 0;
        let mut theme_penalty = 0;
        let mut per_theme = vec![0u32; self.theme_count()];
        for slot in 0..grid.slots() {
            let row = grid.slot_row(slot);
            for pair in row.windows(2) {
                let (left, right) = (pair[0], pair[1]);
                if right >= real {
                    continue;
                }
                if left >= real || self.higher_priority(right, left) {
                    priority_penalty += 1;
                }
            }
            for (i, &a) in row.iter().enumerate() {
                for &b in &row[i + 1..] {
                    if a < real && b < real && self.theme_of[a as usize] == self.theme_of[b as usize]
                    {
                        theme_penalty += 1;
                        per_theme[self.theme_of[a as usize]] += 1;
                    }
                }
            }
        }

        let total = order_penalty + priority_penalty + theme_penalty;
        Rating {
            score: 1.0 / (1.0 + f64::from(total)),
            order_penalty,
            oversubscribed_penalty: 0,
            theme_penalty,
            priority_penalty,
            per_theme,
        }
    }

    fn breaks_ordering(&self, earlier: u32, later: u32) -> bool {
        self.ordered_pairs.contains(&(later, earlier))
    }

    fn higher_priority(&self, a: u32, b: u32) -> bool {
        self.priorities[a as usize] > self.priorities[b as usize]
    }

    fn title(&self, id: u32) -> &str {
        self.titles[id as usize]
    }

    fn theme_name(&self, id: u32) -> &str {
        self.theme_names[self.theme_of[id as usize]]
    }

    fn priority(&self, id: u32) -> u32 {
        self.priorities[id as usize]
    }
}

pub(crate) struct StubRooms {
    names: Vec<&'static str>,
}

impl StubRooms {
    pub(crate) fn three() -> Self {
        Self {
            names: vec!["Auditorium", "Room 101", "Room 102"],
        }
    }
}

impl RoomSet for StubRooms {
    fn len(&self) -> usize {
        self.names.len()
    }

    fn name(&self, room: usize) -> &str {
        self.names[room]
    }
}

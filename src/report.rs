//! Markdown export of a schedule for an external display layer.
//!
//! One table per timeslot, one row per occupied room: title, theme,
//! priority, and room name. Empty sentinel cells are omitted. The export is
//! a side effect for human consumption; nothing in the engine reads it back.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::{RoomSet, ScheduleGrid, SessionSet};

/// Writes the schedule as a Markdown document.
pub fn write_markdown<W, S, R>(
    out: &mut W,
    grid: &ScheduleGrid,
    score: f64,
    sessions: &S,
    rooms: &R,
) -> io::Result<()>
where
    W: Write,
    S: SessionSet + ?Sized,
    R: RoomSet + ?Sized,
{
    let real = sessions.len() as u32;
    writeln!(out, "# Conference schedule with score {score}")?;
    writeln!(out)?;
    for slot in 0..grid.slots() {
        writeln!(out, "|Slot {slot}|   |   |   |")?;
        writeln!(out, "|---|---|---|---|")?;
        for room in 0..grid.rooms() {
            let id = grid.get(slot, room);
            if id >= real {
                continue;
            }
            writeln!(
                out,
                "|{}|{}|{}|{}|",
                sessions.title(id),
                sessions.theme_name(id),
                sessions.priority(id),
                rooms.name(room)
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the Markdown document to a file path.
pub fn save_markdown<S, R>(
    path: &Path,
    grid: &ScheduleGrid,
    score: f64,
    sessions: &S,
    rooms: &R,
) -> io::Result<()>
where
    S: SessionSet + ?Sized,
    R: RoomSet + ?Sized,
{
    let mut out = BufWriter::new(File::create(path)?);
    write_markdown(&mut out, grid, score, sessions, rooms)?;
    out.flush()
}

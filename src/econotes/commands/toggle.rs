use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteStore, StorageBackend};
use log::debug;

/// Flip the completion state of `task` on note `id`.
///
/// Unknown ids are a no-op. A task that is not attached to the note is
/// rejected with a warning and the note is left unchanged.
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    id: NoteId,
    task: &str,
) -> Result<CmdResult> {
    let Some(note) = store.get(id) else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No note with id {}", id))));
    };

    if !note.has_task(task) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Task \"{}\" is not attached to note {}",
            task, id
        ))));
    }

    let toggled = store.update(id, |note| {
        let completed = note.toggle_task(task);
        (note.clone(), completed)
    });

    let mut result = CmdResult::default();
    if let Some((note, Some(completed))) = toggled {
        debug!(
            "Task \"{}\" on note {} is now {}",
            task,
            id,
            if completed { "done" } else { "open" }
        );
        let verb = if completed { "completed" } else { "reopened" };
        result.add_message(CmdMessage::success(format!(
            "Task {}: {} ({} pts)",
            verb,
            task,
            note.points()
        )));
        result.affected_notes.push(note);
    }
    Ok(result)
}

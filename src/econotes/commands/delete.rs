use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteStore, StorageBackend};
use log::debug;

pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, id: NoteId) -> Result<CmdResult> {
    match store.remove(id) {
        Some(note) => {
            debug!("Deleted note {}", id);
            let message = CmdMessage::success(format!(
                "Note deleted ({}): {}",
                id,
                note.display_title()
            ));
            Ok(CmdResult::default()
                .with_affected_notes(vec![note])
                .with_message(message))
        }
        None => Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No note with id {}", id)))),
    }
}

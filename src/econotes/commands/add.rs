use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Category, Note};
use crate::store::{NoteStore, StorageBackend};
use log::debug;

/// Create a note and prepend it. Blank title plus blank content is a no-op.
///
/// New notes start at zero points: tasks attached here are selected but not
/// yet completed.
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    title: String,
    content: String,
    category: Category,
    eco_tasks: Vec<String>,
) -> Result<CmdResult> {
    if title.trim().is_empty() && content.trim().is_empty() {
        debug!("Ignoring note with empty title and content");
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "Nothing to save: title and content are both empty",
        )));
    }

    let id = store.next_id()?;
    let note = Note::new(id, title, content, category, eco_tasks);
    debug!("Adding note {} ({})", note.id, note.category);
    store.insert_front(note.clone())?;

    let message = CmdMessage::success(format!(
        "Note added ({}): {}",
        note.id,
        note.display_title()
    ));
    Ok(CmdResult::default()
        .with_affected_notes(vec![note])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::collections::HashSet;

    fn store() -> NoteStore<MemBackend> {
        NoteStore::open(MemBackend::new(), "test")
    }

    #[test]
    fn blank_note_is_ignored() {
        let mut store = store();
        let result = run(&mut store, "  ".into(), "\n".into(), Category::Work, vec![]).unwrap();
        assert!(result.affected_notes.is_empty());
        assert!(store.notes().is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn title_only_or_content_only_is_accepted() {
        let mut store = store();
        run(&mut store, "Title".into(), "".into(), Category::General, vec![]).unwrap();
        run(&mut store, "".into(), "Body".into(), Category::General, vec![]).unwrap();
        assert_eq!(store.notes().len(), 2);
    }

    #[test]
    fn newest_note_comes_first() {
        let mut store = store();
        run(&mut store, "A".into(), "".into(), Category::General, vec![]).unwrap();
        run(&mut store, "B".into(), "".into(), Category::General, vec![]).unwrap();
        assert_eq!(store.notes()[0].title, "B");
        assert_eq!(store.notes()[1].title, "A");
    }

    #[test]
    fn ids_are_pairwise_unique() {
        let mut store = store();
        for i in 0..100 {
            run(&mut store, format!("n{}", i), "".into(), Category::General, vec![]).unwrap();
        }
        let ids: HashSet<_> = store.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn attached_tasks_do_not_award_points() {
        let mut store = store();
        let result = run(
            &mut store,
            "Bike".into(),
            "I will bike to work".into(),
            Category::Eco,
            vec!["Walk or bike instead of driving".into()],
        )
        .unwrap();

        let note = &result.affected_notes[0];
        assert_eq!(note.points(), 0);
        assert!(note.completed_eco_tasks().is_empty());
        assert_eq!(note.eco_tasks(), ["Walk or bike instead of driving".to_string()]);
    }

    #[test]
    fn exhausted_id_space_is_an_error_not_a_panic() {
        let raw = format!(
            r#"[{{"id":{},"title":"a","content":"","category":"General","ecoTasks":[]}}]"#,
            i64::MAX
        );
        let mut store = NoteStore::open(MemBackend::new().with_slot("test", &raw), "test");

        let result = run(&mut store, "b".into(), "".into(), Category::General, vec![]);
        assert!(result.is_err());
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.backend().write_count(), 0);
    }
}

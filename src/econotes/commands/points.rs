use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};

/// Sum of points over every note, regardless of any view filter.
pub fn total(notes: &[Note]) -> u32 {
    notes.iter().map(Note::points).sum()
}

pub fn run<B: StorageBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    let points = total(store.notes());
    let completed: usize = store
        .notes()
        .iter()
        .map(|n| n.completed_eco_tasks().len())
        .sum();
    let attached: usize = store.notes().iter().map(|n| n.eco_tasks().len()).sum();

    Ok(CmdResult::default()
        .with_total_points(points)
        .with_message(CmdMessage::info(format!(
            "{} of {} eco-tasks completed",
            completed, attached
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, delete, toggle};
    use crate::model::Category;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn empty_store_has_no_points() {
        let store = NoteStore::open(MemBackend::new(), "test");
        assert_eq!(run(&store).unwrap().total_points, Some(0));
    }

    #[test]
    fn total_is_sum_and_delete_subtracts_exactly() {
        let mut store = NoteStore::open(MemBackend::new(), "test");
        add::run(
            &mut store,
            "One".into(),
            "".into(),
            Category::Eco,
            vec!["A".into(), "B".into()],
        )
        .unwrap();
        let one = store.notes()[0].id;
        add::run(
            &mut store,
            "Two".into(),
            "".into(),
            Category::Health,
            vec!["C".into()],
        )
        .unwrap();
        let two = store.notes()[0].id;

        toggle::run(&mut store, one, "A").unwrap();
        toggle::run(&mut store, one, "B").unwrap();
        toggle::run(&mut store, two, "C").unwrap();

        let one_points = store.get(one).unwrap().points();
        let two_points = store.get(two).unwrap().points();
        assert_eq!(total(store.notes()), one_points + two_points);
        assert_eq!(total(store.notes()), 30);

        delete::run(&mut store, one).unwrap();
        assert_eq!(total(store.notes()), 30 - one_points);
    }
}

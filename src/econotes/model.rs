use crate::error::EcoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points awarded for each completed eco-task.
pub const POINTS_PER_TASK: u32 = 10;

const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    General,
    Personal,
    Work,
    Eco,
    Health,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Personal,
        Category::Work,
        Category::Eco,
        Category::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Eco => "Eco",
            Category::Health => "Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EcoError::Api(format!("Unknown category: {}", s)))
    }
}

/// Category selection for the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for NoteId {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NoteId)
            .map_err(|_| EcoError::Api(format!("Invalid note id: {}", s)))
    }
}

/// A note with its attached eco-task checklist.
///
/// The task list, the completion set and the points are kept private so they
/// can only change through [`Note::toggle_task`], which keeps
/// `points == 10 * completed` and `completed ⊆ eco_tasks`.
///
/// Stored `points` are never read back: they are derived from the completion
/// set, so [`Note::normalize`] recomputes them after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: Category,
    eco_tasks: Vec<String>,
    #[serde(default)]
    completed_eco_tasks: Vec<String>,
    #[serde(default, skip_deserializing)]
    points: u32,
}

impl Note {
    pub fn new(
        id: NoteId,
        title: String,
        content: String,
        category: Category,
        eco_tasks: Vec<String>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            category,
            eco_tasks,
            completed_eco_tasks: Vec::new(),
            points: 0,
        }
    }

    pub fn eco_tasks(&self) -> &[String] {
        &self.eco_tasks
    }

    pub fn completed_eco_tasks(&self) -> &[String] {
        &self.completed_eco_tasks
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn has_task(&self, task: &str) -> bool {
        self.eco_tasks.iter().any(|t| t == task)
    }

    pub fn is_completed(&self, task: &str) -> bool {
        self.completed_eco_tasks.iter().any(|t| t == task)
    }

    /// Title for display, falling back to "Untitled".
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Flip the completion state of `task`.
    ///
    /// Returns `None` when the task is not attached to this note, otherwise the
    /// new completion state.
    pub fn toggle_task(&mut self, task: &str) -> Option<bool> {
        if !self.has_task(task) {
            return None;
        }

        let completed = if let Some(pos) = self.completed_eco_tasks.iter().position(|t| t == task)
        {
            self.completed_eco_tasks.remove(pos);
            false
        } else {
            self.completed_eco_tasks.push(task.to_string());
            true
        };
        self.recompute_points();
        Some(completed)
    }

    /// Restore invariants on a record read from storage.
    ///
    /// Drops completed entries that are not attached tasks (and duplicates),
    /// then recomputes points. Returns true if any completion was dropped.
    pub fn normalize(&mut self) -> bool {
        let before = self.completed_eco_tasks.len();

        let mut kept: Vec<String> = Vec::with_capacity(self.completed_eco_tasks.len());
        for task in self.completed_eco_tasks.drain(..) {
            if self.eco_tasks.contains(&task) && !kept.contains(&task) {
                kept.push(task);
            }
        }
        self.completed_eco_tasks = kept;
        self.recompute_points();

        before != self.completed_eco_tasks.len()
    }

    fn recompute_points(&mut self) {
        self.points = POINTS_PER_TASK * self.completed_eco_tasks.len() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bike_note() -> Note {
        Note::new(
            NoteId(1),
            "Bike".into(),
            "I will bike to work".into(),
            Category::Eco,
            vec!["Walk or bike instead of driving".into()],
        )
    }

    #[test]
    fn new_note_starts_without_points() {
        let note = bike_note();
        assert_eq!(note.points(), 0);
        assert!(note.completed_eco_tasks().is_empty());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut note = bike_note();
        assert_eq!(note.toggle_task("Walk or bike instead of driving"), Some(true));
        assert_eq!(note.points(), 10);
        assert_eq!(note.toggle_task("Walk or bike instead of driving"), Some(false));
        assert_eq!(note.points(), 0);
        assert!(note.completed_eco_tasks().is_empty());
    }

    #[test]
    fn toggle_rejects_unattached_task() {
        let mut note = bike_note();
        assert_eq!(note.toggle_task("Compost food scraps"), None);
        assert_eq!(note.points(), 0);
        assert!(note.completed_eco_tasks().is_empty());
    }

    #[test]
    fn normalize_clips_foreign_completions() {
        let json = r#"{
            "id": 5,
            "title": "t",
            "content": "",
            "category": "Eco",
            "ecoTasks": ["A", "B"],
            "completedEcoTasks": ["A", "Z", "A"],
            "points": 70
        }"#;
        let mut note: Note = serde_json::from_str(json).unwrap();
        assert!(note.normalize());
        assert_eq!(note.completed_eco_tasks(), ["A".to_string()]);
        assert_eq!(note.points(), 10);
        assert!(!note.normalize());
    }

    #[test]
    fn stored_points_are_ignored_on_read() {
        for points in ["10.0", "-5", "\"lots\"", "99"] {
            let json = format!(
                r#"{{"id":2,"title":"t","content":"","category":"Eco","ecoTasks":["A"],"completedEcoTasks":["A"],"points":{}}}"#,
                points
            );
            let mut note: Note = serde_json::from_str(&json).unwrap();
            note.normalize();
            assert_eq!(note.points(), 10, "stored points {}", points);
        }
    }

    #[test]
    fn missing_points_defaults_to_zero() {
        let json = r#"{"id":1,"title":"","content":"x","category":"Work","ecoTasks":[]}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.points(), 0);
        assert_eq!(note.display_title(), "Untitled");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(bike_note()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "Eco");
        assert!(json.get("ecoTasks").is_some());
        assert!(json.get("completedEcoTasks").is_some());
        assert_eq!(json["points"], 0);
    }

    #[test]
    fn category_parsing_is_case_insensitive() {
        assert_eq!("eco".parse::<Category>().unwrap(), Category::Eco);
        assert_eq!("HEALTH".parse::<Category>().unwrap(), Category::Health);
        assert!("garden".parse::<Category>().is_err());
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "work".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Work)
        );
    }

    #[test]
    fn filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Health));
        assert!(CategoryFilter::Only(Category::Eco).matches(Category::Eco));
        assert!(!CategoryFilter::Only(Category::Eco).matches(Category::Work));
    }
}

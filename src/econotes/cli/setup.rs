use clap::{Parser, Subcommand};
use econotes::model::{Category, CategoryFilter, NoteId};

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "econotes", bin_name = "econotes", version = get_version())]
#[command(about = "Notes with an eco-task checklist", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    #[command(alias = "n")]
    Add {
        /// Title of the note
        #[arg(short = 'T', long, default_value = "")]
        title: String,

        /// Content of the note
        #[arg(short, long, default_value = "")]
        content: String,

        /// Category (General, Personal, Work, Eco, Health)
        #[arg(short = 'C', long, default_value = "General")]
        category: Category,

        /// Eco-task to attach (repeatable)
        #[arg(short = 't', long = "task")]
        tasks: Vec<String>,

        /// Ask for suggested eco-tasks based on the content and attach them
        #[arg(short, long)]
        suggest: bool,
    },

    /// List notes matching a search and category
    #[command(alias = "ls")]
    List {
        /// Search term (matches title or content)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category filter (All, General, Personal, Work, Eco, Health)
        #[arg(short = 'C', long, default_value = "All")]
        category: CategoryFilter,

        /// Print notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Id of the note
        id: NoteId,
    },

    /// Mark an attached eco-task as done, or as not done again
    #[command(alias = "t")]
    Toggle {
        /// Id of the note
        id: NoteId,

        /// The task text, exactly as attached
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
    },

    /// Show total points
    Points,

    /// Suggest eco-tasks for a piece of text
    Suggest {
        /// Text to analyze
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Show the eco-task catalog
    Tasks,

    /// Print the path of the notes file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., suggestion-delay-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_tasks() {
        let cli = Cli::try_parse_from([
            "econotes",
            "add",
            "-T",
            "Bike",
            "--category",
            "eco",
            "-t",
            "Walk or bike instead of driving",
            "-t",
            "Compost food scraps",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add {
                title,
                category,
                tasks,
                suggest,
                ..
            }) => {
                assert_eq!(title, "Bike");
                assert_eq!(category, Category::Eco);
                assert_eq!(tasks.len(), 2);
                assert!(!suggest);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_defaults_to_all() {
        let cli = Cli::try_parse_from(["econotes", "ls"]).unwrap();
        match cli.command {
            Some(Commands::List {
                search, category, ..
            }) => {
                assert!(search.is_empty());
                assert_eq!(category, CategoryFilter::All);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Cli::try_parse_from(["econotes", "add", "-C", "garden"]).is_err());
    }

    #[test]
    fn toggle_joins_task_words() {
        let cli =
            Cli::try_parse_from(["econotes", "toggle", "17", "Compost", "food", "scraps"]).unwrap();
        match cli.command {
            Some(Commands::Toggle { id, task }) => {
                assert_eq!(id, NoteId(17));
                assert_eq!(task.join(" "), "Compost food scraps");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

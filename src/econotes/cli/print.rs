use colored::Colorize;
use econotes::api::{CmdMessage, MessageLevel};
use econotes::model::Note;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const CONTENT_INDENT: &str = "    ";
const DONE_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let header = format!(
            "{} {} {}",
            note.id.to_string().yellow(),
            format!("[{}]", note.category).cyan(),
            note.display_title().bold()
        );
        let points = format!("{} pts", note.points());
        println!("{}  {}", header, points.green());

        if !note.content.is_empty() {
            let first_line = note.content.lines().next().unwrap_or_default();
            let available = LINE_WIDTH.saturating_sub(CONTENT_INDENT.width());
            println!(
                "{}{}",
                CONTENT_INDENT,
                truncate_to_width(first_line, available).dimmed()
            );
        }

        for task in note.eco_tasks() {
            if note.is_completed(task) {
                println!("{}{} {}", CONTENT_INDENT, DONE_MARKER.green(), task);
            } else {
                println!("{}{} {}", CONTENT_INDENT, OPEN_MARKER, task);
            }
        }
    }
}

pub(super) fn print_total(total: u32) {
    println!("{}", format!("Total: {} pts", total).bold());
}

pub(super) fn print_tasks<S: AsRef<str>>(tasks: &[S]) {
    for task in tasks {
        println!("- {}", task.as_ref());
    }
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    let budget = max_width.saturating_sub(1);
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

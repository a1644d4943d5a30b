//! Command-line front-end for the Studynotes store.
//!
//! One subcommand per user flow: `list` renders the note table, `add` and
//! `edit` are the create/edit forms (input is trimmed and presence-checked
//! here, not in the store), `delete` asks for confirmation unless `--yes`,
//! and `seed` fills an empty store with two demonstration notes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use studynotes_core::{Note, NoteStore};

#[derive(Parser)]
#[command(name = "studynotes", about = "Manage short course notes", version)]
struct Cli {
    /// Path of the note store file
    #[arg(long, global = true, default_value = "studynotes.db")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all notes, newest first
    List,
    /// Create a new note
    Add {
        title: String,
        course: String,
        content: String,
    },
    /// Show a single note in full
    Show { id: String },
    /// Edit a note; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note permanently
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Insert two demonstration notes into an empty store
    Seed,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    log::debug!("opening store at {}", cli.store.display());
    let mut store =
        NoteStore::open(&cli.store).map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let outcome = match cli.command {
        Command::List => list(&store),
        Command::Add {
            title,
            course,
            content,
        } => add(&mut store, &title, &course, &content)?,
        Command::Show { id } => show(&store, &id),
        Command::Edit {
            id,
            title,
            course,
            content,
        } => edit(&mut store, &id, title, course, content)?,
        Command::Delete { id, yes } => delete(&mut store, &id, yes)?,
        Command::Seed => seed(&mut store)?,
    };

    Ok(outcome)
}

fn list(store: &NoteStore) -> ExitCode {
    if store.is_empty() {
        println!("No notes yet. Use `studynotes add` to create one.");
        return ExitCode::SUCCESS;
    }

    println!(
        "{:<36}  {:<27}  {:<10}  {:<10}  CONTENT",
        "ID", "TITLE", "COURSE", "CREATED"
    );
    for note in store.get_all() {
        println!(
            "{:<36}  {:<27}  {:<10}  {:<10}  {}",
            note.id,
            preview(&note.title, 24),
            preview(&note.course, 10),
            note.created_at.with_timezone(&chrono::Local).format("%Y-%m-%d"),
            preview(&note.content, 50),
        );
    }
    ExitCode::SUCCESS
}

fn add(store: &mut NoteStore, title: &str, course: &str, content: &str) -> Result<ExitCode> {
    let (title, course, content) = (title.trim(), course.trim(), content.trim());
    if title.is_empty() || course.is_empty() || content.is_empty() {
        eprintln!("Please fill in all fields.");
        return Ok(ExitCode::FAILURE);
    }

    let note = store.create(title.to_string(), course.to_string(), content.to_string())?;
    println!("Created note {}", note.id);
    Ok(ExitCode::SUCCESS)
}

fn show(store: &NoteStore, id: &str) -> ExitCode {
    let note = match store.get_by_id(id) {
        Some(note) => note,
        None => {
            eprintln!("Note not found.");
            return ExitCode::FAILURE;
        }
    };

    println!("Title:   {}", note.title);
    println!("Course:  {}", note.course);
    println!("Created: {}", local_time(note, false));
    if note.updated_at.is_some() {
        println!("Updated: {}", local_time(note, true));
    }
    println!();
    println!("{}", note.content);
    ExitCode::SUCCESS
}

fn edit(
    store: &mut NoteStore,
    id: &str,
    title: Option<String>,
    course: Option<String>,
    content: Option<String>,
) -> Result<ExitCode> {
    // Pre-populate from the existing note, then overlay the provided flags.
    let current = match store.get_by_id(id) {
        Some(note) => note.clone(),
        None => {
            eprintln!("Note not found.");
            return Ok(ExitCode::FAILURE);
        }
    };

    let title = title.unwrap_or(current.title);
    let course = course.unwrap_or(current.course);
    let content = content.unwrap_or(current.content);
    let (title, course, content) = (title.trim(), course.trim(), content.trim());
    if title.is_empty() || course.is_empty() || content.is_empty() {
        eprintln!("Please fill in all fields.");
        return Ok(ExitCode::FAILURE);
    }

    let updated = store.update(id, title.to_string(), course.to_string(), content.to_string())?;
    if updated {
        println!("Note updated.");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Error updating note.");
        Ok(ExitCode::FAILURE)
    }
}

fn delete(store: &mut NoteStore, id: &str, yes: bool) -> Result<ExitCode> {
    let title = match store.get_by_id(id) {
        Some(note) => note.title.clone(),
        None => {
            eprintln!("Note not found.");
            return Ok(ExitCode::FAILURE);
        }
    };

    if !yes && !confirm(&format!(
        "Delete note '{title}'? This action cannot be undone."
    ))? {
        println!("Cancelled.");
        return Ok(ExitCode::SUCCESS);
    }

    if store.delete(id)? {
        println!("Note deleted.");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Error deleting note.");
        Ok(ExitCode::FAILURE)
    }
}

fn seed(store: &mut NoteStore) -> Result<ExitCode> {
    if !store.is_empty() {
        println!("Store already has notes; nothing seeded.");
        return Ok(ExitCode::SUCCESS);
    }

    store.create(
        "HTML5 Semantic Elements".to_string(),
        "INFR3120".to_string(),
        "Semantic elements clearly describe their meaning to both the browser \
         and developer. Examples: <header>, <footer>, <article>, <section>."
            .to_string(),
    )?;
    store.create(
        "CSS Flexbox Layout".to_string(),
        "INFR3120".to_string(),
        "Flexbox is a one-dimensional layout method for arranging items in rows \
         or columns. Items flex to fill additional space or shrink to fit into \
         smaller spaces."
            .to_string(),
    )?;

    println!("Seeded 2 demonstration notes.");
    Ok(ExitCode::SUCCESS)
}

/// Asks a yes/no question on stdout and reads the answer from stdin.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}

fn local_time(note: &Note, updated: bool) -> String {
    let timestamp = if updated {
        note.updated_at.unwrap_or(note.created_at)
    } else {
        note.created_at
    };
    timestamp
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Truncates `text` to `max_chars` characters for table display, flattening
/// line breaks and marking the cut with `...`.
fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("Flexbox", 50), "Flexbox");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "x".repeat(60);
        let p = preview(&long, 50);
        assert_eq!(p.chars().count(), 53);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("a\nb\r\nc", 50), "a b  c");
    }
}

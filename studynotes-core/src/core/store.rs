//! The note repository: an in-memory note list mirrored to key-value storage.

use crate::{Note, Result, Storage};
use chrono::Utc;
use std::path::Path;

/// Storage key under which the full note list is persisted as a JSON array.
const NOTES_KEY: &str = "studynotes";

/// The authoritative collection of notes, newest-first.
///
/// `NoteStore` hydrates the list from its backing file once at [`open`] and
/// writes the whole list back after every mutating call, so the in-memory
/// state and the file never drift apart. There is exactly one steady state:
/// hydrated and in sync.
///
/// Unknown ids are absence, not errors: [`get_by_id`] returns `None` and
/// [`update`]/[`delete`] return `Ok(false)`. The `Err` path is reserved for
/// environment failures (storage, serialization).
///
/// The store performs no field validation; callers are expected to trim and
/// presence-check input first. Empty strings are stored as given.
///
/// [`open`]: NoteStore::open
/// [`get_by_id`]: NoteStore::get_by_id
/// [`update`]: NoteStore::update
/// [`delete`]: NoteStore::delete
pub struct NoteStore {
    storage: Storage,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Opens the note store backed by the file at `path`, creating the file
    /// if it does not exist yet. Hydrates the note list from the backing
    /// file; an absent key means an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StudynotesError::Database`] for any SQLite failure,
    /// [`crate::StudynotesError::InvalidStore`] if `path` exists but is not
    /// a Studynotes store, or [`crate::StudynotesError::Json`] if the stored
    /// note list is corrupt.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let storage = if path.as_ref().exists() {
            Storage::open(&path)?
        } else {
            Storage::create(&path)?
        };

        let notes: Vec<Note> = match storage.get(NOTES_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        log::debug!(
            "hydrated {} notes from {}",
            notes.len(),
            path.as_ref().display()
        );

        Ok(Self { storage, notes })
    }

    /// Writes the full note list back to the backing file.
    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string(&self.notes)?;
        self.storage.put(NOTES_KEY, &json)
    }

    /// Creates a new note and inserts it at the front of the list.
    ///
    /// Returns a clone of the stored record, id and creation time filled in.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated list fails.
    pub fn create(&mut self, title: String, course: String, content: String) -> Result<Note> {
        let note = Note::new(title, course, content);
        self.notes.insert(0, note.clone());
        self.flush()?;
        log::debug!("created note {}", note.id);
        Ok(note)
    }

    /// Returns all notes, newest-first.
    pub fn get_all(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a single note by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Replaces the editable fields of the note with `id` and stamps
    /// `updated_at`. `id` and `created_at` are left untouched.
    ///
    /// Returns `Ok(false)` when no note has that id; the collection is then
    /// unchanged and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated list fails.
    pub fn update(
        &mut self,
        id: &str,
        title: String,
        course: String,
        content: String,
    ) -> Result<bool> {
        let note = match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => note,
            None => return Ok(false),
        };

        note.title = title;
        note.course = course;
        note.content = content;
        note.updated_at = Some(Utc::now());
        self.flush()?;
        log::debug!("updated note {id}");
        Ok(true)
    }

    /// Removes the note with `id` permanently.
    ///
    /// Returns whether a note was actually removed; `Ok(false)` leaves the
    /// collection unchanged and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated list fails.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let index = match self.notes.iter().position(|note| note.id == id) {
            Some(index) => index,
            None => return Ok(false),
        };

        self.notes.remove(index);
        self.flush()?;
        log::debug!("deleted note {id}");
        Ok(true)
    }

    /// Returns the number of notes in the store.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` when the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

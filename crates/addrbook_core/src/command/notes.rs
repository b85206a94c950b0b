//! Notes book commands.
//!
//! The notes book persists itself after each mutation, so these commands
//! report storage failures directly instead of leaving them to the caller.

use crate::command::{
    at_least_args, exact_args, Collection, Command, CommandError, CommandResult, Description,
    Message, NoteView, Notice, Report, Target,
};
use crate::model::note::{NoteBody, NotesBook};

/// `add-note <title> <words...>`
pub struct AddNote<'a> {
    book: &'a mut NotesBook,
}

impl AddNote<'_> {
    pub const NAME: &'static str = "add-note";
    pub const USAGE: &'static str = "add-note <title> <text with #tags...>";
    pub const DESCRIPTION: Description = Description {
        en: "Adds a new note; #words become tags.",
        uk: "Додає нову нотатку; #слова стають тегами.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_notes(Self::NAME)?;
        Ok(Box::new(AddNote { book }))
    }
}

impl Command for AddNote<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = at_least_args(args, 2, Self::NAME, Self::USAGE)?;
        let title = args[0].as_str();
        let note = self.book.add_note(title, NoteBody::from_words(&args[1..]))?;
        Ok(Report::info(Message::NoteAdded {
            id: note.id.to_string(),
            title: note.title.clone(),
        }))
    }
}

/// `edit-note <id> <title> <words...>`
pub struct EditNote<'a> {
    book: &'a mut NotesBook,
}

impl EditNote<'_> {
    pub const NAME: &'static str = "edit-note";
    pub const USAGE: &'static str = "edit-note <id> <title> <text with #tags...>";
    pub const DESCRIPTION: Description = Description {
        en: "Replaces the title and text of an existing note.",
        uk: "Замінює заголовок і текст наявної нотатки.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_notes(Self::NAME)?;
        Ok(Box::new(EditNote { book }))
    }
}

impl Command for EditNote<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = at_least_args(args, 3, Self::NAME, Self::USAGE)?;
        let (id, title) = (args[0].as_str(), args[1].as_str());
        let note = self
            .book
            .edit_note(id, title, NoteBody::from_words(&args[2..]))?;
        Ok(Report::info(Message::NoteUpdated {
            title: note.title.clone(),
            text: note.text.clone(),
        }))
    }
}

/// `delete-note <id>`
pub struct DeleteNote<'a> {
    book: &'a mut NotesBook,
}

impl DeleteNote<'_> {
    pub const NAME: &'static str = "delete-note";
    pub const USAGE: &'static str = "delete-note <id>";
    pub const DESCRIPTION: Description = Description {
        en: "Deletes an existing note.",
        uk: "Видаляє наявну нотатку.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_notes(Self::NAME)?;
        Ok(Box::new(DeleteNote { book }))
    }
}

impl Command for DeleteNote<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = exact_args(args, 1, Self::NAME, Self::USAGE)?;
        let removed = self.book.delete_note(args[0].as_str())?;
        Ok(Report::info(Message::NoteDeleted {
            title: removed.title,
        }))
    }
}

/// `display-notes`: an empty notes book is an error outcome, like `all`.
pub struct DisplayNotes<'a> {
    book: &'a NotesBook,
}

impl DisplayNotes<'_> {
    pub const NAME: &'static str = "display-notes";
    pub const USAGE: &'static str = "display-notes";
    pub const DESCRIPTION: Description = Description {
        en: "Displays all notes.",
        uk: "Виводить всі нотатки.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_notes(Self::NAME)?;
        Ok(Box::new(DisplayNotes { book }))
    }
}

impl Command for DisplayNotes<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        exact_args(args, 0, Self::NAME, Self::USAGE)?;
        if self.book.is_empty() {
            return Err(CommandError::Empty(Collection::Notes));
        }
        let mut report = Report::new();
        for note in self.book.notes() {
            report.push(Notice::info(Message::Note(NoteView::from(note))));
        }
        Ok(report)
    }
}

//! Terminal front end.
//!
//! Two columns mirror the two pools. The focused column has a cursor;
//! Enter or Space "clicks" the creature under it.
//!
//! | Key                 | Action                  |
//! |---------------------|-------------------------|
//! | Tab, ←/→, h/l       | Switch column           |
//! | ↑/↓, k/j            | Move cursor             |
//! | Enter, Space        | Catch / release         |
//! | q, Esc              | Quit                    |

pub mod panels;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::creatures::{CreatureId, CreatureRecord};
use crate::session::{Command, Snapshot};

/// Column with keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Wild,
    Caught,
}

impl Column {
    fn toggle(self) -> Self {
        match self {
            Column::Wild => Column::Caught,
            Column::Caught => Column::Wild,
        }
    }
}

/// Cursor position in one column.
///
/// Remembers the creature under the cursor so it stays put when the list
/// grows around it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cursor {
    index: usize,
    id: Option<CreatureId>,
}

impl Cursor {
    fn sync(&mut self, list: &[CreatureRecord]) {
        if let Some(pos) = self.id.and_then(|id| list.iter().position(|r| r.id == id)) {
            self.index = pos;
        } else {
            self.index = self.index.min(list.len().saturating_sub(1));
        }
        self.id = list.get(self.index).map(|r| r.id);
    }

    fn step(&mut self, list: &[CreatureRecord], delta: isize) {
        if list.is_empty() {
            return;
        }
        let last = list.len() - 1;
        self.index = self.index.saturating_add_signed(delta).min(last);
        self.id = list.get(self.index).map(|r| r.id);
    }
}

/// UI state for one frame.
#[derive(Clone, Debug)]
pub struct AppState {
    pub snapshot: Snapshot,
    pub focus: Column,
    wild: Cursor,
    caught: Cursor,
    /// One-line feedback shown in the status bar.
    pub message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    /// Create state for the first snapshot.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        let mut state = Self {
            snapshot: Snapshot::default(),
            focus: Column::Wild,
            wild: Cursor::default(),
            caught: Cursor::default(),
            message: None,
            should_quit: false,
        };
        state.update(snapshot);
        state
    }

    /// Replace the snapshot, keeping cursors on the same creatures.
    pub fn update(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.wild.sync(&self.snapshot.wild);
        self.caught.sync(&self.snapshot.caught);
    }

    fn list(&self, column: Column) -> &[CreatureRecord] {
        match column {
            Column::Wild => &self.snapshot.wild,
            Column::Caught => &self.snapshot.caught,
        }
    }

    /// Cursor index in a column, `None` if the column is empty.
    #[must_use]
    pub fn selected(&self, column: Column) -> Option<usize> {
        let cursor = match column {
            Column::Wild => self.wild,
            Column::Caught => self.caught,
        };
        (!self.list(column).is_empty()).then_some(cursor.index)
    }

    /// Creature under the cursor of the focused column.
    #[must_use]
    pub fn selected_creature(&self) -> Option<&CreatureRecord> {
        let index = self.selected(self.focus)?;
        self.list(self.focus).get(index)
    }

    fn step(&mut self, delta: isize) {
        match self.focus {
            Column::Wild => self.wild.step(&self.snapshot.wild, delta),
            Column::Caught => self.caught.step(&self.snapshot.caught, delta),
        }
    }

    fn click(&mut self) -> Option<Command> {
        let record = self.selected_creature()?;
        let (id, name) = (record.id, record.name.clone());
        match self.focus {
            Column::Wild if self.snapshot.caught_full() => {
                self.message = Some(format!(
                    "Already holding {} - release one first",
                    self.snapshot.caught_capacity
                ));
                None
            }
            Column::Wild => {
                self.message = Some(format!("Caught {name}"));
                Some(Command::Catch(id))
            }
            Column::Caught => {
                self.message = Some(format!("Released {name}"));
                Some(Command::Release(id))
            }
        }
    }

    /// Apply a key press. Returns the command to send to the session, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.focus = self.focus.toggle();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.step(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.step(1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(),
            _ => None,
        }
    }
}

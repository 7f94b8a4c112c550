//! Front-end state for the todo table: the two form inputs, which widget has
//! focus, the selected row and the duplicate dialog.
//!
//! The store pushes a new snapshot to `App` through a subscription after every
//! mutation; rendering only ever reads `App::rows`.

use crate::todo::TodoEntry;
use crate::todo_store::{AddOutcome, Snapshot, TodoStore};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Description,
    Date,
    AddButton,
    Table,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Description, Focus::Date, Focus::AddButton, Focus::Table];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Duplicate,
}

/// Single-line text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    value: String,
}

impl Input {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

pub struct App {
    store: TodoStore,
    pending: Rc<RefCell<Option<Snapshot>>>,
    pub rows: Snapshot,
    pub description: Input,
    pub date: Input,
    pub focus: Focus,
    pub selected: Option<usize>,
    pub dialog: Option<Dialog>,
    pub status: Option<String>,
    pub running: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let mut store = TodoStore::new();
        let pending = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&pending);
        store.subscribe(move |snapshot: &Snapshot| {
            *sink.borrow_mut() = Some(Rc::clone(snapshot));
        });
        let rows = store.snapshot();
        Self {
            store,
            pending,
            rows,
            description: Input::default(),
            date: Input::default(),
            focus: Focus::Description,
            selected: None,
            dialog: None,
            status: None,
            running: true,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }
        if self.dialog.is_some() {
            self.handle_dialog_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            _ => match self.focus {
                Focus::Description | Focus::Date => self.handle_input_key(key.code),
                Focus::AddButton => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
                Focus::Table => self.handle_table_key(key.code),
            },
        }
    }

    fn handle_dialog_key(&mut self, code: KeyCode) {
        // Dismissing never inserts the duplicate.
        if matches!(
            code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('y' | 'Y' | 'n' | 'N')
        ) {
            self.dialog = None;
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        let input = match self.focus {
            Focus::Date => &mut self.date,
            _ => &mut self.description,
        };
        match code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
    }

    /// Presses the "Add" button with whatever is in the two inputs.
    pub fn submit(&mut self) {
        match self.store.add(self.description.value(), self.date.value()) {
            AddOutcome::Added(id) => {
                self.status = Some(format!("Added \"{}\"", self.description.value()));
                self.description.clear();
                self.date.clear();
                self.sync();
                self.selected = self.rows.iter().position(|e| e.id == id);
            }
            AddOutcome::Duplicate => self.dialog = Some(Dialog::Duplicate),
            AddOutcome::Rejected => {}
        }
    }

    /// Presses the "Delete" button on the selected row.
    pub fn delete_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };
        if self.store.remove(entry.id) {
            self.status = Some(format!("Deleted \"{}\"", entry.description));
            self.sync();
        }
    }

    pub fn selected_entry(&self) -> Option<&TodoEntry> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Picks up the snapshot published by the store, if any.
    fn sync(&mut self) {
        let Some(snapshot) = self.pending.borrow_mut().take() else {
            return;
        };
        debug!("re-rendering {} rows", snapshot.len());
        self.rows = snapshot;
        self.selected = match self.selected {
            _ if self.rows.is_empty() => None,
            Some(i) => Some(i.min(self.rows.len() - 1)),
            None => None,
        };
    }
}

//! Browser state: filter text, day selector, result rows, selection, detail.
//!
//! Every mutation that can change which rows are visible re-runs the lister,
//! and every selection move does a fresh point lookup for the detail pane.
//! The store is the single source of truth; nothing is cached here.

use ratatui::widgets::TableState;

use crate::db::{Day, SessionFilter, SessionRow, SessionStore};
use crate::error::AppError;
use crate::output::detail_lines;

/// Day selector positions: All plus the four conference days.
pub(crate) const DAY_CHOICES: [Option<Day>; 5] = [
    None,
    Some(Day::Monday),
    Some(Day::Tuesday),
    Some(Day::Wednesday),
    Some(Day::Thursday),
];

pub(crate) fn day_label(choice: Option<Day>) -> &'static str {
    match choice {
        None => "All",
        Some(day) => day.abbrev(),
    }
}

pub(crate) struct App<'a> {
    store: &'a SessionStore,
    pub(crate) query: String,
    pub(crate) day_index: usize,
    pub(crate) rows: Vec<SessionRow>,
    pub(crate) selected: usize,
    pub(crate) detail: Vec<String>,
    pub(crate) table_state: TableState,
    pub(crate) should_quit: bool,
}

impl<'a> App<'a> {
    pub(crate) fn new(store: &'a SessionStore, initial: SessionFilter) -> Result<Self, AppError> {
        let day_index = DAY_CHOICES
            .iter()
            .position(|choice| *choice == initial.day)
            .unwrap_or(0);
        let mut app = Self {
            store,
            query: initial.text.unwrap_or_default(),
            day_index,
            rows: Vec::new(),
            selected: 0,
            detail: Vec::new(),
            table_state: TableState::default(),
            should_quit: false,
        };
        app.refresh()?;
        Ok(app)
    }

    pub(crate) fn filter(&self) -> SessionFilter {
        SessionFilter {
            text: Some(self.query.clone()),
            day: DAY_CHOICES[self.day_index],
        }
    }

    /// Re-run the lister and clamp the selection into range. The detail pane
    /// keeps its last content while the result set is empty.
    fn refresh(&mut self) -> Result<(), AppError> {
        self.rows = self.store.list(&self.filter())?;
        if self.rows.is_empty() {
            self.selected = 0;
            self.table_state.select(None);
            return Ok(());
        }
        self.selected = self.selected.min(self.rows.len() - 1);
        self.refresh_detail()
    }

    /// Fresh point lookup for the selected row. An id that no longer exists
    /// leaves the pane unchanged.
    fn refresh_detail(&mut self) -> Result<(), AppError> {
        let Some(row) = self.rows.get(self.selected) else {
            return Ok(());
        };
        self.table_state.select(Some(self.selected));
        if let Some(record) = self.store.get(row.id)? {
            self.detail = detail_lines(&record);
        }
        Ok(())
    }

    pub(crate) fn on_char(&mut self, c: char) -> Result<(), AppError> {
        self.query.push(c);
        self.refresh()
    }

    pub(crate) fn on_backspace(&mut self) -> Result<(), AppError> {
        self.query.pop();
        self.refresh()
    }

    pub(crate) fn on_up(&mut self) -> Result<(), AppError> {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.refresh_detail()
    }

    pub(crate) fn on_down(&mut self) -> Result<(), AppError> {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
        self.refresh_detail()
    }

    pub(crate) fn next_day(&mut self) -> Result<(), AppError> {
        self.day_index = (self.day_index + 1) % DAY_CHOICES.len();
        self.refresh()
    }

    pub(crate) fn prev_day(&mut self) -> Result<(), AppError> {
        self.day_index = (self.day_index + DAY_CHOICES.len() - 1) % DAY_CHOICES.len();
        self.refresh()
    }

    fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || self.day_index != 0
    }

    /// Esc resets the filters; a second Esc with nothing to reset quits.
    pub(crate) fn on_escape(&mut self) -> Result<(), AppError> {
        if self.has_active_filters() {
            self.query.clear();
            self.day_index = 0;
            self.refresh()
        } else {
            self.should_quit = true;
            Ok(())
        }
    }
}

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::tui::row::DisplayRow;
use crate::tui::style::TableStyle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
}

/// The four fixed columns of the process table.
pub fn process_columns(name_width: u16) -> Vec<Column> {
    vec![
        Column { title: "pid", width: 15 },
        Column { title: "name", width: name_width },
        Column { title: "cpu usage", width: 15 },
        Column { title: "ram usage", width: 15 },
    ]
}

/// Scrollable table with a cursor. Navigation keys only move the cursor while
/// the table is focused; the cursor never wraps.
pub struct ProcessTable {
    columns: Vec<Column>,
    rows: Vec<DisplayRow>,
    state: TableState,
    focused: bool,
    height: u16,
}

impl ProcessTable {
    pub fn new(columns: Vec<Column>, rows: Vec<DisplayRow>, focused: bool, height: u16) -> Self {
        let selected = if rows.is_empty() { None } else { Some(0) };
        ProcessTable {
            columns,
            rows,
            state: TableState::default().with_selected(selected),
            focused,
            height: height.max(1),
        }
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_row(&self) -> Option<&DisplayRow> {
        self.state.selected().and_then(|i| self.rows.get(i))
    }

    /// Height including borders and the header line.
    pub fn outer_height(&self) -> u16 {
        self.height + 3
    }

    /// Feeds a key to the table. Returns whether the cursor moved.
    pub fn update(&mut self, key: KeyEvent) -> bool {
        if !self.focused || self.rows.is_empty() {
            return false;
        }

        let page = self.height as isize;
        let half_page = (page / 2).max(1);
        let last = self.rows.len() - 1;

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::PageUp | KeyCode::Char('b') => self.move_by(-page),
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => self.move_by(page),
            KeyCode::Char('u') => self.move_by(-half_page),
            KeyCode::Char('d') => self.move_by(half_page),
            KeyCode::Home | KeyCode::Char('g') => self.goto(0),
            KeyCode::End | KeyCode::Char('G') => self.goto(last),
            _ => false,
        }
    }

    fn move_by(&mut self, delta: isize) -> bool {
        let current = self.state.selected().unwrap_or(0) as isize;
        let last = self.rows.len() as isize - 1;
        self.goto((current + delta).clamp(0, last) as usize)
    }

    fn goto(&mut self, index: usize) -> bool {
        let before = self.state.selected();
        self.state.select(Some(index.min(self.rows.len().saturating_sub(1))));
        before != self.state.selected()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, style: &TableStyle) {
        let header = Row::new(self.columns.iter().map(|c| Cell::from(c.title)))
            .style(style.header.add_modifier(Modifier::UNDERLINED));
        let rows = self.rows.iter().map(|r| Row::new(r.cells()));
        let widths = self.columns.iter().map(|c| Constraint::Length(c.width));

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).border_style(style.border))
            .highlight_style(style.selected_for(self.focused));

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}

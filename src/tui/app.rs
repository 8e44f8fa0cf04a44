use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::actions::{RowAction, StatusLevel, StatusMessage};
use crate::tui::style::TableStyle;
use crate::tui::table::ProcessTable;

const HELP: &str = "↑/↓ move • esc focus • enter act • q quit";

/// Outcome of one key press for the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session state: the table, the injected `enter` action and the
/// last status line.
pub struct App {
    table: ProcessTable,
    on_enter: Box<dyn RowAction>,
    style: TableStyle,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(table: ProcessTable, on_enter: Box<dyn RowAction>, style: TableStyle) -> Self {
        let status = if table.rows().is_empty() {
            Some(StatusMessage::info("no process is using the CPU right now"))
        } else {
            None
        };
        App {
            table,
            on_enter,
            style,
            status,
        }
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Char('q') => Flow::Quit,
            KeyCode::Esc => {
                if self.table.focused() {
                    self.table.blur();
                } else {
                    self.table.focus();
                }
                Flow::Continue
            }
            KeyCode::Enter => {
                self.status = Some(match self.table.selected_row() {
                    Some(row) => self.on_enter.on_enter(row),
                    None => StatusMessage::info("no process selected"),
                });
                Flow::Continue
            }
            _ => {
                self.table.update(key);
                Flow::Continue
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [table_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(self.table.outer_height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.table.render(frame, table_area, &self.style);

        if let Some(status) = &self.status {
            let style = match status.level {
                StatusLevel::Info => self.style.info,
                StatusLevel::Error => self.style.error,
            };
            frame.render_widget(Paragraph::new(Span::styled(status.text.as_str(), style)), status_area);
        }

        frame.render_widget(Paragraph::new(Line::from(HELP).style(self.style.border)), help_area);
    }
}

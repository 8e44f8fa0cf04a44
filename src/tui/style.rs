use ratatui::style::{Color, Modifier, Style};

use crate::config::StyleConfig;

/// Colours for the table, built once from the config and handed to rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub border: Style,
    pub header: Style,
    pub selected: Style,
    pub info: Style,
    pub error: Style,
}

impl TableStyle {
    /// Blurred tables keep the cursor row visible but without the highlight colour.
    pub fn selected_for(&self, focused: bool) -> Style {
        if focused {
            self.selected
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }
}

impl From<&StyleConfig> for TableStyle {
    fn from(cfg: &StyleConfig) -> Self {
        TableStyle {
            border: Style::default().fg(Color::Indexed(cfg.border)),
            header: Style::default().fg(Color::Indexed(cfg.header)),
            selected: Style::default()
                .fg(Color::Indexed(cfg.selected_fg))
                .bg(Color::Indexed(cfg.selected_bg)),
            info: Style::default(),
            error: Style::default().fg(Color::Red),
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle::from(&StyleConfig::default())
    }
}

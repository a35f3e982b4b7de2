//! Terminal User Interface
//!
//! Noir-styled TUI for the detective game using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::EvidenceCategory;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub dim: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::LightYellow,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            header: Color::Yellow,
        }
    }
}

/// Get color for an evidence category tag
pub fn category_color(category: &EvidenceCategory) -> Color {
    match category {
        EvidenceCategory::Physical => Color::White,
        EvidenceCategory::Testimony => Color::Cyan,
        EvidenceCategory::Document => Color::LightYellow,
        EvidenceCategory::Forensic => Color::Magenta,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art title card
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════════════╗
║                                                            ║
║         T H E   M I D N I G H T                            ║
║         M A N U S C R I P T                                ║
║                                                            ║
║    "Every book has an ending.                              ║
║     Some are just written in blood."                       ║
║                                                            ║
║              A Detective Mystery                           ║
║                                                            ║
╚════════════════════════════════════════════════════════════╝
"#;

/// Smaller logo for the header bar
pub const SMALL_LOGO: &str = " THE MIDNIGHT MANUSCRIPT ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════╗
║                       CONTROLS                            ║
╠═══════════════════════════════════════════════════════════╣
║  Tab / Shift+Tab   Next / previous view                   ║
║  1-7               Jump straight to a view                ║
║  ↑/↓               Navigate lists                         ║
║  ←/→               Switch panel / cycle form fields       ║
║  Enter             Examine / Ask / Run / Investigate      ║
║  Esc               Back to case file / dismiss popup      ║
║  ?                 Toggle this help                       ║
║  q                 Quit (from the case file view)         ║
╠═══════════════════════════════════════════════════════════╣
║                       VIEWS                               ║
╠═══════════════════════════════════════════════════════════╣
║  1 Case File      4 Evidence Board    7 Accusation        ║
║  2 Crime Scene    5 Forensic Lab                          ║
║  3 Interviews     6 Archives & Records                    ║
╠═══════════════════════════════════════════════════════════╣
║  R (case file view)   Wipe the save and restart           ║
╚═══════════════════════════════════════════════════════════╝
"#;

/// Create the main layout: header, content, status bar
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

/// Create a two-panel content layout (list + detail)
pub fn create_split_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area)
        .to_vec()
}

/// Centered popup rect for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

//! Custom widgets for the game UI

use crate::data::LabStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Status stripe and countdown bar for a lab test card.
pub struct TestProgress {
    status: LabStatus,
    /// Fraction of the countdown already elapsed, 0.0..=1.0.
    elapsed: f64,
}

impl TestProgress {
    pub fn new(status: LabStatus, elapsed: f64) -> Self {
        Self {
            status,
            elapsed: elapsed.clamp(0.0, 1.0),
        }
    }
}

impl Widget for TestProgress {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        let (color, label) = match self.status {
            LabStatus::Available => (Color::DarkGray, "STANDBY"),
            LabStatus::Running => (Color::Yellow, "PROCESSING"),
            LabStatus::Completed => (Color::Green, "COMPLETE"),
        };

        buf.set_string(area.x, area.y, label, Style::default().fg(color));

        if area.height > 1 {
            let bar_y = area.y + 1;
            let width = area.width - 2;
            let filled = match self.status {
                LabStatus::Available => 0,
                LabStatus::Completed => width,
                LabStatus::Running => (self.elapsed * width as f64) as u16,
            };
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());
            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(color));
            }
            for x in filled..width {
                buf.set_string(
                    area.x + 1 + x,
                    bar_y,
                    "░",
                    Style::default().fg(Color::DarkGray),
                );
            }
        }
    }
}

/// Rubber-stamp box for verdicts and research results.
pub struct StampBox {
    text: String,
    color: Color,
}

impl StampBox {
    pub fn new(text: &str, color: Color) -> Self {
        Self {
            text: text.to_string(),
            color,
        }
    }
}

impl Widget for StampBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < self.text.len() as u16 + 4 || area.height < 3 {
            return;
        }
        let style = Style::default().fg(self.color);
        let width = self.text.len() as u16 + 2;

        buf.set_string(area.x, area.y, "╔", style);
        for x in 1..=width {
            buf.set_string(area.x + x, area.y, "═", style);
        }
        buf.set_string(area.x + width + 1, area.y, "╗", style);

        buf.set_string(area.x, area.y + 1, "║", style);
        buf.set_string(area.x + 1, area.y + 1, format!(" {} ", self.text), style);
        buf.set_string(area.x + width + 1, area.y + 1, "║", style);

        buf.set_string(area.x, area.y + 2, "╚", style);
        for x in 1..=width {
            buf.set_string(area.x + x, area.y + 2, "═", style);
        }
        buf.set_string(area.x + width + 1, area.y + 2, "╝", style);
    }
}

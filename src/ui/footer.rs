use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const GAME_HINTS: &str =
    " Arrows: Move │ Enter/Space: Flip │ R: Restart │ S: Settings │ D: Dark mode │ Q: Quit";
const SETTINGS_HINTS: &str = " Up/Down: Field │ Left/Right: Change │ Enter: Apply │ Esc: Close";

pub struct Footer<'a> {
    palette: &'a Palette,
}

impl<'a> Footer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn widget(&self, area: Rect, settings_open: bool) -> Paragraph<'static> {
        let hints = if settings_open {
            SETTINGS_HINTS
        } else {
            GAME_HINTS
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
    }
}

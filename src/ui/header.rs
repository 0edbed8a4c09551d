use crate::game::{GameSnapshot, LossReason, RunStatus};
use crate::ui::theme::Palette;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn widget(&self, snapshot: &GameSnapshot) -> Paragraph<'static> {
        let text_style = Style::default().fg(self.palette.text);
        let separator_style = Style::default().fg(self.palette.separator);
        let (status_text, status_color) = self.status(snapshot.status);

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status_text, Style::default().fg(status_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Time {}s", snapshot.time_left), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("Moves {}/{}", snapshot.moves, snapshot.min_moves),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!(
                    "Pairs {}/{}",
                    snapshot.solved.len() / 2,
                    snapshot.board.len() / 2
                ),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Score {}", snapshot.score), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!(
                    "{} {}x{}",
                    snapshot.config.theme, snapshot.grid_size, snapshot.grid_size
                ),
                text_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(self.palette.border)),
        )
    }

    fn status(&self, status: RunStatus) -> (&'static str, Color) {
        match status {
            RunStatus::Idle => ("Ready", self.palette.separator),
            RunStatus::Playing => ("Playing", self.palette.accent),
            RunStatus::Won => ("Won", self.palette.status_ok),
            RunStatus::Lost(LossReason::Timeout) => ("Out of time", self.palette.status_error),
            RunStatus::Lost(LossReason::MovesExceeded) => {
                ("Out of moves", self.palette.status_error)
            }
        }
    }
}

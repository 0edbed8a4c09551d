use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::game::{GameSnapshot, TileId};
use crate::ui::layout::grid_cells;
use crate::ui::theme::Palette;

const HIDDEN_FACE: &str = "?";

/// The tile grid. Face-down tiles show a placeholder, face-up tiles their
/// symbol; the cursor is drawn as a highlighted border.
pub struct BoardView<'a> {
    snapshot: &'a GameSnapshot,
    cursor: TileId,
    palette: &'a Palette,
}

impl<'a> BoardView<'a> {
    pub fn new(snapshot: &'a GameSnapshot, cursor: TileId, palette: &'a Palette) -> Self {
        Self {
            snapshot,
            cursor,
            palette,
        }
    }

    fn tile_widget(&self, id: TileId) -> Paragraph<'a> {
        let palette = self.palette;
        let (label, background) = match self.snapshot.board.get(id) {
            Some(tile) if self.snapshot.is_solved(id) => {
                (tile.value.to_string(), palette.tile_solved)
            }
            Some(tile) if self.snapshot.is_face_up(id) => {
                (tile.value.to_string(), palette.tile_face_up)
            }
            _ => (HIDDEN_FACE.to_string(), palette.tile_hidden),
        };

        let mut border_style = Style::default().fg(palette.border);
        if id == self.cursor {
            border_style = Style::default()
                .fg(palette.cursor)
                .add_modifier(Modifier::BOLD);
        }

        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.text).bg(background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tiles = self.snapshot.board.len();
        if tiles == 0 || area.width == 0 || area.height == 0 {
            return;
        }
        let columns = usize::from(self.snapshot.grid_size).clamp(1, tiles);
        let rows = tiles.div_ceil(columns);
        let (Ok(rows), Ok(columns)) = (u16::try_from(rows), u16::try_from(columns)) else {
            return;
        };

        for (id, cell) in grid_cells(area, rows, columns)
            .into_iter()
            .enumerate()
            .take(tiles)
        {
            self.tile_widget(id).render(cell, buf);
        }
    }
}

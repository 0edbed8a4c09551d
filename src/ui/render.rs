use crate::game::{LossReason, RunStatus, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::ui::app::App;
use crate::ui::board::BoardView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::settings::{SettingsDialogState, SettingsField, MAX_MOVE_BUDGET};
use crate::ui::theme::{palette, Palette};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = palette(app.dark_mode());
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let snapshot = app.snapshot();

    frame.render_widget(Header::new(palette).widget(snapshot), header);
    frame.render_widget(Clear, body);
    frame.render_widget(BoardView::new(snapshot, app.cursor(), palette), body);
    frame.render_widget(
        Footer::new(palette).widget(footer, app.settings_dialog().is_visible()),
        footer,
    );

    if let Some(error) = app.last_error() {
        let line = Rect {
            x: body.x,
            y: body.y + body.height.saturating_sub(1),
            width: body.width,
            height: body.height.min(1),
        };
        frame.render_widget(
            Paragraph::new(format!(" {error}")).style(Style::default().fg(palette.status_error)),
            line,
        );
    }

    if let Some(lines) = banner_lines(app, palette) {
        draw_popup(frame, body, palette, "Game over", lines);
    }

    if let SettingsDialogState::Visible { .. } = app.settings_dialog() {
        let lines = settings_lines(app.settings_dialog(), palette);
        draw_popup(frame, body, palette, "Settings", lines);
    }
}

fn banner_lines(app: &App, palette: &Palette) -> Option<Vec<Line<'static>>> {
    let snapshot = app.snapshot();
    let (headline, color) = match snapshot.status {
        RunStatus::Won => ("You won!".to_string(), palette.status_ok),
        RunStatus::Lost(LossReason::Timeout) => {
            ("Time is up.".to_string(), palette.status_error)
        }
        RunStatus::Lost(LossReason::MovesExceeded) => {
            ("Out of moves.".to_string(), palette.status_error)
        }
        RunStatus::Idle | RunStatus::Playing => return None,
    };

    let mut lines = vec![Line::from(Span::styled(
        headline,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if snapshot.status == RunStatus::Won {
        lines.push(Line::from(format!("Score: {}", snapshot.score)));
    }
    lines.push(Line::from(format!(
        "Moves: {}  Time left: {}s",
        snapshot.moves, snapshot.time_left
    )));
    lines.push(Line::from(""));
    lines.push(Line::from("R: Play again  Q: Quit"));
    Some(lines)
}

fn settings_lines(dialog: &SettingsDialogState, palette: &Palette) -> Vec<Line<'static>> {
    let SettingsDialogState::Visible {
        draft,
        dirty,
        confirm_discard,
        ..
    } = dialog
    else {
        return Vec::new();
    };
    let focused = dialog.focused_field();

    let mut lines = Vec::new();
    for field in SettingsField::ALL {
        let value = match field {
            SettingsField::GridSize => format!(
                "{} x {}  ({}..{})",
                draft.grid_size, draft.grid_size, MIN_GRID_SIZE, MAX_GRID_SIZE
            ),
            SettingsField::MinMoves => format!("{}  (1..{})", draft.min_moves, MAX_MOVE_BUDGET),
            SettingsField::Theme => draft.theme.clone(),
        };
        let mut line = Line::from(vec![
            Span::styled(
                format!("{:<12}", field.label()),
                Style::default().fg(palette.text),
            ),
            Span::styled(format!("< {value} >"), Style::default().fg(palette.accent)),
        ]);
        if focused == Some(field) {
            line = line.style(Style::default().bg(palette.highlight));
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    if *confirm_discard {
        lines.push(Line::from(Span::styled(
            "Unsaved changes. Esc again to discard.",
            Style::default().fg(palette.status_error),
        )));
    } else if *dirty {
        lines.push(Line::from("Enter starts a new game with these settings."));
    } else {
        lines.push(Line::from("Enter: Apply  Esc: Close"));
    }
    lines
}

fn draw_popup(
    frame: &mut Frame<'_>,
    body: Rect,
    palette: &Palette,
    title: &'static str,
    lines: Vec<Line<'static>>,
) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(32);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(title, Style::default().fg(palette.accent)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.popup_border));
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(palette.text))
            .block(popup),
        area,
    );
}

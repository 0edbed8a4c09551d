use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

const BELL: &[u8] = b"\x07";
const TITLE: &str = "memory-match";

/// Runs the blocking draw/input loop until the player quits or shutdown is
/// signaled elsewhere. The terminal is restored on every exit path.
pub fn run(mut app: App, tick_rate: Duration, shutdown: ShutdownHandle) -> io::Result<()> {
    let mut screen = BoardScreen::open()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());
    app.on_tick();

    loop {
        screen.terminal.draw(|frame| draw(frame, &app))?;
        if app.take_bell() {
            screen.ring_bell()?;
        }
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                app.on_tick();
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(screen);
    Ok(())
}

/// The terminal while the board is shown. Dropping it, or a panic on any
/// thread, puts the terminal back once.
struct BoardScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: Arc<AtomicBool>,
}

impl BoardScreen {
    fn open() -> io::Result<Self> {
        enable_raw_mode()?;
        let restored = Arc::new(AtomicBool::new(false));
        if let Err(err) = enter_board_screen(&mut io::stdout()) {
            restore(&restored);
            return Err(err);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore(&restored);
                return Err(err);
            }
        };

        let hook_restored = Arc::clone(&restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore(&hook_restored);
            default_hook(info);
        }));

        Ok(Self { terminal, restored })
    }

    fn ring_bell(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(BELL)?;
        stdout.flush()
    }
}

impl Drop for BoardScreen {
    fn drop(&mut self) {
        restore(&self.restored);
    }
}

/// The board draws its own cursor highlight, so the terminal cursor stays
/// hidden while it is shown.
fn enter_board_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        EnterAlternateScreen,
        Clear(ClearType::All),
        Hide,
        SetTitle(TITLE)
    )
}

fn leave_board_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Show, LeaveAlternateScreen)
}

fn restore(restored: &AtomicBool) {
    if restored.swap(true, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let _ = leave_board_screen(&mut io::stdout());
}

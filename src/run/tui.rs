use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, MenuField, Screen};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            if handle_global_input(key, app) {
                continue;
            }
            match app.screen {
                Screen::Menu => handle_menu_input(key, app)?,
                Screen::Receipt => handle_receipt_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

/// Keys that behave the same on every screen. Returns true when consumed.
fn handle_global_input(key: event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
            true
        }
        KeyCode::Char('1') if app.screen != Screen::Menu => {
            app.back_to_menu();
            true
        }
        // The amount field owns digits, so '2' only switches tabs when
        // it cannot be form input
        KeyCode::Char('2')
            if app.screen == Screen::Menu
                && app.focus == MenuField::Frequency
                && app.bill.is_some() =>
        {
            app.screen = Screen::Receipt;
            true
        }
        _ => false,
    }
}

fn handle_menu_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.focus = match app.focus {
                MenuField::Amount => MenuField::Frequency,
                MenuField::Frequency => MenuField::Amount,
            };
        }
        KeyCode::Enter => app.place_order()?,
        KeyCode::Esc => {
            if app.focus == MenuField::Amount && !app.amount_input.is_empty() {
                app.amount_input.clear();
            } else {
                app.status_message.clear();
            }
        }
        KeyCode::Left if app.focus == MenuField::Frequency => app.cycle_frequency(-1),
        KeyCode::Right if app.focus == MenuField::Frequency => app.cycle_frequency(1),
        KeyCode::Char('+') | KeyCode::Char('=') if app.focus == MenuField::Frequency => {
            app.cycle_frequency(1);
        }
        KeyCode::Char('-') if app.focus == MenuField::Frequency => app.cycle_frequency(-1),
        KeyCode::Backspace if app.focus == MenuField::Amount => {
            app.amount_input.pop();
        }
        KeyCode::Char(c) if app.focus == MenuField::Amount && (c.is_ascii_digit() || c == '.') => {
            app.amount_input.push(c);
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
    Ok(())
}

fn handle_receipt_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('m') => app.back_to_menu(),
        KeyCode::Enter | KeyCode::Char('n') => app.new_order(),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
}

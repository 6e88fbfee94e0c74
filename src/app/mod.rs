pub mod session;

use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::ui::draw_session;
use crate::{PAGE_STEP, POLL_MS};
pub use session::{Flow, Outcome, Session};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new();
    info!("interactive session started");

    loop {
        terminal.draw(|frame| draw_session(frame, &session))?;

        if event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_input(key.code, &mut session) == Flow::Quit {
                    break;
                }
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, session: &mut Session) -> Flow {
    let page = PAGE_STEP as i32;
    match code {
        KeyCode::Esc => return Flow::Quit,
        KeyCode::Enter => return session.submit(),
        KeyCode::Backspace => session.backspace(),
        KeyCode::Char(ch) => session.push_char(ch),
        KeyCode::Up => session.scroll_by(-1, 0),
        KeyCode::Down => session.scroll_by(1, 0),
        KeyCode::Left => session.scroll_by(0, -1),
        KeyCode::Right => session.scroll_by(0, 1),
        KeyCode::PageUp => session.scroll_by(-page, 0),
        KeyCode::PageDown => session.scroll_by(page, 0),
        KeyCode::Home => session.reset_scroll(),
        _ => {}
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(session: &mut Session, keys: &[KeyCode]) -> Flow {
        let mut flow = Flow::Continue;
        for key in keys {
            flow = handle_input(*key, session);
        }
        flow
    }

    #[test]
    fn typing_and_enter_builds_spiral() {
        let mut session = Session::new();
        let flow = press(
            &mut session,
            &[KeyCode::Char('3'), KeyCode::Char('3'), KeyCode::Enter],
        );
        assert_eq!(flow, Flow::Continue);
        match &session.outcome {
            Outcome::Rendered { bound, text } => {
                assert_eq!(*bound, 33);
                assert!(text.ends_with("      33 32 31 30"));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn escape_quits() {
        let mut session = Session::new();
        assert_eq!(press(&mut session, &[KeyCode::Esc]), Flow::Quit);
    }

    #[test]
    fn q_quits_only_on_enter() {
        let mut session = Session::new();
        assert_eq!(press(&mut session, &[KeyCode::Char('q')]), Flow::Continue);
        assert_eq!(session.input, "q");
        assert_eq!(press(&mut session, &[KeyCode::Enter]), Flow::Quit);
    }

    #[test]
    fn arrows_scroll_output() {
        let mut session = Session::new();
        press(
            &mut session,
            &[KeyCode::Char('9'), KeyCode::Char('9'), KeyCode::Enter],
        );
        press(&mut session, &[KeyCode::Down, KeyCode::Down, KeyCode::Right]);
        assert_eq!(session.scroll, (2, 1));
        press(&mut session, &[KeyCode::PageDown]);
        assert_eq!(session.scroll, (9, 1));
        press(&mut session, &[KeyCode::Home]);
        assert_eq!(session.scroll, (0, 0));
    }
}

//! Terminal output for animations

use crate::animation::FrameSink;
use asciisolid_render::Frame;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, BufWriter, Stdout, Write, stdout};
use std::time::{Duration, Instant};

/// Full-screen display on the alternate screen, redrawn in place each frame
pub struct TerminalDisplay {
    buffer: BufWriter<Stdout>,
}

impl TerminalDisplay {
    pub fn new() -> io::Result<Self> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let setup = || -> io::Result<()> {
            terminal::enable_raw_mode()?;
            execute!(io::stdout(), terminal::Clear(terminal::ClearType::All))
        };
        with_rollback(setup, restore_terminal)?;

        Ok(Self {
            buffer: BufWriter::new(stdout),
        })
    }

    /// Write each frame line at an explicit row so long lines cannot shift the rest
    fn draw(&mut self, frame: &Frame, status: &str) -> io::Result<()> {
        // hide cursor, disable line wrap
        write!(self.buffer, "\x1b[?25l\x1b[?7l")?;

        let mut rows = 0;
        for (i, line) in frame.lines().enumerate() {
            write!(self.buffer, "\x1b[{};1H{}", i + 1, line)?;
            rows = i + 1;
        }
        write!(self.buffer, "\x1b[J")?;
        write!(self.buffer, "\x1b[{};1H\x1b[K{}", rows + 1, status)?;

        write!(self.buffer, "\x1b[?25h\x1b[?7h")?;
        self.buffer.flush()
    }

    fn poll_input(&self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                return Ok(Some(key_event));
            }
        }
        Ok(None)
    }
}

impl FrameSink for TerminalDisplay {
    fn present(&mut self, frame: &Frame, status: &str) -> io::Result<()> {
        self.draw(frame, status)
    }

    /// Sleep for `delay` while watching for a quit key
    fn pause(&mut self, delay: Duration) -> io::Result<bool> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if let Some(key) = self.poll_input(remaining)? {
                if is_quit(&key) {
                    return Ok(false);
                }
            }
            if remaining.is_zero() {
                return Ok(true);
            }
        }
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = self.buffer.flush();
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen);
}

/// Run `setup`; if it fails, run `rollback` before returning the error
fn with_rollback<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    let result = setup();
    if result.is_err() {
        rollback();
    }
    result
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Line-oriented output for pipes and logs: frames are printed one after another
pub struct PlainDisplay<W: Write> {
    out: W,
}

impl PlainDisplay<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> PlainDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for PlainDisplay<W> {
    fn present(&mut self, frame: &Frame, status: &str) -> io::Result<()> {
        writeln!(self.out, "{frame}")?;
        writeln!(self.out, "{status}")?;
        self.out.flush()
    }

    fn pause(&mut self, delay: Duration) -> io::Result<bool> {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciisolid_render::{Cell, Window};

    #[test]
    fn test_plain_display_writes_frame_and_status() {
        let window = Window::new(4, 2).unwrap();
        let frame = Frame::compose(&window, [(Cell::new(1, 1), '@')]);

        let mut display = PlainDisplay::new(Vec::new());
        display.present(&frame, "status").unwrap();
        assert!(display.pause(Duration::ZERO).unwrap());

        let text = String::from_utf8(display.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], " @   ");
        assert_eq!(lines[3], "status");
    }

    #[test]
    fn test_failed_setup_rolls_back() {
        let mut rolled_back = false;
        let result: io::Result<()> = with_rollback(
            || Err(io::Error::new(io::ErrorKind::Other, "raw mode unavailable")),
            || rolled_back = true,
        );
        assert!(result.is_err());
        assert!(rolled_back);

        let mut rolled_back = false;
        let result = with_rollback(|| Ok(7), || rolled_back = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!rolled_back);
    }

    #[test]
    fn test_quit_keys() {
        let key = |code, modifiers| KeyEvent::new(code, modifiers);
        assert!(is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&key(KeyCode::Up, KeyModifiers::NONE)));
    }
}

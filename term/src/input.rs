//! Key decoding for the terminal frontend.
//!
//! | Key | Action |
//! |-----|--------|
//! | ↑ or W | Move up |
//! | ↓ or S | Move down |
//! | ← or A | Move left |
//! | → or D | Move right |
//! | Space | Cycle mark |
//! | Enter | Reveal |
//! | Q, Esc or Ctrl+C | Quit |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use minefield_core::{Command, Direction};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Quit,
}

/// Maps a terminal event to an input, anything unrecognized is `None`.
pub fn decode(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => decode_key(key),
        _ => None,
    }
}

fn decode_key(key: &KeyEvent) -> Option<Input> {
    use Direction::*;

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Input::Quit);
        }
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Some(Input::Quit),
        KeyCode::Up | KeyCode::Char('w' | 'W') => Command::Move(Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Command::Move(Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Command::Move(Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Command::Move(Right),
        KeyCode::Char(' ') => Command::CycleMark,
        KeyCode::Enter => Command::Reveal,
        _ => return None,
    };
    Some(Input::Command(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrows_and_wasd_move() {
        for (code, direction) in [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('W'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('A'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('d'), Direction::Right),
        ] {
            assert_eq!(
                decode(&press(code)),
                Some(Input::Command(Command::Move(direction))),
                "{code:?}"
            );
        }
    }

    #[test]
    fn space_marks_and_enter_reveals() {
        assert_eq!(
            decode(&press(KeyCode::Char(' '))),
            Some(Input::Command(Command::CycleMark))
        );
        assert_eq!(
            decode(&press(KeyCode::Enter)),
            Some(Input::Command(Command::Reveal))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(decode(&press(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(decode(&press(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(
            decode(&Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(Input::Quit)
        );
    }

    #[test]
    fn unknown_keys_and_events_are_ignored() {
        assert_eq!(decode(&press(KeyCode::Char('x'))), None);
        assert_eq!(decode(&press(KeyCode::Char('c'))), None);
        assert_eq!(decode(&press(KeyCode::Tab)), None);
        assert_eq!(decode(&Event::FocusGained), None);
        assert_eq!(decode(&Event::Resize(80, 24)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));

        assert_eq!(decode(&release), None);
    }
}

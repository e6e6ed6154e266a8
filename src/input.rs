//! Keyboard mapping: DOM `KeyboardEvent.key` values (and on-screen keys) to session commands.

use crate::state::Command;

/// Normalized key, independent of where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Space,
    Tab,
    BackTab,
}

impl Key {
    pub fn from_dom(key: &str, shift: bool) -> Option<Self> {
        match key {
            "Backspace" | "Delete" => Some(Self::Backspace),
            "ArrowLeft" | "Left" => Some(Self::Left),
            "ArrowRight" | "Right" => Some(Self::Right),
            "ArrowUp" | "Up" => Some(Self::Up),
            "ArrowDown" | "Down" => Some(Self::Down),
            " " | "Spacebar" => Some(Self::Space),
            "Tab" if shift => Some(Self::BackTab),
            "Tab" => Some(Self::Tab),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_alphabetic() => Some(Self::Letter(ch.to_ascii_uppercase())),
                    _ => None,
                }
            }
        }
    }

    pub fn command(self) -> Command {
        match self {
            Key::Letter(ch) => Command::PressLetter(ch),
            Key::Backspace => Command::PressBackspace,
            Key::Left => Command::MoveArrow { dr: 0, dc: -1 },
            Key::Right => Command::MoveArrow { dr: 0, dc: 1 },
            Key::Up => Command::MoveArrow { dr: -1, dc: 0 },
            Key::Down => Command::MoveArrow { dr: 1, dc: 0 },
            Key::Space => Command::ToggleDirection,
            Key::Tab => Command::NextSlot,
            Key::BackTab => Command::PrevSlot,
        }
    }
}

/// Command for a physical key press; `None` for keys the puzzle ignores (and for
/// shortcuts held with Ctrl/Alt/Meta, which belong to the browser).
pub fn command_for_key(key: &str, shift: bool, chord: bool) -> Option<Command> {
    if chord {
        return None;
    }
    Key::from_dom(key, shift).map(Key::command)
}

/// Rows of the on-screen keyboard.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

//! PCL escape-sequence fragments.
//!
//! Every function is a pure template. Positions and margins are PCL
//! decipoints (1/720 inch).

/// Escape byte that prefixes every PCL command.
pub const ESC: char = '\x1b';

pub const NEWLINE: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn command(self) -> char {
        match self {
            Axis::Vertical => 'V',
            Axis::Horizontal => 'H',
        }
    }
}

/// `ESC E`: printer reset.
pub fn reset() -> &'static str {
    "\x1bE"
}

pub fn set_orientation_portrait() -> &'static str {
    "\x1b&l0O"
}

pub fn set_page_size_a4() -> &'static str {
    "\x1b&l26A"
}

/// Top margin (`ESC &l#E`) followed by left margin (`ESC &a#L`).
pub fn set_margins(top: u32, left: u32) -> String {
    format!("{ESC}&l{top}E{ESC}&a{left}L")
}

/// Primary font at 10 point, upright style, medium weight.
pub fn set_font() -> &'static str {
    "\x1b(s10V\x1b(s0S\x1b(s0B"
}

pub fn move_cursor(axis: Axis, position: u32) -> String {
    format!("{ESC}&a{position}{}", axis.command())
}

pub fn form_feed() -> &'static str {
    "\x0c"
}

/// Provenance marker that the printer does not render.
pub fn comment(text: &str) -> String {
    format!("@PJL COMMENT {text}{NEWLINE}")
}

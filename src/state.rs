/// One of the eight colors the terminal can show.
///
/// Each color can be brightened with [`crate::VgaTerminal::set_bold_foreground`]
/// or [`crate::VgaTerminal::set_bold_background`], which gives sixteen
/// visible shades per layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors, ordered by their SGR code.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The SGR parameter selecting this color as the foreground, 30 through 37.
    pub const fn foreground_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }

    /// The SGR parameter selecting this color as the background, which is
    /// always the foreground code plus ten.
    #[inline(always)]
    pub const fn background_code(self) -> u8 {
        self.foreground_code() + 10
    }

    /// The color whose foreground code is `code`, if any.
    pub const fn from_foreground_code(code: u8) -> Option<Self> {
        match code {
            30..=37 => Some(Self::ALL[(code - 30) as usize]),
            _ => None,
        }
    }

    /// The color whose background code is `code`, if any.
    pub const fn from_background_code(code: u8) -> Option<Self> {
        match code {
            40..=47 => Some(Self::ALL[(code - 40) as usize]),
            _ => None,
        }
    }
}

/// Screen geometry the terminal can be switched into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// 80 columns by 25 rows, landscape.
    #[default]
    Landscape80x25,
    /// 128 columns by 48 rows, landscape. Best on 19" screens and above.
    Landscape128x48,
    /// 96 columns by 64 rows on a monitor turned on its side.
    Portrait96x64,
}

impl DisplayMode {
    /// The parameter for the `h` command that selects this mode.
    pub const fn code(self) -> u8 {
        match self {
            DisplayMode::Landscape80x25 => 0,
            DisplayMode::Landscape128x48 => 1,
            DisplayMode::Portrait96x64 => 2,
        }
    }

    /// The mode selected by `code`, if any.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DisplayMode::Landscape80x25),
            1 => Some(DisplayMode::Landscape128x48),
            2 => Some(DisplayMode::Portrait96x64),
            _ => None,
        }
    }

    /// Characters per row.
    pub const fn columns(self) -> u16 {
        match self {
            DisplayMode::Landscape80x25 => 80,
            DisplayMode::Landscape128x48 => 128,
            DisplayMode::Portrait96x64 => 96,
        }
    }

    /// Rows per screen.
    pub const fn rows(self) -> u16 {
        match self {
            DisplayMode::Landscape80x25 => 25,
            DisplayMode::Landscape128x48 => 48,
            DisplayMode::Portrait96x64 => 64,
        }
    }

    /// Whether the monitor is expected to stand on its side.
    #[inline(always)]
    pub const fn is_portrait(self) -> bool {
        matches!(self, DisplayMode::Portrait96x64)
    }
}

/// A 1-based cursor location, as ANSI terminals count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// Column, counting from 1 at the left edge.
    pub column: u16,
    /// Row, counting from 1 at the top edge.
    pub row: u16,
}

impl CursorPosition {
    /// The top-left cell.
    pub const ORIGIN: Self = Self::new(1, 1);

    /// A position from a 1-based column and row.
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// What a [`crate::VgaTerminal`] believes the physical terminal is showing.
///
/// The terminal never answers, so this is reconstructed purely from the
/// commands that were sent. Fields only change once the sink has accepted
/// every byte of the command that changes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalState {
    pub foreground: Color,
    pub background: Color,
    /// Cleared together with `bold_background`, since the terminal can
    /// only drop bright attributes by resetting all of them.
    pub bold_foreground: bool,
    pub bold_background: bool,
    /// Whether the VGA signal was last switched on.
    pub video_output_enabled: bool,
    pub display_mode: DisplayMode,
    /// Last cursor position sent. Never clamped to the display size.
    pub cursor: CursorPosition,
    /// Position recorded by the most recent save-cursor command.
    pub saved_cursor: Option<CursorPosition>,
}

impl TerminalState {
    /// The state of a freshly reset terminal: white on black, no bright
    /// attributes, 80x25 landscape, cursor homed.
    pub const fn new() -> Self {
        Self {
            foreground: Color::White,
            background: Color::Black,
            bold_foreground: false,
            bold_background: false,
            video_output_enabled: false,
            display_mode: DisplayMode::Landscape80x25,
            cursor: CursorPosition::ORIGIN,
            saved_cursor: None,
        }
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

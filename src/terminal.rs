use core::fmt;

#[cfg(feature = "tracing")]
use tracing::{debug, trace, warn};

use crate::{Color, CursorPosition, DisplayMode, TerminalState, VgaError, VgaSink};

/// Control Sequence Introducer, which opens every command.
const CSI: &[u8] = b"\x1b[";

/// Legacy final byte that turns the cursor back on. It follows CSI directly,
/// with no parameters and no `h`.
const SHOW_CURSOR: u8 = 0x05;

const SGR_RESET: u8 = 0;
const SGR_BRIGHT_FOREGROUND: u8 = 1;
const SGR_BRIGHT_BACKGROUND: u8 = 5;

/// Drives a VGA terminal by writing control sequences to a [`VgaSink`],
/// tracking what it has asked the terminal to do in a [`TerminalState`].
///
/// The terminal is write-only: nothing is ever read back, so the state is
/// only as accurate as the assumption that every accepted byte arrived.
pub struct VgaTerminal<S> {
    sink: S,
    state: TerminalState,
}

impl<S> VgaTerminal<S> {
    /// Binds a sink without writing anything to it.
    ///
    /// The state starts out as [`TerminalState::new`], which only matches the
    /// physical terminal once it has been reset. Use [`VgaTerminal::init`] to
    /// do both at once.
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            state: TerminalState::new(),
        }
    }

    /// What the terminal has been told so far.
    #[inline(always)]
    pub const fn state(&self) -> &TerminalState {
        &self.state
    }

    /// The sink commands are written to.
    #[inline(always)]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The sink, for flushing or other transport-specific calls.
    #[inline(always)]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Gives the sink back, ending the terminal.
    #[inline(always)]
    pub fn take_sink(self) -> S {
        self.sink
    }
}

impl<S: VgaSink> VgaTerminal<S> {
    /// Binds a sink, resets the tracked state and clears the screen.
    pub fn init(sink: S) -> Result<Self, VgaError<S::Error>> {
        let mut term = Self::new(sink);
        term.reset()?;
        Ok(term)
    }

    /// Clears the screen and returns the tracked state to its defaults.
    ///
    /// Only the screen is cleared; colors, brightness and display mode on the
    /// physical terminal are left as they were.
    pub fn reset(&mut self) -> Result<(), VgaError<S::Error>> {
        self.clear_screen()?;
        self.state = TerminalState::new();
        #[cfg(feature = "tracing")]
        debug!("terminal reset");
        Ok(())
    }

    /// Writes `ESC [`, then `params` if any, then the `command` byte.
    ///
    /// Every control sequence this type produces passes through here. It is
    /// public so that callers can send commands this type has no method
    /// for; such commands don't affect [`VgaTerminal::state`].
    ///
    /// ```rust
    /// # use vgaterm::VgaTerminal;
    /// let mut term = VgaTerminal::new(Vec::<u8>::new());
    /// term.emit_command(Some(format_args!("3")), b'B').unwrap();
    /// term.emit_command(None, b'u').unwrap();
    /// assert_eq!(term.sink(), b"\x1b[3B\x1b[u");
    /// ```
    pub fn emit_command(
        &mut self,
        params: Option<fmt::Arguments<'_>>,
        command: u8,
    ) -> Result<(), VgaError<S::Error>> {
        #[cfg(feature = "tracing")]
        trace!(params = ?params, command = %char::from(command), "emit command");

        self.sink.write_bytes(CSI).map_err(sink_failure)?;
        if let Some(params) = params {
            write_args(&mut self.sink, params)?;
        }
        self.sink.write_bytes(&[command]).map_err(sink_failure)
    }

    /// Writes bytes as they are, for the terminal to display.
    ///
    /// The cursor moves as the terminal draws the bytes, but the tracked
    /// [`TerminalState::cursor`] does not follow it.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), VgaError<S::Error>> {
        self.sink.write_bytes(bytes).map_err(sink_failure)
    }

    /// Writes UTF-8 text as it is, for the terminal to display.
    pub fn write_text(&mut self, text: &str) -> Result<(), VgaError<S::Error>> {
        self.write_bytes(text.as_bytes())
    }

    /// Writes formatted text, which makes `write!(term, ...)` work.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), VgaError<S::Error>> {
        write_args(&mut self.sink, args)
    }

    /// Erases the whole display. Tracked state is not changed.
    pub fn clear_screen(&mut self) -> Result<(), VgaError<S::Error>> {
        self.emit_command(Some(format_args!("2")), b'J')
    }

    /// Moves the cursor to a 1-based `column` and `row`.
    ///
    /// The position isn't checked against [`DisplayMode::columns`] or
    /// [`DisplayMode::rows`]; the terminal accepts anything.
    pub fn set_cursor_position(&mut self, column: u16, row: u16) -> Result<(), VgaError<S::Error>> {
        self.emit_command(Some(format_args!("{row};{column}")), b'H')?;
        self.state.cursor = CursorPosition::new(column, row);
        Ok(())
    }

    /// Selects the foreground and background colors.
    pub fn set_color(&mut self, foreground: Color, background: Color) -> Result<(), VgaError<S::Error>> {
        self.emit_command(
            Some(format_args!(
                "{};{}",
                foreground.foreground_code(),
                background.background_code()
            )),
            b'm',
        )?;
        self.state.foreground = foreground;
        self.state.background = background;
        Ok(())
    }

    /// Shows or hides the cursor.
    ///
    /// The two directions use differently shaped sequences, `ESC [ 0x05` and
    /// `ESC [ l`, because that is what the terminal firmware responds to.
    pub fn set_cursor_visible(&mut self, show: bool) -> Result<(), VgaError<S::Error>> {
        if show {
            self.emit_command(None, SHOW_CURSOR)
        } else {
            self.emit_command(None, b'l')
        }
    }

    /// Turns the bright foreground attribute on, or clears all bright
    /// attributes and restores the colors.
    pub fn set_bold_foreground(&mut self, enable: bool) -> Result<(), VgaError<S::Error>> {
        if !enable {
            return self.reset_attributes();
        }
        self.emit_command(Some(format_args!("{SGR_BRIGHT_FOREGROUND}")), b'm')?;
        self.state.bold_foreground = true;
        Ok(())
    }

    /// Turns the bright background attribute on, or clears all bright
    /// attributes and restores the colors.
    pub fn set_bold_background(&mut self, enable: bool) -> Result<(), VgaError<S::Error>> {
        if !enable {
            return self.reset_attributes();
        }
        self.emit_command(Some(format_args!("{SGR_BRIGHT_BACKGROUND}")), b'm')?;
        self.state.bold_background = true;
        Ok(())
    }

    /// The terminal has no per-layer "bright off", only a full attribute
    /// reset. That drops both bright attributes and both colors, so the
    /// colors get sent again straight after it.
    fn reset_attributes(&mut self) -> Result<(), VgaError<S::Error>> {
        self.emit_command(Some(format_args!("{SGR_RESET}")), b'm')?;
        self.state.bold_foreground = false;
        self.state.bold_background = false;
        self.set_color(self.state.foreground, self.state.background)
    }

    /// Switches the screen geometry.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), VgaError<S::Error>> {
        self.emit_command(Some(format_args!("{}", mode.code())), b'h')?;
        self.state.display_mode = mode;
        #[cfg(feature = "tracing")]
        debug!(mode = ?mode, "display mode changed");
        Ok(())
    }

    /// Turns the VGA signal on or off, using the terminal's screen-saver
    /// command.
    pub fn set_video_output(&mut self, enabled: bool) -> Result<(), VgaError<S::Error>> {
        let level: u8 = if enabled { 255 } else { 0 };
        self.emit_command(Some(format_args!("{level}")), b'S')?;
        self.state.video_output_enabled = enabled;
        #[cfg(feature = "tracing")]
        debug!(enabled, "video output changed");
        Ok(())
    }

    /// Moves the cursor up `n` rows. The terminal stops at the top row, and
    /// so does the tracked position.
    ///
    /// As with all relative moves, the terminal reads a count of 0 as 1.
    pub fn cursor_up(&mut self, n: u16) -> Result<(), VgaError<S::Error>> {
        self.emit_command(Some(format_args!("{n}")), b'A')?;
        self.state.cursor.row = self.state.cursor.row.saturating_sub(n.max(1)).max(1);
        Ok(())
    }

    /// Moves the cursor down `n` rows.
    pub fn cursor_down(&mut self, n: u16) -> Result<(), VgaError<S::Error>> {
        self.emit_command(Some(format_args!("{n}")), b'B')?;
        self.state.cursor.row = self.state.cursor.row.saturating_add(n.max(1));
        Ok(())
    }

    /// Moves the cursor right `n` columns.
    pub fn cursor_forward(&mut self, n: u16) -> Result<(), VgaError<S::Error>> {
        self.emit_command(Some(format_args!("{n}")), b'C')?;
        self.state.cursor.column = self.state.cursor.column.saturating_add(n.max(1));
        Ok(())
    }

    /// Moves the cursor left `n` columns, stopping at the first column.
    pub fn cursor_back(&mut self, n: u16) -> Result<(), VgaError<S::Error>> {
        self.emit_command(Some(format_args!("{n}")), b'D')?;
        self.state.cursor.column = self.state.cursor.column.saturating_sub(n.max(1)).max(1);
        Ok(())
    }

    /// Asks the terminal to remember the current cursor position.
    pub fn save_cursor(&mut self) -> Result<(), VgaError<S::Error>> {
        self.emit_command(None, b's')?;
        self.state.saved_cursor = Some(self.state.cursor);
        Ok(())
    }

    /// Returns the cursor to where [`VgaTerminal::save_cursor`] left it.
    /// Without an earlier save the tracked position stays put.
    pub fn restore_cursor(&mut self) -> Result<(), VgaError<S::Error>> {
        self.emit_command(None, b'u')?;
        if let Some(saved) = self.state.saved_cursor {
            self.state.cursor = saved;
        }
        Ok(())
    }
}

fn sink_failure<E>(err: E) -> VgaError<E> {
    #[cfg(feature = "tracing")]
    warn!("terminal sink rejected write");
    VgaError::SinkWriteFailure(err)
}

/// Formats `args` straight into the sink, keeping the sink's own error.
fn write_args<S: VgaSink>(sink: &mut S, args: fmt::Arguments<'_>) -> Result<(), VgaError<S::Error>> {
    let mut out = SinkWriter { sink, error: None };
    if fmt::write(&mut out, args).is_ok() {
        return Ok(());
    }
    match out.error {
        Some(err) => Err(sink_failure(err)),
        // A Display impl gave up on its own; whatever it produced was sent.
        None => Ok(()),
    }
}

struct SinkWriter<'a, S: VgaSink> {
    sink: &'a mut S,
    error: Option<S::Error>,
}

impl<S: VgaSink> fmt::Write for SinkWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_bytes(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

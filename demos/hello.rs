use std::io::{stdout, BufWriter};

use vgaterm::{Color, DisplayMode, IoSink, VgaError, VgaTerminal};

fn main() -> Result<(), VgaError<std::io::Error>> {
    // On real hardware this would be the serial port the TermDriver listens
    // on; standard output works just as well with any ANSI terminal.
    let mut term = VgaTerminal::init(IoSink::new(BufWriter::new(stdout().lock())))?;
    term.set_display_mode(DisplayMode::Landscape80x25)?;
    term.set_cursor_visible(false)?;

    term.set_cursor_position(1, 1)?;
    term.set_color(Color::Yellow, Color::Blue)?;
    term.write_text(" TermDriver VGA ")?;

    term.render_character_set(2, 3)?;
    term.render_color_palette(60, 3)?;

    term.set_bold_foreground(false)?;
    term.set_color(Color::White, Color::Black)?;
    term.set_cursor_position(1, 21)?;
    term.set_cursor_visible(true)?;
    term.write_text("\r\n")?;

    term.sink_mut().flush().map_err(VgaError::SinkWriteFailure)
}

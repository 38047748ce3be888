//! Test screens for checking a terminal by eye.

use crate::{Color, VgaError, VgaSink, VgaTerminal};

const ESC: u8 = 0x1b;

/// Glyphs per column of the character set table, one per low nibble.
const GLYPHS_PER_COLUMN: u16 = 16;

/// Screen cells taken by each column of the table: a glyph and two spaces,
/// which lines up with the `"XX "` column headings.
const GLYPH_COLUMN_WIDTH: u16 = 3;

impl<S: VgaSink> VgaTerminal<S> {
    /// Draws all 256 byte values as a 16 by 16 table, green on black, with
    /// its top-left corner at `column`, `row`.
    ///
    /// Column headings give the high nibble and row headings the low
    /// nibble, both in hex. Byte 0x1B is left out, since sending it would
    /// start an escape sequence instead of drawing a glyph.
    pub fn render_character_set(&mut self, column: u16, row: u16) -> Result<(), VgaError<S::Error>> {
        self.set_cursor_position(column.saturating_add(3), row)?;
        self.set_color(Color::Green, Color::Black)?;
        self.set_bold_foreground(false)?;
        for high in (0x00..=0xf0_u16).step_by(0x10) {
            write!(self, "{high:02X} ")?;
        }

        for low in 0..GLYPHS_PER_COLUMN {
            self.set_cursor_position(column, row.saturating_add(low + 1))?;
            write!(self, "+{low:X} ")?;
        }

        self.set_bold_foreground(true)?;
        let left = column.saturating_add(4);
        let top = row.saturating_add(1);
        for code in 0..=u8::MAX {
            if code == ESC {
                continue;
            }
            let code_index = u16::from(code);
            let x = left.saturating_add(code_index / GLYPHS_PER_COLUMN * GLYPH_COLUMN_WIDTH);
            let y = top.saturating_add(code_index % GLYPHS_PER_COLUMN);
            self.set_cursor_position(x, y)?;
            self.set_color(Color::Green, Color::Black)?;
            self.write_bytes(&[code])?;
        }
        Ok(())
    }

    /// Draws one row per shade, sixteen in all, starting at `column`, `row`.
    ///
    /// The first eight rows are the plain background colors with bright
    /// white text; the last eight are the same colors brightened, with
    /// black text. Each row is labelled with its background SGR code.
    pub fn render_color_palette(&mut self, column: u16, row: u16) -> Result<(), VgaError<S::Error>> {
        for shade in 0..16_u8 {
            let background = Color::ALL[usize::from(shade % 8)];
            let foreground = if shade < 8 {
                self.set_bold_background(false)?;
                self.set_bold_foreground(true)?;
                Color::White
            } else {
                self.set_bold_foreground(false)?;
                self.set_bold_background(true)?;
                Color::Black
            };

            self.set_cursor_position(column, row.saturating_add(u16::from(shade)))?;
            self.set_color(foreground, background)?;
            write!(self, " {:3} ", background.background_code())?;
        }
        Ok(())
    }
}

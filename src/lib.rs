//! Control sequence generator for TermDriver-style VGA terminals.
//!
//! A TermDriver listens on a serial line, 115200 baud with 8 data bits and
//! no parity, and shows what it receives on a VGA monitor. It understands
//! the subset of ANSI control sequences that DOS's `ANSI.SYS` did, plus a
//! few commands of its own for screen geometry and video blanking.
//!
//! This library only produces those sequences; it never reads anything
//! back. [`VgaTerminal`] turns requests like "set the color" or "move the
//! cursor" into bytes, hands them to a [`VgaSink`], and keeps a
//! [`TerminalState`] describing what it has asked the terminal to do.
//!
//! For example, moving to column 5 of row 10 after choosing green text on a
//! black background sends `"\x1b[32;40m"` followed by `"\x1b[10;5H"`:
//!
//! ```rust
//! # use vgaterm::{Color, CursorPosition, VgaTerminal};
//! let mut term = VgaTerminal::init(Vec::<u8>::new())?;
//! term.set_color(Color::Green, Color::Black)?;
//! term.set_cursor_position(5, 10)?;
//! term.write_text("Hello!")?;
//!
//! assert_eq!(term.state().cursor, CursorPosition::new(5, 10));
//! assert_eq!(term.sink(), b"\x1b[2J\x1b[32;40m\x1b[10;5HHello!");
//! # Ok::<(), vgaterm::VgaError<core::convert::Infallible>>(())
//! ```
//!
//! The crate is `no_std` unless the default `std` feature is enabled. The
//! `alloc` feature alone provides the [`VgaSink`] implementation for
//! `Vec<u8>`, and the `tracing` feature reports each command through the
//! [`tracing`](https://docs.rs/tracing) crate.
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod diagnostic;
mod error;
mod sink;
mod state;
mod terminal;

pub use error::VgaError;
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::{sink_fn, VgaSink};
pub use state::{Color, CursorPosition, DisplayMode, TerminalState};
pub use terminal::VgaTerminal;

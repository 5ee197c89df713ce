#![forbid(unsafe_code)]

//! The sequence emitter.
//!
//! [`Emitter`] binds an [`io::Write`] sink and exposes one method per catalog
//! entry. Each method renders its sequence into a stack buffer and hands the
//! finished bytes to the sink in a single `write_all`, so a sequence is never
//! split across writes by this layer.
//!
//! # Design Principles
//!
//! - **Stateless**: no mode tracking, no memoization; the terminal owns state
//! - **One call, one write**: composites are pre-concatenated, except
//!   [`Emitter::clear_screen`], which is two primitives in order
//! - **Errors pass through**: sink failures surface unchanged
//!
//! # Example
//!
//! ```
//! use termseq::Emitter;
//!
//! let mut out = Emitter::new(Vec::new());
//! out.move_cursor(3, 10).unwrap();
//! out.hide_cursor().unwrap();
//! assert_eq!(out.into_inner(), b"\x1b[3;10H\x1b[?25l");
//! ```
//!
//! # Trust Boundary
//!
//! [`Emitter::set_window_title`] and the color setters insert caller text
//! verbatim. Text containing `ESC` or `BEL` ends the sequence early and the
//! remainder is interpreted by the terminal. Never pass untrusted text.

use std::fmt;
use std::io::{self, Write};

use smallvec::SmallVec;
use termseq_core::ColorProfile;

use crate::catalog::{EraseDisplayMode, EraseLineMode, MouseMode, Param, Sequence};

/// Inline capacity covers every integer sequence; text spills to the heap.
type SeqBuf = SmallVec<[u8; 32]>;

/// A substitution value for one template placeholder.
#[derive(Clone, Copy)]
enum Arg<'a> {
    Int(u16),
    Text(&'a dyn fmt::Display),
}

/// `fmt::Write` adapter so `Display` parameters format straight into the
/// sequence buffer.
struct TextSink<'a>(&'a mut SeqBuf);

impl fmt::Write for TextSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

#[inline]
fn write_u16_dec(buf: &mut [u8; 5], mut n: u16) -> &[u8] {
    let mut idx = buf.len();
    loop {
        idx -= 1;
        buf[idx] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    &buf[idx..]
}

/// Render `seq` with `args` substituted in declaration order.
fn render(seq: Sequence, args: &[Arg<'_>], out: &mut SeqBuf) -> io::Result<()> {
    if let Some(bytes) = seq.fixed_bytes() {
        out.extend_from_slice(bytes);
        return Ok(());
    }

    let template = seq.template();
    debug_assert_eq!(
        args.len(),
        template.arity(),
        "wrong argument count for {}",
        seq.name()
    );

    out.extend_from_slice(template.introducer.as_bytes());
    for ((segment, param), arg) in template.segments.iter().zip(template.params).zip(args) {
        out.extend_from_slice(segment.as_bytes());
        match (param, arg) {
            (Param::Int, Arg::Int(n)) => {
                let mut digits = [0u8; 5];
                out.extend_from_slice(write_u16_dec(&mut digits, *n));
            }
            (Param::Text, Arg::Text(text)) => {
                fmt::write(&mut TextSink(out), format_args!("{text}")).map_err(|_| {
                    io::Error::other(format!("{} parameter failed to format", seq.name()))
                })?;
            }
            _ => unreachable!("argument kind mismatch for {}", seq.name()),
        }
    }
    if let Some(tail) = template.segments.get(template.arity()) {
        out.extend_from_slice(tail.as_bytes());
    }
    out.extend_from_slice(template.terminator);
    Ok(())
}

/// Writes control sequences to a sink.
///
/// The emitter owns its sink and the [`ColorProfile`] it was created with,
/// and nothing else. Emitters over distinct sinks are fully independent.
/// Emitters sharing a sink (e.g. through `&File`) get exactly the sink's own
/// interleaving guarantees.
#[derive(Debug)]
pub struct Emitter<W> {
    sink: W,
    profile: ColorProfile,
}

impl Emitter<io::Stdout> {
    /// Emitter over process stdout with a profile detected from the
    /// environment.
    ///
    /// Resolution happens once, here. Pass the returned emitter to whatever
    /// needs it rather than calling this repeatedly.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_profile(io::stdout(), ColorProfile::detect())
    }
}

impl<W: Write> Emitter<W> {
    /// Bind `sink` with the 16-color [`ColorProfile::Ansi`] profile.
    pub fn new(sink: W) -> Self {
        Self::with_profile(sink, ColorProfile::Ansi)
    }

    /// Bind `sink` with an explicit profile.
    pub fn with_profile(sink: W, profile: ColorProfile) -> Self {
        termseq_core::debug!(profile = %profile, "emitter bound");
        Self { sink, profile }
    }

    /// Color profile of the destination.
    #[inline]
    pub fn profile(&self) -> ColorProfile {
        self.profile
    }

    /// Get a reference to the sink.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Get a mutable reference to the sink.
    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consume the emitter and return the sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, seq: Sequence, args: &[Arg<'_>]) -> io::Result<()> {
        if let Some(bytes) = seq.fixed_bytes() {
            termseq_core::trace!(sequence = seq.name(), bytes = bytes.len(), "emit");
            return self.sink.write_all(bytes);
        }
        let mut buf = SeqBuf::new();
        render(seq, args, &mut buf)?;
        termseq_core::trace!(sequence = seq.name(), bytes = buf.len(), "emit");
        self.sink.write_all(&buf)
    }

    // =========================================================================
    // Style & Session
    // =========================================================================

    /// Reset all text attributes: `CSI 0 m`
    pub fn reset(&mut self) -> io::Result<()> {
        self.emit(Sequence::Reset, &[])
    }

    /// Set the default foreground color: `OSC 10 ; color BEL`
    ///
    /// `color` is written with its `Display` impl, unescaped.
    pub fn set_foreground_color(&mut self, color: impl fmt::Display) -> io::Result<()> {
        self.emit(Sequence::SetForegroundColor, &[Arg::Text(&color)])
    }

    /// Set the default background color: `OSC 11 ; color BEL`
    pub fn set_background_color(&mut self, color: impl fmt::Display) -> io::Result<()> {
        self.emit(Sequence::SetBackgroundColor, &[Arg::Text(&color)])
    }

    /// Set the cursor color: `OSC 12 ; color BEL`
    pub fn set_cursor_color(&mut self, color: impl fmt::Display) -> io::Result<()> {
        self.emit(Sequence::SetCursorColor, &[Arg::Text(&color)])
    }

    /// Set the window title: `OSC 2 ; title BEL`
    ///
    /// No length limit and no escaping.
    pub fn set_window_title(&mut self, title: &str) -> io::Result<()> {
        self.emit(Sequence::SetWindowTitle, &[Arg::Text(&title)])
    }

    // =========================================================================
    // Screen Buffers
    // =========================================================================

    /// Restore a previously saved screen: `CSI ? 47 l`
    pub fn restore_screen(&mut self) -> io::Result<()> {
        self.emit(Sequence::RestoreScreen, &[])
    }

    /// Save the screen: `CSI ? 47 h`
    pub fn save_screen(&mut self) -> io::Result<()> {
        self.emit(Sequence::SaveScreen, &[])
    }

    /// Switch to the alternate screen buffer: `CSI ? 1049 h`
    ///
    /// The former view comes back with [`exit_alt_screen`](Self::exit_alt_screen).
    pub fn alt_screen(&mut self) -> io::Result<()> {
        self.emit(Sequence::AltScreen, &[])
    }

    /// Leave the alternate screen buffer: `CSI ? 1049 l`
    pub fn exit_alt_screen(&mut self) -> io::Result<()> {
        self.emit(Sequence::ExitAltScreen, &[])
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// CUP (Cursor Position): `CSI row ; col H`
    ///
    /// Both coordinates are 1-based and written as given.
    pub fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.emit(Sequence::CursorPosition, &[Arg::Int(row), Arg::Int(col)])
    }

    /// Hide the cursor: `CSI ? 25 l`
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.emit(Sequence::HideCursor, &[])
    }

    /// Show the cursor: `CSI ? 25 h`
    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.emit(Sequence::ShowCursor, &[])
    }

    /// Save the cursor position: `CSI s`
    pub fn save_cursor_position(&mut self) -> io::Result<()> {
        self.emit(Sequence::SaveCursorPosition, &[])
    }

    /// Restore the saved cursor position: `CSI u`
    pub fn restore_cursor_position(&mut self) -> io::Result<()> {
        self.emit(Sequence::RestoreCursorPosition, &[])
    }

    /// Move cursor up: `CSI n A`
    ///
    /// `n = 0` is written literally; most terminals treat it as 1.
    pub fn cursor_up(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::CursorUp, &[Arg::Int(n)])
    }

    /// Move cursor down: `CSI n B`
    pub fn cursor_down(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::CursorDown, &[Arg::Int(n)])
    }

    /// Move cursor forward (right): `CSI n C`
    pub fn cursor_forward(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::CursorForward, &[Arg::Int(n)])
    }

    /// Move cursor back (left): `CSI n D`
    pub fn cursor_back(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::CursorBack, &[Arg::Int(n)])
    }

    /// Move down `n` lines to column 1: `CSI n E`
    pub fn cursor_next_line(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::CursorNextLine, &[Arg::Int(n)])
    }

    /// Move up `n` lines to column 1: `CSI n F`
    pub fn cursor_prev_line(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::CursorPrevLine, &[Arg::Int(n)])
    }

    /// CHA (Cursor Horizontal Absolute): `CSI col G`, 1-based.
    pub fn cursor_horizontal(&mut self, col: u16) -> io::Result<()> {
        self.emit(Sequence::CursorHorizontal, &[Arg::Int(col)])
    }

    // =========================================================================
    // Erase Operations
    // =========================================================================

    /// ED (Erase Display): `CSI n J`
    ///
    /// The mode digit is always written, including `0`.
    pub fn erase_display(&mut self, mode: EraseDisplayMode) -> io::Result<()> {
        self.emit(Sequence::EraseDisplay, &[Arg::Int(mode.code())])
    }

    /// EL (Erase Line): `CSI n K`
    pub fn erase_line(&mut self, mode: EraseLineMode) -> io::Result<()> {
        self.emit(Sequence::EraseLine, &[Arg::Int(mode.code())])
    }

    /// Clear the visible screen and home the cursor.
    ///
    /// Writes `CSI 2 J`, then `CSI 1 ; 1 H`, as two separate writes. If the
    /// first write fails the second is not attempted.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.erase_display(EraseDisplayMode::All)?;
        self.move_cursor(1, 1)
    }

    /// Clear the current line: `CSI 2 K`
    pub fn clear_line(&mut self) -> io::Result<()> {
        self.emit(Sequence::EraseEntireLine, &[])
    }

    /// Clear from start of line to cursor: `CSI 1 K`
    pub fn clear_line_left(&mut self) -> io::Result<()> {
        self.emit(Sequence::EraseLineLeft, &[])
    }

    /// Clear from cursor to end of line: `CSI 0 K`
    pub fn clear_line_right(&mut self) -> io::Result<()> {
        self.emit(Sequence::EraseLineRight, &[])
    }

    /// Clear the current line and the `n` lines above it, leaving the cursor
    /// `n` lines up.
    ///
    /// Emits `CSI 2K` followed by `n` repetitions of `CSI 1A CSI 2K`, all in
    /// one write.
    pub fn clear_lines(&mut self, n: u16) -> io::Result<()> {
        let erase = [Arg::Int(EraseLineMode::All.code())];
        let mut step = SeqBuf::new();
        render(Sequence::CursorUp, &[Arg::Int(1)], &mut step)?;
        render(Sequence::EraseLine, &erase, &mut step)?;

        let mut buf = SeqBuf::new();
        render(Sequence::EraseLine, &erase, &mut buf)?;
        buf.reserve(step.len() * usize::from(n));
        for _ in 0..n {
            buf.extend_from_slice(&step);
        }
        termseq_core::trace!(sequence = "clear_lines", lines = n, bytes = buf.len(), "emit");
        self.sink.write_all(&buf)
    }

    // =========================================================================
    // Scroll Region & Lines
    // =========================================================================

    /// DECSTBM (Set Top and Bottom Margins): `CSI top ; bottom r`
    pub fn change_scrolling_region(&mut self, top: u16, bottom: u16) -> io::Result<()> {
        self.emit(
            Sequence::ChangeScrollingRegion,
            &[Arg::Int(top), Arg::Int(bottom)],
        )
    }

    /// Insert `n` blank lines at the cursor, pushing lines below down:
    /// `CSI n L`
    pub fn insert_lines(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::InsertLine, &[Arg::Int(n)])
    }

    /// Delete `n` lines at the cursor, pulling lines in the scroll region up:
    /// `CSI n M`
    pub fn delete_lines(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::DeleteLine, &[Arg::Int(n)])
    }

    /// Scroll the region up `n` lines: `CSI n S`
    pub fn scroll_up(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::ScrollUp, &[Arg::Int(n)])
    }

    /// Scroll the region down `n` lines: `CSI n T`
    pub fn scroll_down(&mut self, n: u16) -> io::Result<()> {
        self.emit(Sequence::ScrollDown, &[Arg::Int(n)])
    }

    // =========================================================================
    // Mouse Tracking
    // =========================================================================

    /// Enable one mouse tracking mode. Other modes are left untouched.
    pub fn enable_mouse_mode(&mut self, mode: MouseMode) -> io::Result<()> {
        self.emit(mode.enable_sequence(), &[])
    }

    /// Disable one mouse tracking mode.
    pub fn disable_mouse_mode(&mut self, mode: MouseMode) -> io::Result<()> {
        self.emit(mode.disable_sequence(), &[])
    }

    /// Enable X10 mouse mode, button presses only: `CSI ? 9 h`
    pub fn enable_mouse_press(&mut self) -> io::Result<()> {
        self.enable_mouse_mode(MouseMode::Press)
    }

    /// Disable X10 mouse mode: `CSI ? 9 l`
    pub fn disable_mouse_press(&mut self) -> io::Result<()> {
        self.disable_mouse_mode(MouseMode::Press)
    }

    /// Enable normal mouse tracking: `CSI ? 1000 h`
    pub fn enable_mouse(&mut self) -> io::Result<()> {
        self.enable_mouse_mode(MouseMode::Normal)
    }

    /// Disable normal mouse tracking: `CSI ? 1000 l`
    pub fn disable_mouse(&mut self) -> io::Result<()> {
        self.disable_mouse_mode(MouseMode::Normal)
    }

    /// Enable highlight mouse tracking: `CSI ? 1001 h`
    pub fn enable_mouse_hilite(&mut self) -> io::Result<()> {
        self.enable_mouse_mode(MouseMode::Hilite)
    }

    /// Disable highlight mouse tracking: `CSI ? 1001 l`
    pub fn disable_mouse_hilite(&mut self) -> io::Result<()> {
        self.disable_mouse_mode(MouseMode::Hilite)
    }

    /// Enable cell-motion mouse tracking: `CSI ? 1002 h`
    pub fn enable_mouse_cell_motion(&mut self) -> io::Result<()> {
        self.enable_mouse_mode(MouseMode::CellMotion)
    }

    /// Disable cell-motion mouse tracking: `CSI ? 1002 l`
    pub fn disable_mouse_cell_motion(&mut self) -> io::Result<()> {
        self.disable_mouse_mode(MouseMode::CellMotion)
    }

    /// Enable all-motion mouse tracking: `CSI ? 1003 h`
    pub fn enable_mouse_all_motion(&mut self) -> io::Result<()> {
        self.enable_mouse_mode(MouseMode::AllMotion)
    }

    /// Disable all-motion mouse tracking: `CSI ? 1003 l`
    pub fn disable_mouse_all_motion(&mut self) -> io::Result<()> {
        self.disable_mouse_mode(MouseMode::AllMotion)
    }
}

// =============================================================================
// Tests
// =============================================================================

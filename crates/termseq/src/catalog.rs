#![forbid(unsafe_code)]

//! The sequence catalog: every control sequence termseq can emit.
//!
//! This module is pure data. Each [`Sequence`] maps to a [`Template`] through a
//! total `const` match; there is no runtime registration, so no operation
//! exists outside this table. Zero-parameter entries additionally carry their
//! complete precomputed bytes (see [`Sequence::fixed_bytes`]).
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ 0 m` | SGR reset |
//! | CSI | `ESC [ n A/B/C/D` | Cursor up/down/forward/back |
//! | CSI | `ESC [ n E/F` | Cursor next/previous line |
//! | CSI | `ESC [ col G` | CHA (Cursor Horizontal Absolute) |
//! | CSI | `ESC [ row ; col H` | CUP (Cursor Position, 1-indexed) |
//! | CSI | `ESC [ n J` | ED (Erase Display) |
//! | CSI | `ESC [ n K` | EL (Erase Line) |
//! | CSI | `ESC [ n S/T` | Scroll up/down |
//! | CSI | `ESC [ s` / `ESC [ u` | Save/restore cursor position |
//! | CSI | `ESC [ top ; bottom r` | DECSTBM (Set Scroll Region) |
//! | CSI | `ESC [ n L/M` | Insert/delete lines |
//! | CSI | `ESC [ ? 9/1000/1001/1002/1003 h/l` | Mouse tracking modes |
//! | CSI | `ESC [ ? 47 h/l` | Save/restore screen |
//! | CSI | `ESC [ ? 1049 h/l` | Alternate screen |
//! | CSI | `ESC [ ? 25 h/l` | Cursor visibility |
//! | OSC | `ESC ] 2 ; title BEL` | Window title |
//! | OSC | `ESC ] 10/11/12 ; color BEL` | Foreground/background/cursor color |

/// Escape byte.
pub const ESC: u8 = 0x1b;

/// Bell byte, terminates OSC sequences.
pub const BEL: u8 = 0x07;

/// Control Sequence Introducer: `ESC [`
pub const CSI: &[u8] = b"\x1b[";

/// Operating System Command: `ESC ]`
pub const OSC: &[u8] = b"\x1b]";

/// SGR reset: `CSI 0 m`
pub const RESET: &[u8] = b"\x1b[0m";

/// Erase from cursor to end of line: `CSI 0 K`
pub const ERASE_LINE_RIGHT: &[u8] = b"\x1b[0K";

/// Erase from start of line to cursor: `CSI 1 K`
pub const ERASE_LINE_LEFT: &[u8] = b"\x1b[1K";

/// Erase entire line: `CSI 2 K`
pub const ERASE_ENTIRE_LINE: &[u8] = b"\x1b[2K";

/// Save cursor position: `CSI s`
pub const SAVE_CURSOR_POSITION: &[u8] = b"\x1b[s";

/// Restore cursor position: `CSI u`
pub const RESTORE_CURSOR_POSITION: &[u8] = b"\x1b[u";

/// X10 mouse, press only: `CSI ? 9 h`
pub const ENABLE_MOUSE_PRESS: &[u8] = b"\x1b[?9h";
/// `CSI ? 9 l`
pub const DISABLE_MOUSE_PRESS: &[u8] = b"\x1b[?9l";

/// Normal tracking, press/release/wheel: `CSI ? 1000 h`
pub const ENABLE_MOUSE: &[u8] = b"\x1b[?1000h";
/// `CSI ? 1000 l`
pub const DISABLE_MOUSE: &[u8] = b"\x1b[?1000l";

/// Highlight tracking: `CSI ? 1001 h`
pub const ENABLE_MOUSE_HILITE: &[u8] = b"\x1b[?1001h";
/// `CSI ? 1001 l`
pub const DISABLE_MOUSE_HILITE: &[u8] = b"\x1b[?1001l";

/// Cell motion, motion reported only while a button is held: `CSI ? 1002 h`
pub const ENABLE_MOUSE_CELL_MOTION: &[u8] = b"\x1b[?1002h";
/// `CSI ? 1002 l`
pub const DISABLE_MOUSE_CELL_MOTION: &[u8] = b"\x1b[?1002l";

/// All motion: `CSI ? 1003 h`
pub const ENABLE_MOUSE_ALL_MOTION: &[u8] = b"\x1b[?1003h";
/// `CSI ? 1003 l`
pub const DISABLE_MOUSE_ALL_MOTION: &[u8] = b"\x1b[?1003l";

/// Save screen: `CSI ? 47 h`
pub const SAVE_SCREEN: &[u8] = b"\x1b[?47h";

/// Restore screen: `CSI ? 47 l`
pub const RESTORE_SCREEN: &[u8] = b"\x1b[?47l";

/// Enter alternate screen: `CSI ? 1049 h`
pub const ALT_SCREEN_ENTER: &[u8] = b"\x1b[?1049h";

/// Leave alternate screen: `CSI ? 1049 l`
pub const ALT_SCREEN_LEAVE: &[u8] = b"\x1b[?1049l";

/// Show cursor: `CSI ? 25 h`
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";

/// Hide cursor: `CSI ? 25 l`
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";

/// Prefix written before a template's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Introducer {
    /// `ESC [`
    Csi,
    /// `ESC ]`
    Osc,
    /// No prefix.
    Bare,
}

impl Introducer {
    /// Bytes of the introducer.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Csi => CSI,
            Self::Osc => OSC,
            Self::Bare => b"",
        }
    }
}

/// Kind of a template placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Unsigned decimal integer, no padding.
    Int,
    /// Text inserted verbatim.
    Text,
}

/// A sequence template.
///
/// `segments` holds the literal text around the placeholders, so
/// `segments.len() == params.len() + 1` and the rendered body is
/// `segments[0] params[0] segments[1] ... segments[n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Prefix written first.
    pub introducer: Introducer,
    /// Literal text between placeholders.
    pub segments: &'static [&'static str],
    /// Placeholder kinds in substitution order.
    pub params: &'static [Param],
    /// Bytes written last. `BEL` for OSC, empty for CSI.
    pub terminator: &'static [u8],
}

const NO_PARAMS: &[Param] = &[];
const INT: &[Param] = &[Param::Int];
const INT_INT: &[Param] = &[Param::Int, Param::Int];
const TEXT: &[Param] = &[Param::Text];
const BEL_TERMINATOR: &[u8] = &[BEL];

impl Template {
    const fn csi(segments: &'static [&'static str], params: &'static [Param]) -> Self {
        Self {
            introducer: Introducer::Csi,
            segments,
            params,
            terminator: b"",
        }
    }

    const fn osc(segments: &'static [&'static str], params: &'static [Param]) -> Self {
        Self {
            introducer: Introducer::Osc,
            segments,
            params,
            terminator: BEL_TERMINATOR,
        }
    }

    /// Number of placeholders.
    #[must_use]
    #[inline]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    /// Human-readable pattern with `{}` for each placeholder, e.g. `{};{}H`.
    #[must_use]
    pub fn pattern(&self) -> String {
        self.segments.join("{}")
    }
}

/// Every operation in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sequence {
    Reset,
    CursorUp,
    CursorDown,
    CursorForward,
    CursorBack,
    CursorNextLine,
    CursorPrevLine,
    CursorHorizontal,
    CursorPosition,
    EraseDisplay,
    EraseLine,
    EraseLineRight,
    EraseLineLeft,
    EraseEntireLine,
    ScrollUp,
    ScrollDown,
    SaveCursorPosition,
    RestoreCursorPosition,
    ChangeScrollingRegion,
    InsertLine,
    DeleteLine,
    EnableMousePress,
    DisableMousePress,
    EnableMouse,
    DisableMouse,
    EnableMouseHilite,
    DisableMouseHilite,
    EnableMouseCellMotion,
    DisableMouseCellMotion,
    EnableMouseAllMotion,
    DisableMouseAllMotion,
    SaveScreen,
    RestoreScreen,
    AltScreen,
    ExitAltScreen,
    ShowCursor,
    HideCursor,
    SetWindowTitle,
    SetForegroundColor,
    SetBackgroundColor,
    SetCursorColor,
}

impl Sequence {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Self; 41] = [
        Self::Reset,
        Self::CursorUp,
        Self::CursorDown,
        Self::CursorForward,
        Self::CursorBack,
        Self::CursorNextLine,
        Self::CursorPrevLine,
        Self::CursorHorizontal,
        Self::CursorPosition,
        Self::EraseDisplay,
        Self::EraseLine,
        Self::EraseLineRight,
        Self::EraseLineLeft,
        Self::EraseEntireLine,
        Self::ScrollUp,
        Self::ScrollDown,
        Self::SaveCursorPosition,
        Self::RestoreCursorPosition,
        Self::ChangeScrollingRegion,
        Self::InsertLine,
        Self::DeleteLine,
        Self::EnableMousePress,
        Self::DisableMousePress,
        Self::EnableMouse,
        Self::DisableMouse,
        Self::EnableMouseHilite,
        Self::DisableMouseHilite,
        Self::EnableMouseCellMotion,
        Self::DisableMouseCellMotion,
        Self::EnableMouseAllMotion,
        Self::DisableMouseAllMotion,
        Self::SaveScreen,
        Self::RestoreScreen,
        Self::AltScreen,
        Self::ExitAltScreen,
        Self::ShowCursor,
        Self::HideCursor,
        Self::SetWindowTitle,
        Self::SetForegroundColor,
        Self::SetBackgroundColor,
        Self::SetCursorColor,
    ];

    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::CursorUp => "cursor_up",
            Self::CursorDown => "cursor_down",
            Self::CursorForward => "cursor_forward",
            Self::CursorBack => "cursor_back",
            Self::CursorNextLine => "cursor_next_line",
            Self::CursorPrevLine => "cursor_prev_line",
            Self::CursorHorizontal => "cursor_horizontal",
            Self::CursorPosition => "cursor_position",
            Self::EraseDisplay => "erase_display",
            Self::EraseLine => "erase_line",
            Self::EraseLineRight => "erase_line_right",
            Self::EraseLineLeft => "erase_line_left",
            Self::EraseEntireLine => "erase_entire_line",
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",
            Self::SaveCursorPosition => "save_cursor_position",
            Self::RestoreCursorPosition => "restore_cursor_position",
            Self::ChangeScrollingRegion => "change_scrolling_region",
            Self::InsertLine => "insert_line",
            Self::DeleteLine => "delete_line",
            Self::EnableMousePress => "enable_mouse_press",
            Self::DisableMousePress => "disable_mouse_press",
            Self::EnableMouse => "enable_mouse",
            Self::DisableMouse => "disable_mouse",
            Self::EnableMouseHilite => "enable_mouse_hilite",
            Self::DisableMouseHilite => "disable_mouse_hilite",
            Self::EnableMouseCellMotion => "enable_mouse_cell_motion",
            Self::DisableMouseCellMotion => "disable_mouse_cell_motion",
            Self::EnableMouseAllMotion => "enable_mouse_all_motion",
            Self::DisableMouseAllMotion => "disable_mouse_all_motion",
            Self::SaveScreen => "save_screen",
            Self::RestoreScreen => "restore_screen",
            Self::AltScreen => "alt_screen",
            Self::ExitAltScreen => "exit_alt_screen",
            Self::ShowCursor => "show_cursor",
            Self::HideCursor => "hide_cursor",
            Self::SetWindowTitle => "set_window_title",
            Self::SetForegroundColor => "set_foreground_color",
            Self::SetBackgroundColor => "set_background_color",
            Self::SetCursorColor => "set_cursor_color",
        }
    }

    /// Template for this entry.
    #[must_use]
    pub const fn template(self) -> Template {
        match self {
            Self::Reset => Template::csi(&["0m"], NO_PARAMS),
            Self::CursorUp => Template::csi(&["", "A"], INT),
            Self::CursorDown => Template::csi(&["", "B"], INT),
            Self::CursorForward => Template::csi(&["", "C"], INT),
            Self::CursorBack => Template::csi(&["", "D"], INT),
            Self::CursorNextLine => Template::csi(&["", "E"], INT),
            Self::CursorPrevLine => Template::csi(&["", "F"], INT),
            Self::CursorHorizontal => Template::csi(&["", "G"], INT),
            Self::CursorPosition => Template::csi(&["", ";", "H"], INT_INT),
            Self::EraseDisplay => Template::csi(&["", "J"], INT),
            Self::EraseLine => Template::csi(&["", "K"], INT),
            Self::EraseLineRight => Template::csi(&["0K"], NO_PARAMS),
            Self::EraseLineLeft => Template::csi(&["1K"], NO_PARAMS),
            Self::EraseEntireLine => Template::csi(&["2K"], NO_PARAMS),
            Self::ScrollUp => Template::csi(&["", "S"], INT),
            Self::ScrollDown => Template::csi(&["", "T"], INT),
            Self::SaveCursorPosition => Template::csi(&["s"], NO_PARAMS),
            Self::RestoreCursorPosition => Template::csi(&["u"], NO_PARAMS),
            Self::ChangeScrollingRegion => Template::csi(&["", ";", "r"], INT_INT),
            Self::InsertLine => Template::csi(&["", "L"], INT),
            Self::DeleteLine => Template::csi(&["", "M"], INT),
            Self::EnableMousePress => Template::csi(&["?9h"], NO_PARAMS),
            Self::DisableMousePress => Template::csi(&["?9l"], NO_PARAMS),
            Self::EnableMouse => Template::csi(&["?1000h"], NO_PARAMS),
            Self::DisableMouse => Template::csi(&["?1000l"], NO_PARAMS),
            Self::EnableMouseHilite => Template::csi(&["?1001h"], NO_PARAMS),
            Self::DisableMouseHilite => Template::csi(&["?1001l"], NO_PARAMS),
            Self::EnableMouseCellMotion => Template::csi(&["?1002h"], NO_PARAMS),
            Self::DisableMouseCellMotion => Template::csi(&["?1002l"], NO_PARAMS),
            Self::EnableMouseAllMotion => Template::csi(&["?1003h"], NO_PARAMS),
            Self::DisableMouseAllMotion => Template::csi(&["?1003l"], NO_PARAMS),
            Self::SaveScreen => Template::csi(&["?47h"], NO_PARAMS),
            Self::RestoreScreen => Template::csi(&["?47l"], NO_PARAMS),
            Self::AltScreen => Template::csi(&["?1049h"], NO_PARAMS),
            Self::ExitAltScreen => Template::csi(&["?1049l"], NO_PARAMS),
            Self::ShowCursor => Template::csi(&["?25h"], NO_PARAMS),
            Self::HideCursor => Template::csi(&["?25l"], NO_PARAMS),
            Self::SetWindowTitle => Template::osc(&["2;", ""], TEXT),
            Self::SetForegroundColor => Template::osc(&["10;", ""], TEXT),
            Self::SetBackgroundColor => Template::osc(&["11;", ""], TEXT),
            Self::SetCursorColor => Template::osc(&["12;", ""], TEXT),
        }
    }

    /// Complete bytes for entries without parameters, `None` otherwise.
    #[must_use]
    pub const fn fixed_bytes(self) -> Option<&'static [u8]> {
        match self {
            Self::Reset => Some(RESET),
            Self::EraseLineRight => Some(ERASE_LINE_RIGHT),
            Self::EraseLineLeft => Some(ERASE_LINE_LEFT),
            Self::EraseEntireLine => Some(ERASE_ENTIRE_LINE),
            Self::SaveCursorPosition => Some(SAVE_CURSOR_POSITION),
            Self::RestoreCursorPosition => Some(RESTORE_CURSOR_POSITION),
            Self::EnableMousePress => Some(ENABLE_MOUSE_PRESS),
            Self::DisableMousePress => Some(DISABLE_MOUSE_PRESS),
            Self::EnableMouse => Some(ENABLE_MOUSE),
            Self::DisableMouse => Some(DISABLE_MOUSE),
            Self::EnableMouseHilite => Some(ENABLE_MOUSE_HILITE),
            Self::DisableMouseHilite => Some(DISABLE_MOUSE_HILITE),
            Self::EnableMouseCellMotion => Some(ENABLE_MOUSE_CELL_MOTION),
            Self::DisableMouseCellMotion => Some(DISABLE_MOUSE_CELL_MOTION),
            Self::EnableMouseAllMotion => Some(ENABLE_MOUSE_ALL_MOTION),
            Self::DisableMouseAllMotion => Some(DISABLE_MOUSE_ALL_MOTION),
            Self::SaveScreen => Some(SAVE_SCREEN),
            Self::RestoreScreen => Some(RESTORE_SCREEN),
            Self::AltScreen => Some(ALT_SCREEN_ENTER),
            Self::ExitAltScreen => Some(ALT_SCREEN_LEAVE),
            Self::ShowCursor => Some(CURSOR_SHOW),
            Self::HideCursor => Some(CURSOR_HIDE),
            Self::CursorUp
            | Self::CursorDown
            | Self::CursorForward
            | Self::CursorBack
            | Self::CursorNextLine
            | Self::CursorPrevLine
            | Self::CursorHorizontal
            | Self::CursorPosition
            | Self::EraseDisplay
            | Self::EraseLine
            | Self::ScrollUp
            | Self::ScrollDown
            | Self::ChangeScrollingRegion
            | Self::InsertLine
            | Self::DeleteLine
            | Self::SetWindowTitle
            | Self::SetForegroundColor
            | Self::SetBackgroundColor
            | Self::SetCursorColor => None,
        }
    }
}

/// ED (Erase Display) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseDisplayMode {
    /// Erase from cursor to end of screen.
    ToEnd = 0,
    /// Erase from start of screen to cursor.
    ToStart = 1,
    /// Erase entire screen.
    All = 2,
    /// Erase scrollback buffer (xterm extension).
    Scrollback = 3,
}

impl EraseDisplayMode {
    /// Numeric parameter written into `CSI n J`.
    #[must_use]
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// EL (Erase Line) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseLineMode {
    /// Erase from cursor to end of line.
    ToEnd = 0,
    /// Erase from start of line to cursor.
    ToStart = 1,
    /// Erase entire line.
    All = 2,
}

impl EraseLineMode {
    /// Numeric parameter written into `CSI n K`.
    #[must_use]
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Mouse tracking modes.
///
/// Terminals treat these as independent private modes. Enabling one does not
/// disable another; keeping them consistent is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseMode {
    /// X10 compatibility: button presses only (mode 9).
    Press,
    /// Normal tracking: press, release, wheel (mode 1000).
    Normal,
    /// Highlight tracking (mode 1001).
    Hilite,
    /// Cell motion: press, release, motion while pressed, wheel (mode 1002).
    CellMotion,
    /// All motion: press, release, any motion, wheel (mode 1003).
    AllMotion,
}

impl MouseMode {
    /// All modes, in private-mode number order.
    pub const ALL: [Self; 5] = [
        Self::Press,
        Self::Normal,
        Self::Hilite,
        Self::CellMotion,
        Self::AllMotion,
    ];

    /// Catalog entry that enables this mode.
    #[must_use]
    pub const fn enable_sequence(self) -> Sequence {
        match self {
            Self::Press => Sequence::EnableMousePress,
            Self::Normal => Sequence::EnableMouse,
            Self::Hilite => Sequence::EnableMouseHilite,
            Self::CellMotion => Sequence::EnableMouseCellMotion,
            Self::AllMotion => Sequence::EnableMouseAllMotion,
        }
    }

    /// Catalog entry that disables this mode.
    #[must_use]
    pub const fn disable_sequence(self) -> Sequence {
        match self {
            Self::Press => Sequence::DisableMousePress,
            Self::Normal => Sequence::DisableMouse,
            Self::Hilite => Sequence::DisableMouseHilite,
            Self::CellMotion => Sequence::DisableMouseCellMotion,
            Self::AllMotion => Sequence::DisableMouseAllMotion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn segments_bracket_every_placeholder() {
        for seq in Sequence::ALL {
            let t = seq.template();
            assert_eq!(
                t.segments.len(),
                t.arity() + 1,
                "{} has mismatched segments",
                seq.name()
            );
        }
    }

    #[test]
    fn fixed_bytes_exist_exactly_for_zero_arity() {
        for seq in Sequence::ALL {
            assert_eq!(
                seq.fixed_bytes().is_some(),
                seq.template().arity() == 0,
                "{}",
                seq.name()
            );
        }
    }

    #[test]
    fn fixed_bytes_match_their_template() {
        for seq in Sequence::ALL {
            let Some(bytes) = seq.fixed_bytes() else {
                continue;
            };
            let t = seq.template();
            let mut expected = t.introducer.as_bytes().to_vec();
            expected.extend_from_slice(t.segments[0].as_bytes());
            expected.extend_from_slice(t.terminator);
            assert_eq!(bytes, expected.as_slice(), "{}", seq.name());
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Sequence::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Sequence::ALL.len());
    }

    #[test]
    fn all_lists_each_entry_once() {
        let unique: HashSet<_> = Sequence::ALL.iter().collect();
        assert_eq!(unique.len(), Sequence::ALL.len());
    }

    #[test]
    fn osc_entries_are_bel_terminated_and_csi_are_not() {
        for seq in Sequence::ALL {
            let t = seq.template();
            match t.introducer {
                Introducer::Osc => assert_eq!(t.terminator, &[BEL], "{}", seq.name()),
                Introducer::Csi => assert!(t.terminator.is_empty(), "{}", seq.name()),
                Introducer::Bare => {}
            }
        }
    }

    #[test]
    fn csi_entries_end_in_a_final_byte() {
        for seq in Sequence::ALL {
            let t = seq.template();
            if t.introducer != Introducer::Csi {
                continue;
            }
            let last = t.segments.last().and_then(|s| s.bytes().last());
            assert!(
                matches!(last, Some(0x40..=0x7e)),
                "{} lacks a CSI final byte",
                seq.name()
            );
        }
    }

    #[test]
    fn all_fixed_sequences_are_ascii() {
        for seq in Sequence::ALL {
            if let Some(bytes) = seq.fixed_bytes() {
                for &byte in bytes {
                    assert!(byte < 128, "Non-ASCII byte {byte:#x} in {}", seq.name());
                }
            }
        }
    }

    #[test]
    fn pattern_renders_placeholders() {
        assert_eq!(Sequence::CursorPosition.template().pattern(), "{};{}H");
        assert_eq!(Sequence::SetWindowTitle.template().pattern(), "2;{}");
        assert_eq!(Sequence::HideCursor.template().pattern(), "?25l");
    }

    #[test]
    fn introducer_bytes() {
        assert_eq!(Introducer::Csi.as_bytes(), b"\x1b[");
        assert_eq!(Introducer::Osc.as_bytes(), b"\x1b]");
        assert_eq!(Introducer::Bare.as_bytes(), b"");
    }

    #[test]
    fn erase_mode_codes() {
        assert_eq!(EraseDisplayMode::ToEnd.code(), 0);
        assert_eq!(EraseDisplayMode::All.code(), 2);
        assert_eq!(EraseDisplayMode::Scrollback.code(), 3);
        assert_eq!(EraseLineMode::ToStart.code(), 1);
        assert_eq!(EraseLineMode::All.code(), 2);
    }

    #[test]
    fn mouse_modes_map_to_distinct_pairs() {
        let mut seen = HashSet::new();
        for mode in MouseMode::ALL {
            assert!(seen.insert(mode.enable_sequence()));
            assert!(seen.insert(mode.disable_sequence()));
        }
        assert_eq!(seen.len(), 10);
    }
}

#![forbid(unsafe_code)]

//! Color profile model with environment detection.
//!
//! A [`ColorProfile`] names the color depth a destination can render. The
//! emitter only carries it: colors reach the emitter already resolved, and
//! higher layers consult the profile when deciding how to resolve them.
//!
//! # Detection Strategy
//!
//! [`ColorProfile::detect`] reads:
//! - `NO_COLOR`: de-facto standard for disabling color, always wins
//! - `CLICOLOR_FORCE`: forces at least 16 colors on a dumb or unset `TERM`
//! - `COLORTERM`: truecolor/24bit support
//! - `TERM`: terminal type (kitty, xterm-256color, dumb, ...)
//! - `TERM_PROGRAM`: specific terminal (iTerm.app, WezTerm, Ghostty, ...)
//! - `KITTY_WINDOW_ID`, `WT_SESSION`: kitty and Windows Terminal
//!
//! Given the same environment, detection always yields the same profile.
//!
//! # Decision Rules
//!
//! ```text
//! IF NO_COLOR THEN Ascii
//! ELSE IF dumb TERM AND NOT CLICOLOR_FORCE THEN Ascii
//! ELSE IF truecolor evidence THEN TrueColor
//! ELSE IF TERM mentions 256 THEN Ansi256
//! ELSE Ansi
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

/// Color depth supported by an output destination.
///
/// Ordered from least to most capable, so `a < b` means `b` can render
/// everything `a` can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColorProfile {
    /// No color at all.
    Ascii,
    /// 16 colors (SGR 30-37 / 90-97).
    #[default]
    Ansi,
    /// 256-color palette.
    Ansi256,
    /// 24-bit RGB.
    TrueColor,
}

/// Terminal programs known to render 24-bit color.
const TRUECOLOR_TERMINALS: &[&str] = &[
    "iTerm.app",
    "WezTerm",
    "Alacritty",
    "Ghostty",
    "kitty",
    "Rio",
    "Hyper",
    "Contour",
    "vscode",
];

#[derive(Debug, Clone, Default)]
struct DetectInputs {
    no_color: bool,
    clicolor_force: bool,
    term: String,
    term_program: String,
    colorterm: String,
    kitty_window_id: bool,
    wt_session: bool,
}

impl DetectInputs {
    fn from_env() -> Self {
        Self {
            no_color: env::var("NO_COLOR").is_ok(),
            clicolor_force: env::var("CLICOLOR_FORCE").is_ok_and(|v| !v.is_empty() && v != "0"),
            term: env::var("TERM").unwrap_or_default(),
            term_program: env::var("TERM_PROGRAM").unwrap_or_default(),
            colorterm: env::var("COLORTERM").unwrap_or_default(),
            kitty_window_id: env::var("KITTY_WINDOW_ID").is_ok(),
            wt_session: env::var("WT_SESSION").is_ok(),
        }
    }
}

impl ColorProfile {
    /// Detect the color profile from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        let profile = Self::detect_from_inputs(&DetectInputs::from_env());
        crate::debug!(profile = %profile, "detected color profile");
        profile
    }

    fn detect_from_inputs(env: &DetectInputs) -> Self {
        if env.no_color {
            return Self::Ascii;
        }

        let term = env.term.as_str();
        let term_program = env.term_program.as_str();
        let colorterm = env.colorterm.to_lowercase();

        // Windows Terminal often omits TERM entirely.
        let is_dumb = term == "dumb" || (term.is_empty() && !env.wt_session);
        if is_dumb && !env.clicolor_force {
            return Self::Ascii;
        }

        let is_kitty = env.kitty_window_id || term.contains("kitty");
        let is_truecolor_terminal = TRUECOLOR_TERMINALS
            .iter()
            .any(|t| term_program.contains(t) || term.contains(&t.to_lowercase()));

        if colorterm.contains("truecolor")
            || colorterm.contains("24bit")
            || is_truecolor_terminal
            || is_kitty
            || env.wt_session
        {
            Self::TrueColor
        } else if term.contains("256") {
            Self::Ansi256
        } else {
            Self::Ansi
        }
    }

    /// Stable name of the profile.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Ansi => "ansi",
            Self::Ansi256 => "ansi256",
            Self::TrueColor => "truecolor",
        }
    }

    /// Whether any color can be rendered.
    #[must_use]
    #[inline]
    pub const fn has_color(&self) -> bool {
        !matches!(self, Self::Ascii)
    }

    /// All profiles, least capable first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ascii, Self::Ansi, Self::Ansi256, Self::TrueColor]
    }
}

/// Error returned when parsing an unknown profile name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorProfileError(String);

impl fmt::Display for ParseColorProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color profile: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorProfileError {}

impl FromStr for ColorProfile {
    type Err = ParseColorProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" | "mono" | "none" => Ok(Self::Ascii),
            "ansi" | "16" => Ok(Self::Ansi),
            "ansi256" | "256" => Ok(Self::Ansi256),
            "truecolor" | "24bit" | "rgb" => Ok(Self::TrueColor),
            _ => Err(ParseColorProfileError(s.to_string())),
        }
    }
}

impl fmt::Display for ColorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

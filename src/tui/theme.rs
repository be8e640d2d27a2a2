// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

const PALETTE_ENV: &str = "WIN96_HELP_PALETTE";

/// Desktop colors: teal desktop, gray windows, navy title bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TuiTheme {
    palette: TuiPalette,
}

impl Default for TuiTheme {
    fn default() -> Self {
        Self {
            palette: TuiPalette::CLASSIC,
        }
    }
}

impl TuiTheme {
    /// Reads `WIN96_HELP_PALETTE` (`desktop,window,title,text,accent`) when set.
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = match env::var(PALETTE_ENV) {
            Ok(value) if value.trim().is_empty() => TuiPalette::CLASSIC,
            Ok(value) => TuiPalette::parse_csv(value.trim()).map_err(|error| {
                ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_owned(),
                    value: format!("{} ({error})", value.trim()),
                }
            })?,
            Err(env::VarError::NotPresent) => TuiPalette::CLASSIC,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_owned(),
                    value: "<non-unicode>".to_owned(),
                });
            }
        };
        Ok(Self { palette })
    }

    pub(crate) fn desktop_style(&self) -> Style {
        Style::default().bg(self.palette.desktop).fg(self.palette.accent)
    }

    pub(crate) fn window_style(&self) -> Style {
        Style::default().bg(self.palette.window).fg(self.palette.text)
    }

    pub(crate) fn title_style(&self, focused: bool) -> Style {
        let bg = if focused { self.palette.title } else { Color::DarkGray };
        Style::default()
            .bg(bg)
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn tab_style(&self, active: bool) -> Style {
        if active {
            self.window_style().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            self.window_style().fg(Color::DarkGray)
        }
    }

    pub(crate) fn heading_style(&self) -> Style {
        self.window_style().fg(self.palette.title).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn code_style(&self) -> Style {
        Style::default().bg(Color::Black).fg(Color::LightGreen)
    }

    pub(crate) fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.palette.title)
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn taskbar_style(&self) -> Style {
        Style::default().bg(self.palette.window).fg(self.palette.text)
    }

    pub(crate) fn taskbar_item_style(&self, selected: bool, focused: bool) -> Style {
        match (selected, focused) {
            (true, true) => self.selection_style(),
            (true, false) => self.taskbar_style().add_modifier(Modifier::BOLD),
            _ => self.taskbar_style(),
        }
    }

    pub(crate) fn error_style(&self) -> Style {
        self.taskbar_style().fg(Color::Red).add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TuiPalette {
    desktop: Color,
    window: Color,
    title: Color,
    text: Color,
    accent: Color,
}

impl TuiPalette {
    const CSV_LEN: usize = 5;

    const CLASSIC: Self = Self {
        desktop: Color::Cyan,
        window: Color::Gray,
        title: Color::Blue,
        text: Color::Black,
        accent: Color::White,
    };

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (desktop,window,title,text,accent), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        Ok(Self {
            desktop: parse_palette_color(parts[0])?,
            window: parse_palette_color(parts[1])?,
            title: parse_palette_color(parts[2])?,
            text: parse_palette_color(parts[3])?,
            accent: parse_palette_color(parts[4])?,
        })
    }
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, `RRGGBB` and xterm-style `rgb:RR/GG/BB` (or 4-digit channels).
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let channels = rest
            .split('/')
            .map(parse_hex_channel)
            .collect::<Result<Vec<_>, _>>()?;
        let [r, g, b] = channels[..] else {
            return Err(format!("invalid rgb: value: {trimmed}"));
        };
        return Ok(Color::Rgb(r, g, b));
    }

    let hex = lower
        .strip_prefix('#')
        .or_else(|| lower.strip_prefix("0x"))
        .unwrap_or(lower.as_str());
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    let invalid = || format!("invalid rgb: component {value}");
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| invalid()),
        4 => u16::from_str_radix(value, 16)
            .map(|parsed| (parsed >> 8) as u8)
            .map_err(|_| invalid()),
        _ => Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)")),
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}

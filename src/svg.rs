//! Renders the calculation outcome as a self-contained SVG card.
//!
//! The layout mirrors the desktop look this tool grew out of: a blue-to-violet
//! gradient backdrop with translucent decorative circles, a white
//! rounded-rectangle card carrying the selected date, and a result strip at
//! the bottom showing the age line in green or the validation message in red.

use crate::age::{Age, AgeError};

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;
const CARD_X: i32 = 60;
const CARD_Y: i32 = 120;
const CARD_RADIUS: i32 = 30;
const SHADOW_OFFSET: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

pub struct ThemeColors {
    pub gradient_top: &'static str,
    pub gradient_bottom: &'static str,
    pub card: &'static str,
    pub title: &'static str,
    pub label: &'static str,
    pub ok: &'static str,
    pub err: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            // The original desktop palette.
            Theme::Light => ThemeColors {
                gradient_top: "#4a90e2",
                gradient_bottom: "#8a2be2",
                card: "#ffffff",
                title: "#ffffff",
                label: "#4a90e2",
                ok: "#009600",
                err: "#ff0000",
            },
            Theme::Dark => ThemeColors {
                gradient_top: "#1f3a5f",
                gradient_bottom: "#3c1361",
                card: "#161b22",
                title: "#c9d1d9",
                label: "#79b8ff",
                ok: "#3fb950",
                err: "#f85149",
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Main SVG generation function. `selection` is the human-readable birth date
/// the user picked, e.g. "15 June 2000".
pub fn generate_svg(selection: &str, outcome: &Result<Age, AgeError>, theme: Theme) -> String {
    let colors = theme.colors();

    let (result_text, result_color) = match outcome {
        Ok(age) => (format!("✨ Your age is: {age} ✨"), colors.ok),
        Err(e) => (e.to_string(), colors.err),
    };

    let card_w = WIDTH - 2 * CARD_X;
    let card_h = HEIGHT - CARD_Y - 180;
    let result_y = HEIGHT - 120;
    let result_w = WIDTH - 100;

    format!(
        r##"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{WIDTH}px" height="{HEIGHT}px"
     font-family="Arial,Helvetica,sans-serif">

<defs>
<linearGradient id="bg" x1="0" y1="0" x2="0" y2="1">
  <stop offset="0" stop-color="{top}"/>
  <stop offset="1" stop-color="{bottom}"/>
</linearGradient>
</defs>

<rect width="{WIDTH}px" height="{HEIGHT}px" fill="url(#bg)"/>

<!-- DECORATIVE CIRCLES -->
<circle cx="50" cy="50" r="100" fill="#ffffff" fill-opacity="0.12"/>
<circle cx="{c2x}" cy="{c2y}" r="100" fill="#ffffff" fill-opacity="0.12"/>
<circle cx="{c3x}" cy="10" r="90" fill="#ffffff" fill-opacity="0.12"/>

<!-- TITLE -->
<text x="{mid}" y="80" text-anchor="middle" font-size="42px" font-weight="bold" fill="{title}">🎂 Age Calculator 🎂</text>

<!-- CARD -->
<rect x="{shadow_x}" y="{shadow_y}" width="{card_w}" height="{card_h}" rx="{CARD_RADIUS}" fill="#000000" fill-opacity="0.12"/>
<rect x="{CARD_X}" y="{CARD_Y}" width="{card_w}" height="{card_h}" rx="{CARD_RADIUS}" fill="{card}"/>
<text x="{mid}" y="{dob_y}" text-anchor="middle" font-size="22px" font-weight="bold" fill="{label}">📅 Date of Birth: {selection}</text>

<!-- RESULT STRIP -->
<rect x="50" y="{result_y}" width="{result_w}" height="80" rx="20" fill="{card}" fill-opacity="0.86"/>
<text x="{mid}" y="{result_text_y}" text-anchor="middle" font-size="22px" font-weight="bold" fill="{result_color}">{result}</text>

</svg>
"##,
        top = colors.gradient_top,
        bottom = colors.gradient_bottom,
        c2x = WIDTH - 50,
        c2y = HEIGHT - 50,
        c3x = WIDTH - 10,
        mid = WIDTH / 2,
        title = colors.title,
        shadow_x = CARD_X + SHADOW_OFFSET,
        shadow_y = CARD_Y + SHADOW_OFFSET,
        dob_y = CARD_Y + card_h / 2,
        selection = escape_xml(selection),
        card = colors.card,
        label = colors.label,
        result_text_y = result_y + 48,
        result_color = result_color,
        result = escape_xml(&result_text),
    )
}

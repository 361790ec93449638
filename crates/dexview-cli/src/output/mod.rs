mod detail;
mod list;
mod stats_view;

pub use detail::format_detail;
pub use list::format_cards;
pub use stats_view::format_stats;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use owo_colors::AnsiColors;
use terminal_size::{terminal_size, Width};

/// Rendering options shared by the text views.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub enable_color: bool,
    /// Wrap width for flowing text; detected from the terminal when None.
    pub width: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            width: None,
        }
    }
}

impl FormatOptions {
    pub fn wrap_width(&self) -> usize {
        self.width.unwrap_or_else(detect_width)
    }
}

static TYPE_COLORS: Lazy<HashMap<&'static str, AnsiColors>> = Lazy::new(|| {
    HashMap::from([
        ("normal", AnsiColors::White),
        ("fire", AnsiColors::Red),
        ("water", AnsiColors::Blue),
        ("electric", AnsiColors::Yellow),
        ("grass", AnsiColors::Green),
        ("ice", AnsiColors::Cyan),
        ("fighting", AnsiColors::Red),
        ("poison", AnsiColors::Magenta),
        ("ground", AnsiColors::Yellow),
        ("flying", AnsiColors::Cyan),
        ("psychic", AnsiColors::Magenta),
        ("bug", AnsiColors::Green),
        ("rock", AnsiColors::Yellow),
        ("ghost", AnsiColors::Magenta),
        ("dragon", AnsiColors::Blue),
        ("dark", AnsiColors::BrightBlack),
        ("steel", AnsiColors::White),
        ("fairy", AnsiColors::Magenta),
    ])
});

/// Terminal color for a type badge. Unknown types stay uncolored.
pub fn type_color(name: &str) -> AnsiColors {
    TYPE_COLORS
        .get(name.to_lowercase().as_str())
        .copied()
        .unwrap_or(AnsiColors::Default)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format how long ago a timestamp was, e.g. "2h ago".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}

/// Greedy word wrap for flowing text like dex entries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn detect_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(80)
}

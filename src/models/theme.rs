use serde::Serialize;

/// Terminal color scheme selected by `backgroundColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Theme {
    Light, // light / white
    Dark,  // dark / black
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a config value. `white`/`black` are accepted for older config files.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" | "white" => Some(Theme::Light),
            "dark" | "black" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// ANSI foreground used for regular status messages.
    pub fn foreground(&self) -> &'static str {
        match self {
            Theme::Light => "\x1b[30m",
            Theme::Dark => "\x1b[97m",
        }
    }

    /// ANSI background painted behind the session prompt.
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Light => "\x1b[47m",
            Theme::Dark => "\x1b[40m",
        }
    }
}

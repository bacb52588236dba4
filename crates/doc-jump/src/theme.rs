use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color management
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text
    pub text_primary: Color,
    pub text_muted: Color,

    // Accents
    pub accent_primary: Color,

    // Selection (dropdown cursor, active nav entry)
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Transient jump highlight on the revealed unit
    pub highlight_bg: Color,
    pub highlight_fg: Color,

    // Status line
    pub status_info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,
            text_primary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c500,
            accent_primary: tailwind::CYAN.c400,
            selected_bg: tailwind::CYAN.c800,
            selected_fg: tailwind::SLATE.c100,
            highlight_bg: tailwind::AMBER.c600,
            highlight_fg: tailwind::SLATE.c950,
            status_info: tailwind::CYAN.c300,
        }
    }
}

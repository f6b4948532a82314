//! Theme configuration for the desktop app

/// Environment variable selecting `light` or `dark`.
pub const THEME_ENV: &str = "COURSENOTES_THEME";

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Resolve a theme name; anything but `dark` is light.
#[must_use]
pub fn resolve_theme(name: Option<&str>) -> ResolvedTheme {
    match name.map(str::trim) {
        Some(value) if value.eq_ignore_ascii_case("dark") => ResolvedTheme::Dark,
        _ => ResolvedTheme::Light,
    }
}

#[must_use]
pub fn theme_from_env() -> ResolvedTheme {
    resolve_theme(std::env::var(THEME_ENV).ok().as_deref())
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#4f46e5",
    accent_text: "#ffffff",
    error: "#dc2626",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#242424",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#818cf8",
    accent_text: "#1a1a1a",
    error: "#f87171",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_theme_names() {
        assert_eq!(resolve_theme(Some(" Dark ")), ResolvedTheme::Dark);
        assert_eq!(resolve_theme(Some("light")), ResolvedTheme::Light);
        assert_eq!(resolve_theme(Some("solarized")), ResolvedTheme::Light);
        assert_eq!(resolve_theme(None), ResolvedTheme::Light);
    }
}

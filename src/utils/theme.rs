//! Light/dark theme preference.

use crate::config::THEME_STORAGE_KEY;
use crate::utils::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light mode",
            Self::Dark => "Dark mode",
        }
    }
}

/// Stored preference, if any.
pub fn stored() -> Option<Theme> {
    let value = dom::local_storage()?.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::parse(&value)
}

/// System color-scheme preference, read synchronously.
pub fn system_prefers_dark() -> Option<bool> {
    let query = dom::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    Some(query.matches())
}

/// Initial theme: stored preference, then the system preference, then dark.
pub fn initial() -> Theme {
    resolve(stored(), system_prefers_dark())
}

fn resolve(stored: Option<Theme>, prefers_dark: Option<bool>) -> Theme {
    stored
        .or_else(|| prefers_dark.map(|dark| if dark { Theme::Dark } else { Theme::Light }))
        .unwrap_or_default()
}

/// Reflect `theme` on the document and remember it.
pub fn apply(theme: Theme) {
    if let Some(document) = dom::window().and_then(|w| w.document()) {
        let dark = theme == Theme::Dark;
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
            let _ = body.class_list().toggle_with_force("dark", dark);
        }
        if let Some(root) = document.document_element() {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    }

    if let Some(storage) = dom::local_storage()
        && storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err()
    {
        tracing::warn!("could not persist theme preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_initial_theme_precedence() {
        assert_eq!(resolve(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(resolve(None, Some(true)), Theme::Dark);
        assert_eq!(resolve(None, Some(false)), Theme::Light);
        assert_eq!(resolve(None, None), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}

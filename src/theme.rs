//! Light/Dark Theme

/// Presentation theme. Only affects class names on the page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class list for the page root element
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "page",
            Theme::Dark => "page dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(theme.toggled().toggled().root_class(), theme.root_class());
        }
    }

    #[test]
    fn test_root_class() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::Light.root_class().contains("dark"));
        assert!(Theme::Dark.root_class().contains("dark"));
        assert!(Theme::Light.toggled().is_dark());
    }
}

//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Toggle between English and Chinese
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::ZhCN => Locale::EnUS,
            Locale::EnUS => Locale::ZhCN,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_locales() {
        let mut state = I18nState::new(Locale::EnUS);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::ZhCN);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUS);
    }
}

//! Summary language value object

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A language the provider can write summaries in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

const SUPPORTED: [Language; 38] = [
    lang("ar", "Arabic"),
    lang("az", "Azerbaijani"),
    lang("be", "Belarusian"),
    lang("bs", "Bosnian"),
    lang("bg", "Bulgarian"),
    lang("ca", "Catalan"),
    lang("kw", "Cornish"),
    lang("zh", "Simplified Chinese"),
    lang("zh-tw", "Traditional Chinese"),
    lang("hr", "Croatian"),
    lang("cs", "Czech"),
    lang("da", "Danish"),
    lang("nl", "Dutch"),
    lang("ka", "Georgian"),
    lang("de", "German"),
    lang("el", "Greek"),
    lang("en", "English"),
    lang("et", "Estonian"),
    lang("fi", "Finnish"),
    lang("fr", "French"),
    lang("hu", "Hungarian"),
    lang("is", "Icelandic"),
    lang("id", "Indonesian"),
    lang("it", "Italian"),
    lang("ja", "Japanese"),
    lang("nb", "Norwegian Bokmål"),
    lang("pl", "Polish"),
    lang("pt", "Portuguese"),
    lang("ru", "Russian"),
    lang("sr", "Serbian"),
    lang("sk", "Slovak"),
    lang("sl", "Slovenian"),
    lang("es", "Spanish"),
    lang("sv", "Swedish"),
    lang("tet", "Tetum"),
    lang("tr", "Turkish"),
    lang("uk", "Ukrainian"),
    lang("x-pig-latin", "lgpay Atinlay"),
];

impl Language {
    /// English, the default summary language
    pub const ENGLISH: Self = lang("en", "English");

    /// Every supported language, in display order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &SUPPORTED
    }

    /// Look up a language by its code
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedLanguage` for codes outside the table.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        SUPPORTED
            .iter()
            .copied()
            .find(|l| l.code == code)
            .ok_or_else(|| DomainError::UnsupportedLanguage(code.to_string()))
    }

    /// Code sent to the provider
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// English display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

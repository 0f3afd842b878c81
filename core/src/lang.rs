use std::fmt;

/// Languages the site ships translation tables for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lang {
    Hu,
    De,
    En,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Hu, Lang::De, Lang::En];
    pub const DEFAULT: Lang = Lang::Hu;

    pub fn code(self) -> &'static str {
        match self {
            Lang::Hu => "hu",
            Lang::De => "de",
            Lang::En => "en",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseLangError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hu" => Ok(Lang::Hu),
            "de" => Ok(Lang::De),
            "en" => Ok(Lang::En),
            _ => Err(ParseLangError {
                found: value.to_string(),
            }),
        }
    }

    /// Code for a selector button: anything unknown falls through to English,
    /// the generic document language.
    pub fn from_selector_code(value: &str) -> Self {
        Self::parse(value).unwrap_or(Lang::En)
    }

    /// Persisted value, or Hungarian when nothing usable is stored.
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|value| Self::parse(value).ok())
            .unwrap_or(Self::DEFAULT)
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = ParseLangError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLangError {
    pub found: String,
}

impl fmt::Display for ParseLangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code '{}'", self.found)
    }
}

impl std::error::Error for ParseLangError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes_case_insensitively() {
        assert_eq!(Lang::parse("hu"), Ok(Lang::Hu));
        assert_eq!(Lang::parse(" DE "), Ok(Lang::De));
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
    }

    #[test]
    fn rejects_unknown_code() {
        let err = Lang::parse("fr").unwrap_err();
        assert_eq!(err.found, "fr");
        assert_eq!(err.to_string(), "unsupported language code 'fr'");
    }

    #[test]
    fn stored_value_defaults_to_hungarian() {
        assert_eq!(Lang::from_stored(None), Lang::Hu);
        assert_eq!(Lang::from_stored(Some("")), Lang::Hu);
        assert_eq!(Lang::from_stored(Some("fr")), Lang::Hu);
        assert_eq!(Lang::from_stored(Some("de")), Lang::De);
    }

    #[test]
    fn selector_code_falls_through_to_english() {
        assert_eq!(Lang::from_selector_code("hu"), Lang::Hu);
        assert_eq!(Lang::from_selector_code("fr"), Lang::En);
    }
}

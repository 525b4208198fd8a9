//! Culture names and their parent chain
//!
//! A [`Culture`] is a canonical locale name such as `en-GB` or `zh-Hant-TW`.
//! The empty name is the invariant culture, the root every chain ends at.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::constants::{CULTURE_ENV_VAR, POSIX_LOCALE_ENV_VARS};
use super::error::{DocsError, DocsResult};

static CULTURE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,8}(?:[-_][A-Za-z0-9]{1,8})*$")
        .expect("Failed to compile culture name regex")
});

/// A locale used to pick localized documentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Culture {
    name: String,
}

impl Culture {
    /// The invariant culture
    pub fn invariant() -> Self {
        Self { name: String::new() }
    }

    /// Parse a culture name such as `en-GB`, `en_gb` or `zh-hant-tw`
    ///
    /// The empty string is the invariant culture.
    pub fn new(name: &str) -> DocsResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Self::invariant());
        }
        if !CULTURE_NAME_RE.is_match(name) {
            return Err(DocsError::InvalidCulture { name: name.to_string() });
        }

        let canonical = name
            .split(['-', '_'])
            .enumerate()
            .map(|(index, subtag)| canonical_subtag(index, subtag))
            .collect::<Vec<_>>()
            .join("-");

        Ok(Self { name: canonical })
    }

    /// Parse a POSIX locale such as `en_GB.UTF-8@euro`
    ///
    /// `C` and `POSIX` map to the invariant culture.
    pub fn from_posix_locale(locale: &str) -> DocsResult<Self> {
        let without_modifier = locale.split('@').next().unwrap_or_default();
        let without_codeset = without_modifier.split('.').next().unwrap_or_default();
        match without_codeset.trim() {
            "C" | "POSIX" => Ok(Self::invariant()),
            name => Self::new(name),
        }
    }

    /// The culture of the current process environment
    ///
    /// Unset, empty or unparseable values fall back to the invariant culture.
    pub fn current() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Resolve the current culture from the given environment lookup
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        std::iter::once(CULTURE_ENV_VAR)
            .chain(POSIX_LOCALE_ENV_VARS)
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::from_posix_locale(&value).ok())
            .unwrap_or_else(Self::invariant)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    /// The next less specific culture, `None` for the invariant culture
    pub fn parent(&self) -> Option<Culture> {
        if self.is_invariant() {
            return None;
        }

        let parent_name = match self.name.as_str() {
            "zh-TW" | "zh-HK" | "zh-MO" => "zh-Hant",
            "zh-CN" | "zh-SG" => "zh-Hans",
            name => match name.rfind('-') {
                Some(index) => &name[..index],
                None => "",
            },
        };

        Some(Culture {
            name: parent_name.to_string(),
        })
    }

    /// Culture names from this culture up to, but excluding, the invariant culture
    ///
    /// For `en-GB` this is `["en-GB", "en"]`.
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = Vec::new();
        let mut culture = Some(self.clone());
        while let Some(current) = culture {
            if current.is_invariant() {
                break;
            }
            culture = current.parent();
            chain.push(current.name);
        }
        chain
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("(invariant)")
        } else {
            f.write_str(&self.name)
        }
    }
}

fn canonical_subtag(index: usize, subtag: &str) -> String {
    if index == 0 {
        return subtag.to_ascii_lowercase();
    }
    match subtag.len() {
        2 => subtag.to_ascii_uppercase(),
        4 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {
            let lower = subtag.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => lower,
            }
        }
        _ => subtag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_canonical_names() {
        assert_eq!(Culture::new("en-GB").unwrap().name(), "en-GB");
        assert_eq!(Culture::new("EN_gb").unwrap().name(), "en-GB");
        assert_eq!(Culture::new("zh-hant-tw").unwrap().name(), "zh-Hant-TW");
        assert_eq!(Culture::new("es-419").unwrap().name(), "es-419");
        assert!(Culture::new("").unwrap().is_invariant());
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        assert!(matches!(Culture::new("e"), Err(DocsError::InvalidCulture { .. })));
        assert!(matches!(Culture::new("en--GB"), Err(DocsError::InvalidCulture { .. })));
        assert!(matches!(Culture::new("en/GB"), Err(DocsError::InvalidCulture { .. })));
    }

    #[test]
    fn test_posix_locales() {
        assert_eq!(Culture::from_posix_locale("en_GB.UTF-8").unwrap().name(), "en-GB");
        assert_eq!(Culture::from_posix_locale("de_DE.UTF-8@euro").unwrap().name(), "de-DE");
        assert!(Culture::from_posix_locale("C").unwrap().is_invariant());
        assert!(Culture::from_posix_locale("POSIX").unwrap().is_invariant());
        assert!(Culture::from_posix_locale("C.UTF-8").unwrap().is_invariant());
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(Culture::new("en-GB").unwrap().fallback_chain(), vec!["en-GB", "en"]);
        assert_eq!(Culture::new("fr").unwrap().fallback_chain(), vec!["fr"]);
        assert_eq!(
            Culture::new("zh-Hant-TW").unwrap().fallback_chain(),
            vec!["zh-Hant-TW", "zh-Hant", "zh"]
        );
        assert!(Culture::invariant().fallback_chain().is_empty());
    }

    #[test]
    fn test_chinese_regions_fall_back_to_scripts() {
        assert_eq!(Culture::new("zh-TW").unwrap().fallback_chain(), vec!["zh-TW", "zh-Hant", "zh"]);
        assert_eq!(Culture::new("zh-CN").unwrap().fallback_chain(), vec!["zh-CN", "zh-Hans", "zh"]);
    }

    #[test]
    fn test_invariant_has_no_parent() {
        assert_eq!(Culture::invariant().parent(), None);
        assert_eq!(Culture::new("en").unwrap().parent(), Some(Culture::invariant()));
    }

    #[test]
    fn test_environment_priority() {
        let env: HashMap<&str, &str> = [("LANG", "fr_FR.UTF-8"), ("LC_ALL", "en_GB.UTF-8")].into();
        let culture = Culture::from_env_with(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(culture.name(), "en-GB");

        let env: HashMap<&str, &str> =
            [("USAGE_DOCS_CULTURE", "de-AT"), ("LC_ALL", "en_GB.UTF-8")].into();
        let culture = Culture::from_env_with(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(culture.name(), "de-AT");
    }

    #[test]
    fn test_environment_skips_empty_and_defaults_to_invariant() {
        let env: HashMap<&str, &str> = [("LC_ALL", ""), ("LANG", "nl_BE")].into();
        let culture = Culture::from_env_with(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(culture.name(), "nl-BE");

        assert!(Culture::from_env_with(|_| None).is_invariant());

        let garbage: HashMap<&str, &str> = [("LANG", "???")].into();
        let culture = Culture::from_env_with(|key| garbage.get(key).map(|v| v.to_string()));
        assert!(culture.is_invariant());
    }
}

//! Language and unit profiles for prompt construction.

/// Output language plus the unit system recipes should use in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    /// English name of the language, e.g. "French".
    pub name: &'static str,
    /// Unit system for measurements, "imperial" or "metric".
    pub units: &'static str,
}

impl LanguageProfile {
    pub const ENGLISH: LanguageProfile = LanguageProfile {
        name: "English",
        units: "imperial",
    };

    pub const FRENCH: LanguageProfile = LanguageProfile {
        name: "French",
        units: "metric",
    };

    pub const SPANISH: LanguageProfile = LanguageProfile {
        name: "Spanish",
        units: "metric",
    };

    /// Resolve a user-supplied language tag. Unrecognized tags fall back to
    /// English with imperial units.
    pub fn resolve(tag: &str) -> LanguageProfile {
        match tag {
            "en" => Self::ENGLISH,
            "fr" | "fr-FR" => Self::FRENCH,
            "es" => Self::SPANISH,
            _ => Self::ENGLISH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        assert_eq!(LanguageProfile::resolve("en"), LanguageProfile::ENGLISH);
        assert_eq!(LanguageProfile::resolve("fr"), LanguageProfile::FRENCH);
        assert_eq!(LanguageProfile::resolve("fr-FR"), LanguageProfile::FRENCH);
        assert_eq!(LanguageProfile::resolve("es"), LanguageProfile::SPANISH);
    }

    #[test]
    fn unknown_tag_falls_back_to_english_imperial() {
        let profile = LanguageProfile::resolve("de");
        assert_eq!(profile.name, "English");
        assert_eq!(profile.units, "imperial");
    }
}

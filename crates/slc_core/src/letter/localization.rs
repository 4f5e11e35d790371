//! Letter Localization
//!
//! Fluent (FTL) based multi-language support for letter text.

use fluent::{FluentArgs, FluentBundle, FluentMessage, FluentResource, FluentValue};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

use crate::data::embedded::{LETTER_EN_US_FTL, LETTER_ES_US_FTL};
use crate::letter::LetterError;

/// Locales shipped with the binary.
pub const SUPPORTED_LOCALES: &[&str] = &["en-US", "es-US"];

/// Letter text localizer.
pub struct LetterLocalizer {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    current_locale: String,
    fallback_locale: String,
}

impl Default for LetterLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterLocalizer {
    /// Creates a localizer preloaded with the embedded templates.
    pub fn new() -> Self {
        let mut localizer = Self {
            bundles: HashMap::new(),
            current_locale: "en-US".to_string(),
            fallback_locale: "en-US".to_string(),
        };
        for (locale, content) in [("en-US", LETTER_EN_US_FTL), ("es-US", LETTER_ES_US_FTL)] {
            localizer
                .load_locale(locale, content)
                .expect("Embedded letter template is corrupted");
        }
        localizer
    }

    /// Loads FTL files from a directory, overriding the embedded templates.
    /// Only files named after a supported locale are picked up.
    pub fn load_from_dir(&mut self, dir_path: &Path) -> Result<(), LetterError> {
        for locale in SUPPORTED_LOCALES {
            let file_path = dir_path.join(format!("{}.ftl", locale));
            if file_path.exists() {
                let content = fs::read_to_string(&file_path)?;
                self.load_locale(locale, &content)?;
            }
        }
        Ok(())
    }

    /// Loads one locale's templates from FTL source.
    pub fn load_locale(&mut self, locale: &str, ftl_content: &str) -> Result<(), LetterError> {
        let resource = FluentResource::try_new(ftl_content.to_string())
            .map_err(|_| LetterError::InvalidTemplate("Failed to parse FTL content".into()))?;

        let lang_id: LanguageIdentifier = locale
            .parse()
            .map_err(|_| LetterError::InvalidTemplate(format!("Invalid locale: {}", locale)))?;

        let mut bundle = FluentBundle::new(vec![lang_id]);
        // Letters land in plain-text files; keep Unicode isolation marks out.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|_| LetterError::InvalidTemplate("Failed to add resource to bundle".into()))?;

        self.bundles.insert(locale.to_string(), bundle);
        Ok(())
    }

    /// Switches the active locale. The locale must already be loaded.
    pub fn set_locale(&mut self, locale: &str) -> Result<(), LetterError> {
        if !self.bundles.contains_key(locale) {
            return Err(LetterError::UnknownLocale {
                locale: locale.to_string(),
            });
        }
        self.current_locale = locale.to_string();
        Ok(())
    }

    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }

    /// Picks the best loaded locale for the requested language list.
    pub fn negotiate_locale(&self, requested: &[&str]) -> String {
        let available: Vec<LanguageIdentifier> =
            self.bundles.keys().filter_map(|k| k.parse().ok()).collect();

        let requested: Vec<LanguageIdentifier> =
            requested.iter().filter_map(|l| l.parse().ok()).collect();

        let default: LanguageIdentifier = self.fallback_locale.parse().unwrap();

        let negotiated = negotiate_languages(
            &requested,
            &available,
            Some(&default),
            NegotiationStrategy::Filtering,
        );

        negotiated
            .first()
            .map(|l| l.to_string())
            .unwrap_or_else(|| self.fallback_locale.clone())
    }

    /// Formats a message in the active locale, falling back to the default
    /// locale and then to `[key]` when the message is missing or carries no
    /// value (attributes only).
    pub fn format(&self, key: &str, args: Option<HashMap<String, FluentValue>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(message) = bundle.get_message(key) {
                if let Some(text) = self.format_pattern(bundle, message, args.clone()) {
                    return text;
                }
            }
        }

        if self.current_locale != self.fallback_locale {
            if let Some(bundle) = self.bundles.get(&self.fallback_locale) {
                if let Some(message) = bundle.get_message(key) {
                    if let Some(text) = self.format_pattern(bundle, message, args) {
                        log::warn!(
                            "Message {} missing for locale {}, using {}",
                            key,
                            self.current_locale,
                            self.fallback_locale
                        );
                        return text;
                    }
                }
            }
        }

        log::warn!("Message {} has no value in any loaded locale", key);
        format!("[{}]", key)
    }

    /// Returns `None` when the message has no value to render.
    fn format_pattern(
        &self,
        bundle: &FluentBundle<FluentResource>,
        message: FluentMessage,
        args: Option<HashMap<String, FluentValue>>,
    ) -> Option<String> {
        let pattern = message.value()?;
        let mut errors = vec![];

        let formatted = if let Some(hash_args) = args {
            let mut fluent_args = FluentArgs::new();
            for (key, value) in hash_args {
                fluent_args.set(key, value);
            }
            bundle.format_pattern(pattern, Some(&fluent_args), &mut errors)
        } else {
            bundle.format_pattern(pattern, None, &mut errors)
        };

        Some(formatted.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn guardian_args(name: &str) -> HashMap<String, FluentValue<'static>> {
        let mut args = HashMap::new();
        args.insert("guardian".to_string(), FluentValue::from(name.to_string()));
        args
    }

    #[test]
    fn test_embedded_locales_preloaded() {
        let localizer = LetterLocalizer::new();
        let greeting = localizer.format("letter-greeting", Some(guardian_args("Jan Smith")));
        assert_eq!(greeting, "Dear Jan Smith,");
    }

    #[test]
    fn test_spanish_greeting() {
        let mut localizer = LetterLocalizer::new();
        localizer.set_locale("es-US").unwrap();
        let greeting = localizer.format("letter-greeting", Some(guardian_args("Gala Dali")));
        assert_eq!(greeting, "Estimado/a Gala Dali:");
    }

    #[test]
    fn test_no_isolation_marks_in_output() {
        let localizer = LetterLocalizer::new();
        let greeting = localizer.format("letter-greeting", Some(guardian_args("Jeff Adams")));
        assert!(!greeting.contains('\u{2068}'));
        assert!(!greeting.contains('\u{2069}'));
    }

    #[test]
    fn test_missing_message_returns_key_marker() {
        let localizer = LetterLocalizer::new();
        assert_eq!(localizer.format("no-such-message", None), "[no-such-message]");
    }

    #[test]
    fn test_missing_message_falls_back_to_default_locale() {
        let mut localizer = LetterLocalizer::new();
        // A partial override: only the greeting is translated.
        localizer
            .load_locale("es-US", "letter-greeting = Hola { $guardian }:")
            .unwrap();
        localizer.set_locale("es-US").unwrap();

        let closing = localizer.format("letter-closing", None);
        assert_eq!(closing, "We look forward to a wonderful season. See you on the field!");
    }

    #[test]
    fn test_message_without_value_falls_back_to_default_locale() {
        let mut localizer = LetterLocalizer::new();
        // Attributes only, no value to render.
        localizer
            .load_locale("es-US", "letter-closing =\n    .note = sin texto")
            .unwrap();
        localizer.set_locale("es-US").unwrap();

        let closing = localizer.format("letter-closing", None);
        assert_eq!(closing, "We look forward to a wonderful season. See you on the field!");
    }

    #[test]
    fn test_message_without_value_anywhere_returns_key_marker() {
        let mut localizer = LetterLocalizer::new();
        localizer
            .load_locale("en-US", "letter-closing =\n    .note = nothing to say")
            .unwrap();

        assert_eq!(localizer.format("letter-closing", None), "[letter-closing]");
    }

    #[test]
    fn test_set_locale_requires_loaded_bundle() {
        let mut localizer = LetterLocalizer::new();
        let err = localizer.set_locale("fr-FR").unwrap_err();
        assert!(matches!(err, LetterError::UnknownLocale { .. }));
        assert_eq!(localizer.current_locale(), "en-US");
    }

    #[test]
    fn test_locale_negotiation() {
        let localizer = LetterLocalizer::new();
        assert_eq!(localizer.negotiate_locale(&["es"]), "es-US");
        assert_eq!(localizer.negotiate_locale(&["es-MX", "en"]), "es-US");
        assert_eq!(localizer.negotiate_locale(&["ko"]), "en-US");
        assert_eq!(localizer.negotiate_locale(&[]), "en-US");
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let mut localizer = LetterLocalizer::new();
        let err = localizer.load_locale("en-US", "= this is not ftl").unwrap_err();
        assert!(matches!(err, LetterError::InvalidTemplate(_)));
    }

    #[test]
    fn test_load_from_dir_overrides_embedded() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut file = File::create(dir.path().join("en-US.ftl"))?;
        writeln!(file, "letter-greeting = Greetings {{ $guardian }}!")?;

        let mut localizer = LetterLocalizer::new();
        localizer.load_from_dir(dir.path()).unwrap();

        let greeting = localizer.format("letter-greeting", Some(guardian_args("Claire Willis")));
        assert_eq!(greeting, "Greetings Claire Willis!");
        Ok(())
    }

    #[test]
    fn test_load_from_dir_ignores_unrelated_files() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut file = File::create(dir.path().join("notes.txt"))?;
        writeln!(file, "not a template")?;

        let mut localizer = LetterLocalizer::new();
        localizer.load_from_dir(dir.path()).unwrap();

        let greeting = localizer.format("letter-greeting", Some(guardian_args("Jeff Adams")));
        assert_eq!(greeting, "Dear Jeff Adams,");
        Ok(())
    }
}

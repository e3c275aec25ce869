// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles embedded from `assets/i18n/`.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((partial, errors)) => {
                    eprintln!("i18n: {} parse errors in {}", errors.len(), filename);
                    partial
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // labels are shown in plain widgets, not bidi-aware text runs
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                eprintln!("i18n: {} duplicate messages in {}", errors.len(), filename);
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches locale if a bundle exists for it.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments, e.g. `[("index", 3.into())]`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let bundle = self
            .bundles
            .get(&self.current_locale)
            .filter(|bundle| bundle.has_message(key))
            .or_else(|| self.bundles.get(&default_locale()));

        if let Some(bundle) = bundle {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Picks the first available locale from CLI, config, then OS.
///
/// A candidate matches exactly or, failing that, by language subtag
/// (`fr-CA` selects `fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang.as_deref(), config_lang, os_lang.as_deref()];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| match_available(&wanted, available))
}

fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(wanted) {
        return Some(wanted.clone());
    }
    available
        .iter()
        .find(|candidate| candidate.language == wanted.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let lang = resolve_locale(
            Some("fr".to_string()),
            Some("en-US"),
            Some("en-US".to_string()),
            &available(),
        );
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let lang = resolve_locale(None, Some("fr"), Some("en-US".to_string()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unavailable_candidates() {
        let lang = resolve_locale(
            Some("de".to_string()),
            Some("not a locale!"),
            Some("fr-CA".to_string()),
            &available(),
        );
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_none_when_nothing_matches() {
        assert_eq!(resolve_locale(None, None, Some("ja".to_string()), &available()), None);
    }

    #[test]
    fn embedded_bundles_include_english_and_french() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
    }

    #[test]
    fn tr_translates_known_key() {
        let mut i18n = I18n::default();
        assert!(i18n.set_locale("en-US".parse().unwrap()));
        assert_eq!(i18n.tr("gallery-close"), "Close project gallery");
    }

    #[test]
    fn tr_with_args_formats_placeables() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let label = i18n.tr_with_args(
            "gallery-image-alt",
            &[("title", "Al Jazeera Tower".into()), ("index", 2.into())],
        );
        assert_eq!(label, "Al Jazeera Tower - Image 2");
        assert_eq!(
            i18n.tr_with_args("gallery-thumbnail", &[("index", 4.into())]),
            "View image 4"
        );
    }

    #[test]
    fn tr_marks_missing_keys() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn set_locale_rejects_unknown_locale() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        assert!(!i18n.set_locale("de".parse().unwrap()));
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn french_bundle_translates_gallery_labels() {
        let mut i18n = I18n::default();
        assert!(i18n.set_locale("fr".parse().unwrap()));
        assert_eq!(i18n.tr("gallery-close"), "Fermer la galerie du projet");
    }
}

//! Localized UI chrome for `portalchat-ui`.
//!
//! Bundles live in `i18n/<tag>/portalchat_ui.ftl` and are embedded at compile
//! time. `en-US` is the fallback; every other locale must define the same ids
//! and placeables (enforced by `tests/i18n_missing_keys.rs`). Lookups go
//! through [`t!`](crate::t), whose ids are checked against the fallback bundle
//! at compile time:
//!
//! ```ignore
//! crate::i18n::init();
//! let label = crate::t!("nav-chat");
//! let joined = crate::t!("profile-joined", date = "1/15/2024");
//! ```
//!
//! Chat bodies and profile sample values are data and never pass through here.

use dioxus::logger::tracing::{debug, info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::{Lazy, OnceCell};
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Looks up a message id on the shared [`LOADER`], optionally with named
/// arguments.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Bundle file stem; must match `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "portalchat_ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

/// Languages chosen from the platform's preferences on first `init`.
static STARTUP_SELECTION: OnceCell<Vec<String>> = OnceCell::new();

/// Selects bundles from the OS or browser language list. Only the first call
/// does any work.
pub fn init() {
    STARTUP_SELECTION.get_or_init(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Bundles, &requested) {
            Ok(selected) => {
                let tags: Vec<String> = selected.iter().map(ToString::to_string).collect();
                info!(?tags, "localization ready");
                tags
            }
            Err(err) => {
                warn!(%err, "locale selection failed; using {FALLBACK}");
                Vec::new()
            }
        }
    });
}

/// Switches the active locale. Tags that do not parse are ignored; tags
/// with no embedded bundle leave the fallback in place.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    let selected = i18n_embed::select(&*LOADER, &Bundles, &[lang])?;
    debug!(tag, ?selected, "language switched");
    Ok(())
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded locale tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut tags: Vec<String> = Bundles::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Entry in the navbar locale picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOption {
    pub tag: String,
    pub name: String,
}

/// Endonym shown in the picker; unknown tags show themselves.
pub fn display_name(tag: &str) -> Option<&'static str> {
    match tag {
        "en-US" => Some("English"),
        "es-ES" => Some("Español"),
        _ => None,
    }
}

pub fn locale_options() -> Vec<LocaleOption> {
    available_languages()
        .into_iter()
        .map(|tag| {
            let name = display_name(&tag).map_or_else(|| tag.clone(), str::to_string);
            LocaleOption { tag, name }
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES"]);
    }

    #[test]
    fn english_lookup_and_arguments() {
        init();
        set_language("en-US").unwrap();
        assert_eq!(fl!(&*LOADER, "nav-chat"), "Chat");
        let joined = fl!(&*LOADER, "profile-joined", date = "1/15/2024");
        assert!(joined.contains("1/15/2024"), "{joined}");
        assert_eq!(current_language(), "en-US");
    }

    #[test]
    fn unknown_locale_keeps_a_working_bundle() {
        init();
        let _ = set_language("zz-ZZ");
        assert!(!fl!(&*LOADER, "nav-profile").is_empty());
    }

    #[test]
    fn garbage_tag_is_ignored() {
        assert!(set_language("not a tag!!").is_ok());
    }

    #[test]
    fn picker_lists_named_locales() {
        let options = locale_options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "English");
        assert_eq!(options[1].tag, "es-ES");
        assert_eq!(display_name("fr-FR"), None);
    }
}

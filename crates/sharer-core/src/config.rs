//! Attribute adapter: custom-element attributes to configuration.
//!
//! The element exposes one attribute per configuration key, named by the
//! kebab-case form of the key (`share-url` for `shareUrl`). Attributes are
//! read once when the element connects; the adapter walks the default table,
//! coerces whatever attributes are present, and leaves everything else at its
//! default. Garbled values never error, they fall back.

use crate::i18n::{resolve_locale, translate, Locale, TextKey};
use crate::links::ShareLinks;

/// Host-page values the widget defaults to when no attribute overrides them.
///
/// Captured once by the browser layer at element connect (page URL, page
/// title, `<html lang>`), never read from globals inside this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub url: String,
    pub title: String,
    pub language: String,
}

/// Typed default for one configuration key.
///
/// Only string and boolean defaults exist. A numeric key would need its own
/// variant and coercion here; there is deliberately no catch-all that would
/// miscoerce one silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrDefault {
    Str(&'static str),
    Bool(bool),
}

/// The full default table, in declaration order.
///
/// `shareUrl` and `shareTitle` are listed with empty string defaults; their
/// real defaults come from the [`PageContext`] when the config is built.
pub const CONFIG_DEFAULTS: &[(&str, AttrDefault)] = &[
    ("locale", AttrDefault::Str("")),
    ("shareUrl", AttrDefault::Str("")),
    ("shareTitle", AttrDefault::Str("")),
    ("useFacebook", AttrDefault::Bool(true)),
    ("useTwitter", AttrDefault::Bool(true)),
    ("useWhatsapp", AttrDefault::Bool(true)),
    ("useLink", AttrDefault::Bool(true)),
    ("useEmail", AttrDefault::Bool(true)),
    ("useLinkedin", AttrDefault::Bool(false)),
    ("opener", AttrDefault::Bool(true)),
    ("openerSvg", AttrDefault::Str("")),
    ("closingSvg", AttrDefault::Str("")),
    ("textShare", AttrDefault::Str("")),
    ("textCopy", AttrDefault::Str("")),
    ("css", AttrDefault::Str("")),
];

/// Convert a camelCase configuration key to its attribute name.
///
/// A hyphen goes before every uppercase letter and the result is lowercased.
/// Already-kebab-case input passes through unchanged.
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn coerce_bool(raw: &str, default: bool) -> bool {
    match raw {
        "false" | "0" => false,
        "true" | "1" => true,
        _ => default,
    }
}

/// Widget configuration, one field per key in [`CONFIG_DEFAULTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharerConfig {
    pub locale: String,
    pub share_url: String,
    pub share_title: String,
    pub use_facebook: bool,
    pub use_twitter: bool,
    pub use_whatsapp: bool,
    pub use_link: bool,
    pub use_email: bool,
    pub use_linkedin: bool,
    pub opener: bool,
    pub opener_svg: String,
    pub closing_svg: String,
    pub text_share: String,
    pub text_copy: String,
    pub css: String,
}

impl SharerConfig {
    /// The built-in defaults with page URL and title filled in from `page`.
    pub fn defaults(page: &PageContext) -> Self {
        Self {
            locale: String::new(),
            share_url: page.url.clone(),
            share_title: page.title.clone(),
            use_facebook: true,
            use_twitter: true,
            use_whatsapp: true,
            use_link: true,
            use_email: true,
            use_linkedin: false,
            opener: true,
            opener_svg: String::new(),
            closing_svg: String::new(),
            text_share: String::new(),
            text_copy: String::new(),
            css: String::new(),
        }
    }

    /// Build a configuration from element attributes.
    ///
    /// `lookup` resolves a kebab-case attribute name to its raw value if the
    /// attribute is present. String keys take the raw text verbatim; boolean
    /// keys coerce `"false"`/`"0"` and `"true"`/`"1"` and keep the default
    /// for anything else. Attributes not in the table are ignored.
    pub fn from_attributes(
        page: &PageContext,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Self::defaults(page);
        for (key, default) in CONFIG_DEFAULTS {
            let Some(raw) = lookup(&kebab_case(key)) else {
                continue;
            };
            match default {
                AttrDefault::Str(_) => config.set_string(key, raw),
                AttrDefault::Bool(d) => config.set_bool(key, coerce_bool(&raw, *d)),
            }
        }
        config
    }

    fn set_string(&mut self, key: &str, value: String) {
        match key {
            "locale" => self.locale = value,
            "shareUrl" => self.share_url = value,
            "shareTitle" => self.share_title = value,
            "openerSvg" => self.opener_svg = value,
            "closingSvg" => self.closing_svg = value,
            "textShare" => self.text_share = value,
            "textCopy" => self.text_copy = value,
            "css" => self.css = value,
            _ => {}
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        match key {
            "useFacebook" => self.use_facebook = value,
            "useTwitter" => self.use_twitter = value,
            "useWhatsapp" => self.use_whatsapp = value,
            "useLink" => self.use_link = value,
            "useEmail" => self.use_email = value,
            "useLinkedin" => self.use_linkedin = value,
            "opener" => self.opener = value,
            _ => {}
        }
    }
}

/// Configuration with locale, display strings and share links resolved.
///
/// Built once per connected element; the view renders from this plus the
/// current [`crate::UiState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSharer {
    pub config: SharerConfig,
    pub locale: Locale,
    pub text_share: String,
    pub text_copy: String,
    pub links: ShareLinks,
}

impl ResolvedSharer {
    pub fn new(config: SharerConfig, document_language: &str) -> Self {
        let locale = resolve_locale(&config.locale, document_language);
        let text_share = if config.text_share.is_empty() {
            translate(TextKey::Share, locale).to_string()
        } else {
            config.text_share.clone()
        };
        let text_copy = if config.text_copy.is_empty() {
            translate(TextKey::CopiedToClipboard, locale).to_string()
        } else {
            config.text_copy.clone()
        };
        let links = ShareLinks::build(&config.share_url, &config.share_title);
        Self {
            config,
            locale,
            text_share,
            text_copy,
            links,
        }
    }
}

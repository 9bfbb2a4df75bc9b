//! Two-language translation table and locale resolution.

/// Display locale. Everything that is not exactly `"fi"` renders English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Fi,
    En,
}

/// Keys into the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    /// Opener label.
    Share,
    /// Tooltip shown after a copy.
    CopiedToClipboard,
    /// Aria label of the copy-link destination.
    CopyToClipboard,
    /// Aria label of the email destination.
    ShareViaEmail,
}

/// Resolve the display locale from the explicit `locale` attribute, falling
/// back to the host document's language when the attribute is empty.
pub fn resolve_locale(explicit: &str, document_language: &str) -> Locale {
    let tag = if explicit.is_empty() {
        document_language
    } else {
        explicit
    };
    if tag == "fi" { Locale::Fi } else { Locale::En }
}

pub fn translate(key: TextKey, locale: Locale) -> &'static str {
    match (key, locale) {
        (TextKey::Share, Locale::Fi) => "Jaa",
        (TextKey::Share, Locale::En) => "Share",
        // "Kopiotu" is how the source strings spell it; kept verbatim.
        (TextKey::CopiedToClipboard, Locale::Fi) => "Kopiotu leikepöydälle",
        (TextKey::CopiedToClipboard, Locale::En) => "Copied to clipboard",
        (TextKey::CopyToClipboard, Locale::Fi) => "Kopioi leikepöydälle",
        (TextKey::CopyToClipboard, Locale::En) => "Copy to clipboard",
        (TextKey::ShareViaEmail, Locale::Fi) => "Jaa sähköpostilla",
        (TextKey::ShareViaEmail, Locale::En) => "Share via email",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_locale_wins() {
        assert_eq!(resolve_locale("fi", "en"), Locale::Fi);
        assert_eq!(resolve_locale("fi", ""), Locale::Fi);
        assert_eq!(resolve_locale("en", "fi"), Locale::En);
    }

    #[test]
    fn test_empty_locale_falls_back_to_document() {
        assert_eq!(resolve_locale("", "fi"), Locale::Fi);
        assert_eq!(resolve_locale("", "en"), Locale::En);
        assert_eq!(resolve_locale("", ""), Locale::En);
    }

    #[test]
    fn test_unknown_tags_are_english() {
        // Region-qualified Finnish does not match; the check is exact.
        assert_eq!(resolve_locale("fi-FI", "fi"), Locale::En);
        assert_eq!(resolve_locale("", "fi-FI"), Locale::En);
        assert_eq!(resolve_locale("sv", "fi"), Locale::En);
    }

    #[test]
    fn test_translations() {
        assert_eq!(translate(TextKey::Share, Locale::Fi), "Jaa");
        assert_eq!(translate(TextKey::Share, Locale::En), "Share");
        assert_eq!(
            translate(TextKey::CopiedToClipboard, Locale::En),
            "Copied to clipboard"
        );
        assert_eq!(
            translate(TextKey::ShareViaEmail, Locale::Fi),
            "Jaa sähköpostilla"
        );
    }
}

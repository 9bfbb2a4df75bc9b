//! Share destinations and their intent URLs.
//!
//! Each destination has a documented intent format; the parameter names and
//! their order are part of the contract with the receiving network, so the
//! templates below are built verbatim rather than through a query-string
//! builder that might reorder them.

use crate::config::SharerConfig;
use crate::i18n::{translate, Locale, TextKey};
use urlencoding::encode;

/// Outbound share-intent URLs for one (url, title) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub whatsapp: String,
    pub email: String,
}

impl ShareLinks {
    pub fn build(share_url: &str, share_title: &str) -> Self {
        let url = encode(share_url);
        let title = encode(share_title);
        Self {
            facebook: format!("https://www.facebook.com/sharer.php?u={url}"),
            twitter: format!("https://twitter.com/intent/tweet?text={title}&url={url}"),
            linkedin: format!(
                "https://www.linkedin.com/shareArticle?mini=true&url={url}&title={title}&summary=&source=LinkedIn"
            ),
            whatsapp: format!("whatsapp://send?text={url}"),
            email: format!("mailto:?subject={title}&body={url}"),
        }
    }
}

/// One entry in the share list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Facebook,
    Twitter,
    LinkedIn,
    WhatsApp,
    CopyLink,
    Email,
}

impl Destination {
    /// Render order of the list. Fixed regardless of which toggles are on.
    pub const ALL: [Destination; 6] = [
        Destination::Facebook,
        Destination::Twitter,
        Destination::LinkedIn,
        Destination::WhatsApp,
        Destination::CopyLink,
        Destination::Email,
    ];

    pub fn enabled(self, config: &SharerConfig) -> bool {
        match self {
            Destination::Facebook => config.use_facebook,
            Destination::Twitter => config.use_twitter,
            Destination::LinkedIn => config.use_linkedin,
            Destination::WhatsApp => config.use_whatsapp,
            Destination::CopyLink => config.use_link,
            Destination::Email => config.use_email,
        }
    }

    /// Network names stay English; the two local actions are localized.
    pub fn aria_label(self, locale: Locale) -> &'static str {
        match self {
            Destination::Facebook => "Facebook",
            Destination::Twitter => "Twitter",
            Destination::LinkedIn => "LinkedIn",
            Destination::WhatsApp => "WhatsApp",
            Destination::CopyLink => translate(TextKey::CopyToClipboard, locale),
            Destination::Email => translate(TextKey::ShareViaEmail, locale),
        }
    }

    /// The anchor href. Copy-link is a local action with a fragment href.
    pub fn href(self, links: &ShareLinks) -> &str {
        match self {
            Destination::Facebook => &links.facebook,
            Destination::Twitter => &links.twitter,
            Destination::LinkedIn => &links.linkedin,
            Destination::WhatsApp => &links.whatsapp,
            Destination::CopyLink => "#copy-link-to-clipboard",
            Destination::Email => &links.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PageContext, SharerConfig};

    #[test]
    fn test_intent_urls_encode_url_and_title() {
        let links = ShareLinks::build("https://x.test/a b", "A & B");
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer.php?u=https%3A%2F%2Fx.test%2Fa%20b"
        );
        assert_eq!(
            links.twitter,
            "https://twitter.com/intent/tweet?text=A%20%26%20B&url=https%3A%2F%2Fx.test%2Fa%20b"
        );
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/shareArticle?mini=true&url=https%3A%2F%2Fx.test%2Fa%20b&title=A%20%26%20B&summary=&source=LinkedIn"
        );
        assert_eq!(links.whatsapp, "whatsapp://send?text=https%3A%2F%2Fx.test%2Fa%20b");
        assert_eq!(links.email, "mailto:?subject=A%20%26%20B&body=https%3A%2F%2Fx.test%2Fa%20b");
    }

    #[test]
    fn test_toggle_gates_exactly_one_destination() {
        let page = PageContext::default();
        let mut config = SharerConfig::defaults(&page);
        config.use_twitter = false;
        let enabled: Vec<Destination> = Destination::ALL
            .into_iter()
            .filter(|d| d.enabled(&config))
            .collect();
        assert_eq!(
            enabled,
            vec![
                Destination::Facebook,
                Destination::WhatsApp,
                Destination::CopyLink,
                Destination::Email,
            ]
        );
    }

    #[test]
    fn test_linkedin_off_by_default() {
        let config = SharerConfig::defaults(&PageContext::default());
        assert!(!Destination::LinkedIn.enabled(&config));
        let others = [
            Destination::Facebook,
            Destination::Twitter,
            Destination::WhatsApp,
            Destination::CopyLink,
            Destination::Email,
        ];
        assert!(others.iter().all(|d| d.enabled(&config)));
    }

    #[test]
    fn test_aria_labels_localized_for_local_actions_only() {
        assert_eq!(Destination::Facebook.aria_label(Locale::Fi), "Facebook");
        assert_eq!(
            Destination::CopyLink.aria_label(Locale::Fi),
            "Kopioi leikepöydälle"
        );
        assert_eq!(
            Destination::Email.aria_label(Locale::En),
            "Share via email"
        );
    }
}

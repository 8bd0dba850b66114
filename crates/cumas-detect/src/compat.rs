//! Safari Compatibility Table
//!
//! Static lookup keyed by normalized capability id (or the bare capability
//! key when normalization is off). Capabilities without an entry get no
//! compatibility record at all.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::Compatibility;

const SAFARI_COMPAT_DOCS: &str = "https://developer.apple.com/documentation/safariservices/safari_web_extensions/assessing_your_safari_web_extension_s_browser_compatibility";

struct Entry {
    keys: &'static [&'static str],
    safari: bool,
    notes: Option<&'static str>,
    docs: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        keys: &["background"],
        safari: true,
        notes: Some("Background pages must be non-persistent; service workers need Safari 16.4 or later."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["content_scripts"],
        safari: true,
        notes: None,
        docs: None,
    },
    Entry {
        keys: &["action_popup", "popup"],
        safari: true,
        notes: None,
        docs: None,
    },
    Entry {
        keys: &["sidebar"],
        safari: false,
        notes: Some("Safari does not support side panels or sidebar actions."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["devtools_page", "devtools"],
        safari: true,
        notes: Some("Web Inspector extensions require Safari 16 or later."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["options"],
        safari: true,
        notes: None,
        docs: None,
    },
    Entry {
        keys: &["chrome_url_overrides.newtab", "newtab"],
        safari: true,
        notes: Some("New tab overrides are honored only when the user selects the extension's page in Safari settings."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["chrome_url_overrides.bookmarks", "bookmarks"],
        safari: false,
        notes: Some("Safari does not allow overriding the bookmarks page."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["chrome_url_overrides.history", "history"],
        safari: false,
        notes: Some("Safari does not allow overriding the history page."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["sandbox"],
        safari: false,
        notes: Some("Safari ignores the sandbox manifest key."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["web_accessible_resources", "web_resources"],
        safari: true,
        notes: None,
        docs: None,
    },
    Entry {
        keys: &["omnibox"],
        safari: false,
        notes: Some("Safari does not support omnibox keywords."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["commands"],
        safari: true,
        notes: Some("Keyboard shortcuts are available on macOS only."),
        docs: None,
    },
    Entry {
        keys: &["chrome_settings_overrides.homepage", "settings_homepage"],
        safari: false,
        notes: Some("Safari does not allow extensions to change the homepage."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &[
            "chrome_settings_overrides.search_provider",
            "settings_search_provider",
        ],
        safari: false,
        notes: Some("Safari does not allow extensions to change the search provider."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &[
            "chrome_settings_overrides.startup_pages",
            "settings_startup_pages",
        ],
        safari: false,
        notes: Some("Safari does not allow extensions to change startup pages."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["declarative_net_request"],
        safari: true,
        notes: Some("Supported since Safari 15; some rule actions and conditions are unavailable."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
    Entry {
        keys: &["tts_engine"],
        safari: false,
        notes: Some("Safari does not support text-to-speech engine extensions."),
        docs: Some(SAFARI_COMPAT_DOCS),
    },
];

static SAFARI_COMPAT: Lazy<HashMap<&'static str, Compatibility>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for entry in ENTRIES {
        let record = Compatibility {
            safari: entry.safari,
            notes: entry.notes.map(str::to_string),
            docs: entry.docs.map(str::to_string),
        };
        for key in entry.keys {
            table.insert(*key, record.clone());
        }
    }
    table
});

/// Compatibility metadata for a capability key, if any is known
pub fn lookup(key: &str) -> Option<&'static Compatibility> {
    SAFARI_COMPAT.get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RULES;

    #[test]
    fn test_every_rule_has_an_entry_by_id_and_key() {
        for rule in RULES {
            assert!(lookup(rule.id).is_some(), "missing id {}", rule.id);
            assert!(
                lookup(rule.capability).is_some(),
                "missing capability {}",
                rule.capability
            );
        }
    }

    #[test]
    fn test_sidebar_unsupported() {
        let compat = lookup("sidebar").unwrap();
        assert!(!compat.safari);
        assert_eq!(
            compat.notes.as_deref(),
            Some("Safari does not support side panels or sidebar actions.")
        );
        assert_eq!(compat.docs.as_deref(), Some(SAFARI_COMPAT_DOCS));
    }

    #[test]
    fn test_fallback_has_no_entry() {
        assert!(lookup("manifest").is_none());
        assert!(lookup("unknown").is_none());
    }
}

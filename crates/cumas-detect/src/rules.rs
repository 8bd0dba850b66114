//! Capability Rule Table
//!
//! Each capability is a declarative descriptor: a set of field checks OR-ed
//! together, plus the fixed metadata attached to the record. Adding a
//! capability means adding a descriptor; the evaluator never changes.

use serde_json::Value;

use crate::predicates::{
    has_web_resource, is_non_empty_array, is_non_empty_object, is_non_empty_string,
    is_non_empty_string_array, is_truthy, lookup,
};

/// How a single manifest field must look to count as present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    NonEmptyString,
    NonEmptyStringArray,
    NonEmptyArray,
    NonEmptyObject,
    Truthy,
    WebResources,
}

impl Presence {
    pub fn test(self, value: &Value) -> bool {
        match self {
            Presence::NonEmptyString => is_non_empty_string(value),
            Presence::NonEmptyStringArray => is_non_empty_string_array(value),
            Presence::NonEmptyArray => is_non_empty_array(value),
            Presence::NonEmptyObject => is_non_empty_object(value),
            Presence::Truthy => is_truthy(value),
            Presence::WebResources => has_web_resource(value),
        }
    }
}

/// One manifest field path and the shape it must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub path: &'static str,
    pub presence: Presence,
}

impl FieldCheck {
    pub fn matches(&self, manifest: &Value) -> bool {
        lookup(manifest, self.path).is_some_and(|value| self.presence.test(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityRule {
    pub capability: &'static str,
    pub description: &'static str,
    /// Normalized id; also the compatibility lookup key
    pub id: &'static str,
    /// Aliases across manifest dialects, any one of which triggers the rule
    pub checks: &'static [FieldCheck],
}

impl CapabilityRule {
    pub fn matches(&self, manifest: &Value) -> bool {
        self.checks.iter().any(|check| check.matches(manifest))
    }

    /// Every inspected path, regardless of which alias matched
    pub fn field_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|check| check.path)
    }
}

const fn check(path: &'static str, presence: Presence) -> FieldCheck {
    FieldCheck { path, presence }
}

use Presence::*;

pub static RULES: &[CapabilityRule] = &[
    CapabilityRule {
        capability: "background",
        description: "Runs background scripts or a service worker",
        id: "background",
        checks: &[
            check("background.page", NonEmptyString),
            check("background.service_worker", NonEmptyString),
            check("background.scripts", NonEmptyStringArray),
        ],
    },
    CapabilityRule {
        capability: "content_scripts",
        description: "Injects content scripts into web pages",
        id: "content_scripts",
        checks: &[check("content_scripts", NonEmptyArray)],
    },
    CapabilityRule {
        capability: "popup",
        description: "Shows a popup when the toolbar button is clicked",
        id: "action_popup",
        checks: &[
            check("action.default_popup", NonEmptyString),
            check("browser_action.default_popup", NonEmptyString),
            check("page_action.default_popup", NonEmptyString),
        ],
    },
    CapabilityRule {
        capability: "sidebar",
        description: "Provides a sidebar or side panel",
        id: "sidebar",
        checks: &[
            check("side_panel.default_path", NonEmptyString),
            check("sidebar_action.default_panel", NonEmptyString),
        ],
    },
    CapabilityRule {
        capability: "devtools",
        description: "Extends the browser developer tools",
        id: "devtools_page",
        checks: &[check("devtools_page", NonEmptyString)],
    },
    CapabilityRule {
        capability: "options",
        description: "Provides an options page for user settings",
        id: "options",
        checks: &[
            check("options_ui.page", NonEmptyString),
            check("options_page", NonEmptyString),
        ],
    },
    CapabilityRule {
        capability: "newtab",
        description: "Replaces the new tab page",
        id: "chrome_url_overrides.newtab",
        checks: &[check("chrome_url_overrides.newtab", NonEmptyString)],
    },
    CapabilityRule {
        capability: "bookmarks",
        description: "Replaces the bookmarks page",
        id: "chrome_url_overrides.bookmarks",
        checks: &[check("chrome_url_overrides.bookmarks", NonEmptyString)],
    },
    CapabilityRule {
        capability: "history",
        description: "Replaces the history page",
        id: "chrome_url_overrides.history",
        checks: &[check("chrome_url_overrides.history", NonEmptyString)],
    },
    CapabilityRule {
        capability: "sandbox",
        description: "Serves sandboxed pages in a unique origin",
        id: "sandbox",
        checks: &[check("sandbox.pages", NonEmptyStringArray)],
    },
    CapabilityRule {
        capability: "web_resources",
        description: "Exposes packaged resources to web pages",
        id: "web_accessible_resources",
        checks: &[check("web_accessible_resources", WebResources)],
    },
    CapabilityRule {
        capability: "omnibox",
        description: "Registers an address bar keyword",
        id: "omnibox",
        checks: &[check("omnibox.keyword", Truthy)],
    },
    CapabilityRule {
        capability: "commands",
        description: "Defines keyboard shortcuts",
        id: "commands",
        checks: &[check("commands", NonEmptyObject)],
    },
    CapabilityRule {
        capability: "settings_homepage",
        description: "Overrides the browser homepage",
        id: "chrome_settings_overrides.homepage",
        checks: &[check("chrome_settings_overrides.homepage", Truthy)],
    },
    CapabilityRule {
        capability: "settings_search_provider",
        description: "Overrides the default search provider",
        id: "chrome_settings_overrides.search_provider",
        checks: &[check("chrome_settings_overrides.search_provider", Truthy)],
    },
    CapabilityRule {
        capability: "settings_startup_pages",
        description: "Overrides the pages opened at browser startup",
        id: "chrome_settings_overrides.startup_pages",
        checks: &[check("chrome_settings_overrides.startup_pages", NonEmptyArray)],
    },
    CapabilityRule {
        capability: "declarative_net_request",
        description: "Blocks or modifies network requests with declarative rules",
        id: "declarative_net_request",
        checks: &[check("declarative_net_request.rule_resources", NonEmptyArray)],
    },
    CapabilityRule {
        capability: "tts_engine",
        description: "Provides a text-to-speech engine",
        id: "tts_engine",
        checks: &[check("tts_engine.voices", NonEmptyArray)],
    },
];

/// Find a rule by capability key
pub fn rule(capability: &str) -> Option<&'static CapabilityRule> {
    RULES.iter().find(|r| r.capability == capability)
}

//! Page Content Blobs
//!
//! Admin-edited structured payloads keyed by page. No schema beyond
//! "JSON object"; updates merge supplied top-level keys only.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Known content pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Home,
    About,
    Contact,
    Footer,
    Settings,
}

impl PageKey {
    pub const ALL: [PageKey; 5] = [
        PageKey::Home,
        PageKey::About,
        PageKey::Contact,
        PageKey::Footer,
        PageKey::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::About => "about",
            PageKey::Contact => "contact",
            PageKey::Footer => "footer",
            PageKey::Settings => "settings",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(PageKey::Home),
            "about" => Some(PageKey::About),
            "contact" => Some(PageKey::Contact),
            "footer" => Some(PageKey::Footer),
            "settings" => Some(PageKey::Settings),
            _ => None,
        }
    }
}

/// Merge `patch` into `existing` at the top level: every supplied key
/// replaces the stored value wholesale, unspecified keys survive.
/// Non-object inputs are treated as empty objects.
pub fn merge_page_content(existing: Value, patch: Value) -> Value {
    let mut base = match existing {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if let Value::Object(patch) = patch {
        for (key, value) in patch {
            base.insert(key, value);
        }
    }
    Value::Object(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_key_round_trips() {
        for key in PageKey::ALL {
            assert_eq!(PageKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(PageKey::parse("pricing"), None);
    }

    #[test]
    fn merge_replaces_only_supplied_top_level_keys() {
        let existing = json!({"hero": {"title": "Old"}, "intro": "keep"});
        let patch = json!({"hero": {"title": "New", "subtitle": "s"}});
        let merged = merge_page_content(existing, patch);
        assert_eq!(merged["hero"]["title"], "New");
        assert_eq!(merged["hero"]["subtitle"], "s");
        assert_eq!(merged["intro"], "keep");
    }

    #[test]
    fn merge_into_missing_blob_starts_from_empty_object() {
        let merged = merge_page_content(Value::Null, json!({"a": 1}));
        assert_eq!(merged, json!({"a": 1}));
    }

    #[test]
    fn non_object_patch_changes_nothing() {
        let merged = merge_page_content(json!({"a": 1}), Value::String("x".into()));
        assert_eq!(merged, json!({"a": 1}));
    }
}

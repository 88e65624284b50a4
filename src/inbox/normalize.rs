use std::collections::HashSet;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::model::{Category, NormalizedItem, RawRecord};
use super::time::parse_timestamp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Unwrap {
    Bare,
    Key(&'static str),
}

struct Chain {
    keys: &'static [&'static str],
    default: &'static str,
}

struct FieldRules {
    from: Chain,
    subject: Chain,
    preview: Chain,
    alternate_date: &'static str,
}

static MAIL_RULES: FieldRules = FieldRules {
    from: Chain {
        keys: &["from", "sender"],
        default: "Unknown",
    },
    subject: Chain {
        keys: &["subject"],
        default: "No Subject",
    },
    preview: Chain {
        keys: &["preview", "body"],
        default: "",
    },
    alternate_date: "created_at",
};

static LETTER_RULES: FieldRules = FieldRules {
    from: Chain {
        keys: &["from", "sender"],
        default: "Unknown",
    },
    subject: Chain {
        keys: &["subject", "title"],
        default: "Letter",
    },
    preview: Chain {
        keys: &["preview", "description"],
        default: "",
    },
    alternate_date: "received_at",
};

static PACKAGE_RULES: FieldRules = FieldRules {
    from: Chain {
        keys: &["from", "sender", "carrier"],
        default: "Unknown",
    },
    subject: Chain {
        keys: &["subject", "tracking_number"],
        default: "Package",
    },
    preview: Chain {
        keys: &["preview", "description", "status"],
        default: "",
    },
    alternate_date: "received_at",
};

fn rules(category: Category) -> &'static FieldRules {
    match category {
        Category::Mail => &MAIL_RULES,
        Category::Letter => &LETTER_RULES,
        Category::Package => &PACKAGE_RULES,
    }
}

fn unwrap_strategies(category: Category) -> [Unwrap; 3] {
    [Unwrap::Bare, Unwrap::Key(category.feed_key()), Unwrap::Key("data")]
}

/// Maps one feed payload into normalized items. Never fails: a payload that
/// holds no list yields nothing, and missing fields fall back to defaults.
pub fn normalize(category: Category, payload: &Value, now: DateTime<Utc>) -> Vec<NormalizedItem> {
    let Some(records) = unwrap_records(category, payload) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let mut item = normalize_record(category, index, raw, now);
            if !seen.insert(item.id.clone()) {
                item.id = format!("{}#{index}", item.id);
            }
            item
        })
        .collect()
}

fn unwrap_records(category: Category, payload: &Value) -> Option<&Vec<Value>> {
    unwrap_strategies(category)
        .into_iter()
        .find_map(|strategy| match strategy {
            Unwrap::Bare => payload.as_array(),
            Unwrap::Key(key) => payload.get(key).and_then(Value::as_array),
        })
}

pub fn normalize_record(
    category: Category,
    index: usize,
    raw: &RawRecord,
    now: DateTime<Utc>,
) -> NormalizedItem {
    let rules = rules(category);

    NormalizedItem {
        id: resolve_id(category, index, raw),
        category,
        from: resolve_text(raw, &rules.from),
        subject: resolve_text(raw, &rules.subject),
        preview: resolve_text(raw, &rules.preview),
        received_at: ["date", rules.alternate_date]
            .into_iter()
            .filter_map(|key| raw.get(key))
            .find_map(parse_timestamp)
            .unwrap_or(now),
        unread: resolve_unread(raw.get("unread")),
        raw: Arc::new(raw.clone()),
    }
}

fn resolve_text(raw: &RawRecord, chain: &Chain) -> String {
    chain
        .keys
        .iter()
        .find_map(|key| text_value(raw.get(*key)))
        .unwrap_or_else(|| chain.default.to_string())
}

fn text_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn resolve_unread(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_none_or(|n| n != 0.0),
        _ => true,
    }
}

pub(crate) fn raw_id(raw: &RawRecord) -> Option<String> {
    text_value(raw.get("id"))
}

// Feeds number their records independently, so raw ids are scoped by category.
fn resolve_id(category: Category, index: usize, raw: &RawRecord) -> String {
    if let Some(id) = raw_id(raw) {
        return format!("{}:{id}", category.as_str());
    }

    let canonical = serde_json::to_vec(raw).unwrap_or_default();
    let digest = Sha256::digest(&canonical);
    format!(
        "{}-{}-{}",
        category.as_str(),
        index,
        URL_SAFE_NO_PAD.encode(&digest[..9])
    )
}

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

pub type RawRecord = Value;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mail,
    Letter,
    Package,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mail => "mail",
            Category::Letter => "letter",
            Category::Package => "package",
        }
    }

    pub fn feed_key(self) -> &'static str {
        match self {
            Category::Mail => "mail",
            Category::Letter => "letters",
            Category::Package => "packages",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizedItem {
    pub id: String,
    pub category: Category,
    pub from: String,
    pub subject: String,
    pub preview: String,
    pub received_at: DateTime<Utc>,
    pub unread: bool,
    #[serde(skip)]
    pub raw: Arc<RawRecord>,
}

impl NormalizedItem {
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.from,
            self.subject,
            self.preview,
            self.category.as_str()
        )
        .to_lowercase()
    }
}

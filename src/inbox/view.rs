use clap::ValueEnum;
use serde::Serialize;

use super::model::{Category, NormalizedItem};
use super::store::AggregateStore;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Mail,
    Letters,
    Packages,
    Unread,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct ViewState {
    pub filter: Filter,
    pub search: String,
}

impl ViewState {
    pub fn new(filter: Filter, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
        }
    }
}

/// Items visible under `view`, newest first. Equal timestamps keep source order.
pub fn visible_items<'a>(store: &'a AggregateStore, view: &ViewState) -> Vec<&'a NormalizedItem> {
    let mut items: Vec<&NormalizedItem> = match view.filter {
        Filter::All => store.all().iter().collect(),
        Filter::Mail => store.category(Category::Mail).iter().collect(),
        Filter::Letters => store.category(Category::Letter).iter().collect(),
        Filter::Packages => store.category(Category::Package).iter().collect(),
        Filter::Unread => store.all().iter().filter(|item| item.unread).collect(),
    };

    items.sort_by(|a, b| b.received_at.cmp(&a.received_at));

    if view.search.is_empty() {
        return items;
    }

    let needle = view.search.to_lowercase();
    items.retain(|item| item.search_text().contains(&needle));
    items
}

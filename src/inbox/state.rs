use chrono::{DateTime, Utc};

use super::detail::DetailView;
use super::model::{Category, NormalizedItem};
use super::normalize::normalize;
use super::source::FeedSource;
use super::store::{AggregateStore, Stats};
use super::view::{Filter, ViewState, visible_items};
use crate::error::{AppError, AppResult};
use crate::map::MapSlot;

#[derive(Debug, Clone, Default)]
pub struct InboxState {
    pub store: AggregateStore,
    pub view: ViewState,
}

impl InboxState {
    pub fn new(view: ViewState) -> Self {
        Self {
            store: AggregateStore::default(),
            view,
        }
    }

    /// Fetches all three feeds and swaps in a fresh store. Any failed feed
    /// aborts the reload and leaves the current store in place.
    pub async fn refresh<S: FeedSource>(
        &mut self,
        source: &S,
        now: DateTime<Utc>,
    ) -> AppResult<Stats> {
        let (mail, letters, packages) = tokio::try_join!(
            source.fetch(Category::Mail),
            source.fetch(Category::Letter),
            source.fetch(Category::Package),
        )
        .map_err(AppError::load)?;

        self.store = AggregateStore::load(
            normalize(Category::Mail, &mail, now),
            normalize(Category::Letter, &letters, now),
            normalize(Category::Package, &packages, now),
        );

        let stats = self.store.stats();
        log::info!(
            "inbox loaded: {} items ({} mail, {} letters, {} packages, {} unread)",
            stats.total,
            stats.per_category.mail,
            stats.per_category.letters,
            stats.per_category.packages,
            stats.unread
        );
        Ok(stats)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.view.filter = filter;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.search = search.into();
    }

    pub fn visible(&self) -> Vec<&NormalizedItem> {
        visible_items(&self.store, &self.view)
    }

    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    pub fn find(&self, id: &str) -> Option<&NormalizedItem> {
        self.store.find(id)
    }

    pub fn open_detail(&self, id: &str, map_slot: &mut MapSlot) -> AppResult<DetailView> {
        let matches = self.store.lookup(id);
        let item = match matches.as_slice() {
            [] => {
                return Err(AppError::NotFound(format!("no inbox item with id `{id}`")));
            }
            [item] => *item,
            many => {
                let candidates: Vec<_> = many.iter().map(|item| item.id.as_str()).collect();
                return Err(AppError::InvalidInput(format!(
                    "id `{id}` matches several items: {}",
                    candidates.join(", ")
                )));
            }
        };
        Ok(DetailView::open(item, map_slot))
    }
}

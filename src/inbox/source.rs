use serde_json::Value;

use super::model::Category;
use crate::error::AppResult;

#[allow(async_fn_in_trait)]
pub trait FeedSource {
    async fn fetch(&self, category: Category) -> AppResult<Value>;
}

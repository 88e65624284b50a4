pub mod detail;
pub mod model;
pub mod normalize;
pub mod source;
pub mod state;
pub mod store;
pub mod time;
pub mod view;

pub use detail::{DetailField, DetailView, LocationPoint};
pub use model::{Category, NormalizedItem, RawRecord};
pub use source::FeedSource;
pub use state::InboxState;
pub use store::{AggregateStore, CategoryCounts, Stats};
pub use view::{Filter, ViewState};

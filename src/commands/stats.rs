use crate::context::AppContext;
use crate::error::AppResult;
use crate::inbox::{Stats, ViewState};

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let state = ctx.load_inbox(ViewState::default()).await?;
    let stats = state.stats();
    ctx.output.emit(&summary_line(&stats), &stats)
}

fn summary_line(stats: &Stats) -> String {
    format!(
        "{} items: {} mail, {} letters, {} packages ({} unread)",
        stats.total,
        stats.per_category.mail,
        stats.per_category.letters,
        stats.per_category.packages,
        stats.unread
    )
}

use chrono::Utc;

use crate::cli::ShowArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::inbox::time::format_relative;
use crate::inbox::{DetailView, ViewState};
use crate::map::{MapSlot, coordinate_text};

pub async fn run(ctx: &AppContext, args: ShowArgs) -> AppResult<()> {
    let state = ctx.load_inbox(ViewState::default()).await?;
    let mut map_slot = MapSlot::default();
    let detail = state.open_detail(&args.id, &mut map_slot)?;

    let result = ctx.output.emit_lines(&detail_lines(&detail), &detail);

    detail.close(&mut map_slot);
    result
}

fn detail_lines(detail: &DetailView) -> Vec<String> {
    let item = &detail.item;
    let mut lines = vec![
        format!("{} | {} | {}", item.id, item.category, item.subject),
        format!("from: {}", item.from),
        format!(
            "received: {} ({})",
            item.received_at.format("%Y-%m-%d %H:%M UTC"),
            format_relative(item.received_at, Utc::now())
        ),
        format!("status: {}", if item.unread { "unread" } else { "read" }),
    ];

    if !item.preview.is_empty() {
        lines.push(String::new());
        lines.push(item.preview.clone());
    }

    if !detail.fields.is_empty() {
        lines.push(String::new());
        for field in &detail.fields {
            lines.push(format!("{}: {}", field.label, field.value));
        }
    }

    if let Some(point) = &detail.location {
        lines.push(String::new());
        lines.push(format!("location: {}", coordinate_text(point)));
        if let Some(map) = &detail.map {
            lines.push(format!("map: {}", map.text()));
        }
    }

    lines
}

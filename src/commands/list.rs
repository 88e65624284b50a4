use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::ListArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::inbox::time::format_relative;
use crate::inbox::{NormalizedItem, Stats, ViewState};

const PREVIEW_LIMIT: usize = 120;

#[derive(Debug, Serialize)]
struct ListView<'a> {
    view: &'a ViewState,
    stats: Stats,
    items: Vec<&'a NormalizedItem>,
}

pub async fn run(ctx: &AppContext, args: ListArgs) -> AppResult<()> {
    if args.limit == Some(0) {
        return Err(AppError::InvalidInput(
            "--limit must be greater than 0".to_string(),
        ));
    }

    let view = ViewState::new(args.filter, args.search.unwrap_or_default());
    let state = ctx.load_inbox(view).await?;

    let mut items = state.visible();
    if let Some(limit) = args.limit {
        items.truncate(limit);
    }

    let lines = if items.is_empty() {
        vec!["0 items".to_string()]
    } else {
        listing_lines(&items, Utc::now())
    };

    let listing = ListView {
        view: &state.view,
        stats: state.stats(),
        items,
    };
    ctx.output.emit_lines(&lines, &listing)
}

fn listing_lines(items: &[&NormalizedItem], now: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let marker = if item.unread { "*" } else { " " };
        let age = format_relative(item.received_at, now);

        lines.push(format!(
            "{marker} {}. [{}] {} ({age})",
            index + 1,
            item.category,
            item.id
        ));
        lines.push(format!("   from: {}", item.from));
        lines.push(format!("   subject: {}", item.subject));

        let preview = format_preview(&item.preview);
        if !preview.is_empty() {
            lines.push(String::new());
            lines.push(format!("   {preview}"));
        }

        if index + 1 < items.len() {
            lines.push(String::new());
        }
    }

    lines
}

fn format_preview(preview: &str) -> String {
    let decoded = html_escape::decode_html_entities(preview).to_string();
    let compact = decoded.split_whitespace().collect::<Vec<_>>().join(" ");

    if compact.len() <= PREVIEW_LIMIT {
        return compact;
    }

    let mut end = PREVIEW_LIMIT;
    while !compact.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &compact[..end])
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::inbox::Category;
    use crate::inbox::normalize::normalize_record;

    #[test]
    fn formats_preview_with_truncation() {
        let preview = format_preview(
            "this is a very long preview string that should be truncated at one hundred and twenty characters to keep list output compact and readable",
        );
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= PREVIEW_LIMIT + 3);
    }

    #[test]
    fn decodes_entities_and_collapses_whitespace() {
        let preview = format_preview("Your  parcel &amp; letter\n\tarrived &lt;today&gt;");
        assert_eq!(preview, "Your parcel & letter arrived <today>");
    }

    #[test]
    fn listing_marks_unread_items_and_ages() {
        let now = Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();
        let unread = normalize_record(
            Category::Mail,
            0,
            &json!({ "id": "m1", "from": "Ada", "subject": "Hi", "date": "2026-03-20T09:00:00Z" }),
            now,
        );
        let read = normalize_record(
            Category::Letter,
            0,
            &json!({ "id": "l1", "title": "Tax", "unread": false, "date": "2026-03-20T11:30:00Z" }),
            now,
        );

        let lines = listing_lines(&[&read, &unread], now);

        assert_eq!(lines[0], "  1. [letter] letter:l1 (30m)");
        assert_eq!(lines[1], "   from: Unknown");
        assert_eq!(lines[2], "   subject: Tax");
        assert_eq!(lines[4], "* 2. [mail] mail:m1 (3h)");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn empty_preview_stays_empty() {
        assert_eq!(format_preview("   "), "");
    }
}

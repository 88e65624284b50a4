use serde_json::Value;

use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let client = ctx.feed_client()?;
    let account = client.account().await?;
    ctx.output.emit(&account_line(&account), &account)
}

fn account_line(account: &Value) -> String {
    let field = |key: &str| {
        account
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    match (field("name"), field("email")) {
        (Some(name), Some(email)) => format!("{name} <{email}>"),
        (Some(name), None) => name.to_string(),
        (None, Some(email)) => email.to_string(),
        (None, None) => account.to_string(),
    }
}

use serde::Serialize;

use crate::cli::{ConfigCommand, ConfigSetArgs};
use crate::config::{self, Settings};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct SettingsView {
    profile: String,
    path: String,
    base_url: String,
    api_key_header: String,
    api_key: Option<String>,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => {
            let view = settings_view(ctx, &ctx.settings);
            let text = format!(
                "{}: {} (key: {}, header: {})",
                view.profile,
                view.base_url,
                view.api_key.as_deref().unwrap_or("not set"),
                view.api_key_header
            );
            ctx.output.emit(&text, &view)
        }
        ConfigCommand::Set(args) => {
            let updated = apply(config::load_stored_settings(&ctx.paths, &ctx.profile)?, args)?;
            config::save_settings(&ctx.paths, &ctx.profile, &updated)?;
            log::info!("saved settings for profile `{}`", ctx.profile);

            let view = settings_view(ctx, &updated);
            let text = format!("{}: settings saved to {}", view.profile, view.path);
            ctx.output.emit(&text, &view)
        }
    }
}

fn apply(mut settings: Settings, args: ConfigSetArgs) -> AppResult<Settings> {
    let ConfigSetArgs {
        api_key,
        base_url,
        api_key_header,
    } = args;

    if api_key.is_none() && base_url.is_none() && api_key_header.is_none() {
        return Err(AppError::InvalidInput(
            "nothing to set; pass --api-key, --base-url or --api-key-header".to_string(),
        ));
    }

    if let Some(base_url) = base_url {
        url::Url::parse(base_url.trim())?;
        settings.base_url = Some(base_url.trim().to_string());
    }
    if let Some(api_key) = api_key {
        settings.api_key = Some(api_key.trim().to_string());
    }
    if let Some(header) = api_key_header {
        settings.api_key_header = Some(header.trim().to_string());
    }

    Ok(settings)
}

fn settings_view(ctx: &AppContext, settings: &Settings) -> SettingsView {
    SettingsView {
        profile: ctx.profile.clone(),
        path: ctx.paths.settings_file(&ctx.profile).display().to_string(),
        base_url: settings.base_url(),
        api_key_header: settings.api_key_header(),
        api_key: settings.masked_api_key(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_update() {
        let args = ConfigSetArgs {
            api_key: None,
            base_url: None,
            api_key_header: None,
        };
        assert!(matches!(
            apply(Settings::default(), args),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_malformed_base_url() {
        let args = ConfigSetArgs {
            api_key: None,
            base_url: Some("not a url".to_string()),
            api_key_header: None,
        };
        assert!(matches!(
            apply(Settings::default(), args),
            Err(AppError::Url(_))
        ));
    }

    #[test]
    fn keeps_untouched_values() {
        let current = Settings {
            api_key: Some("old".to_string()),
            base_url: Some("https://mail.example.com".to_string()),
            api_key_header: None,
        };
        let args = ConfigSetArgs {
            api_key: Some(" new ".to_string()),
            base_url: None,
            api_key_header: None,
        };

        let updated = apply(current, args).expect("update should apply");
        assert_eq!(updated.api_key.as_deref(), Some("new"));
        assert_eq!(updated.base_url.as_deref(), Some("https://mail.example.com"));
    }
}

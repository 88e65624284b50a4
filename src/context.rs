use chrono::Utc;

use crate::api::client::FeedClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::inbox::{InboxState, ViewState};
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool, verbose: u8) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        let output = Output::new(json);

        Ok(Self {
            profile,
            verbose,
            paths,
            settings,
            output,
        })
    }

    pub fn feed_client(&self) -> AppResult<FeedClient> {
        let api_key = self.settings.api_key()?;
        Ok(FeedClient::new(
            &self.settings.base_url(),
            api_key,
            &self.settings.api_key_header(),
        ))
    }

    pub async fn load_inbox(&self, view: ViewState) -> AppResult<InboxState> {
        let client = self.feed_client()?;
        let mut state = InboxState::new(view);
        state.refresh(&client, Utc::now()).await?;
        Ok(state)
    }
}

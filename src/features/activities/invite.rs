//! Voice channel activity invites
//!
//! Creates Discord invites that launch an embedded activity (YouTube Together,
//! Poker Night, ...) in a voice channel.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Create invites through serenity's HTTP client
//! - 1.0.0: Initial REST implementation

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use serenity::http::Http;
use serenity::model::id::{ApplicationId, ChannelId};
use serenity::model::invite::InviteTargetType;
use std::sync::Arc;

const INVITE_URL_BASE: &str = "https://discord.com/invite";
const INVITE_MAX_AGE_SECS: u64 = 86400;

/// Activity name -> embedded application id
pub const ACTIVITY_APPLICATIONS: &[(&str, u64)] = &[
    ("youtube", 880218394199220334),
    ("youtubedev", 880218832743055411),
    ("poker", 755827207812677713),
    ("betrayal", 773336526917861400),
    ("fishing", 814288819477020702),
    ("chess", 832012774040141894),
    ("chessdev", 832012586023256104),
    ("lettertile", 879863686565621790),
    ("wordsnack", 879863976006127627),
    ("doodlecrew", 878067389634314250),
    ("awkword", 879863881349087252),
    ("spellcast", 852509694341283871),
    ("checkers", 832013003968348200),
    ("puttparty", 763133495793942528),
    ("sketchheads", 902271654783242291),
    ("ocho", 832025144389533716),
];

pub fn application_id(activity: &str) -> Option<u64> {
    ACTIVITY_APPLICATIONS
        .iter()
        .find(|(name, _)| *name == activity)
        .map(|(_, id)| *id)
}

/// A created activity invite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityInvite {
    /// Full invite link, posted verbatim to the channel
    pub code: String,
}

#[async_trait]
pub trait ActivityInviteService: Send + Sync {
    async fn create_invite(&self, voice_channel_id: u64, activity: &str) -> Result<ActivityInvite>;
}

/// The Discord call behind an activity invite, returning the raw invite code
#[async_trait]
pub trait InviteEndpoint: Send + Sync {
    async fn create_application_invite(
        &self,
        channel_id: u64,
        application_id: u64,
        max_age_secs: u64,
    ) -> Result<String>;
}

#[async_trait]
impl InviteEndpoint for Http {
    async fn create_application_invite(
        &self,
        channel_id: u64,
        application_id: u64,
        max_age_secs: u64,
    ) -> Result<String> {
        let invite = ChannelId(channel_id)
            .create_invite(self, |invite| {
                invite
                    .max_age(max_age_secs)
                    .max_uses(0)
                    .temporary(false)
                    .target_type(InviteTargetType::EmmbeddedApplication)
                    .target_application_id(ApplicationId(application_id))
            })
            .await?;
        Ok(invite.code)
    }
}

/// Invite service backed by serenity's HTTP client (rate limits, user agent, auth)
#[derive(Clone)]
pub struct DiscordActivityInvites {
    endpoint: Arc<dyn InviteEndpoint>,
}

impl DiscordActivityInvites {
    pub fn new(http: Arc<Http>) -> Self {
        Self::with_endpoint(http)
    }

    pub fn with_endpoint(endpoint: Arc<dyn InviteEndpoint>) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl ActivityInviteService for DiscordActivityInvites {
    async fn create_invite(&self, voice_channel_id: u64, activity: &str) -> Result<ActivityInvite> {
        let application_id =
            application_id(activity).ok_or_else(|| anyhow!("unknown activity `{activity}`"))?;
        debug!("Creating {activity} invite for voice channel {voice_channel_id}");

        let code = self
            .endpoint
            .create_application_invite(voice_channel_id, application_id, INVITE_MAX_AGE_SECS)
            .await
            .with_context(|| format!("Discord refused the {activity} invite"))?;

        Ok(ActivityInvite {
            code: format!("{INVITE_URL_BASE}/{code}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeEndpoint {
        calls: Mutex<Vec<(u64, u64, u64)>>,
        error: Option<&'static str>,
    }

    #[async_trait]
    impl InviteEndpoint for FakeEndpoint {
        async fn create_application_invite(
            &self,
            channel_id: u64,
            application_id: u64,
            max_age_secs: u64,
        ) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((channel_id, application_id, max_age_secs));
            match self.error {
                Some(message) => Err(anyhow!(message)),
                None => Ok("aBcDeF".to_string()),
            }
        }
    }

    #[test]
    fn test_application_id_lookup() {
        assert_eq!(application_id("youtube"), Some(880218394199220334));
        assert_eq!(application_id("chess"), Some(832012774040141894));
        assert!(application_id("karaoke").is_none());
    }

    #[test]
    fn test_activity_names_unique() {
        let mut names: Vec<_> = ACTIVITY_APPLICATIONS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ACTIVITY_APPLICATIONS.len());
    }

    #[tokio::test]
    async fn test_invite_code_wrapped_into_link() {
        let endpoint = Arc::new(FakeEndpoint::default());
        let service = DiscordActivityInvites::with_endpoint(endpoint.clone());

        let invite = service.create_invite(42, "youtube").await.unwrap();

        assert_eq!(invite.code, "https://discord.com/invite/aBcDeF");
        assert_eq!(
            *endpoint.calls.lock().unwrap(),
            vec![(42, 880218394199220334, 86400)]
        );
    }

    #[tokio::test]
    async fn test_discord_error_propagates_with_activity() {
        let endpoint = Arc::new(FakeEndpoint {
            error: Some("Missing Permissions"),
            ..Default::default()
        });
        let service = DiscordActivityInvites::with_endpoint(endpoint);

        let err = service.create_invite(42, "poker").await.unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("poker"));
        assert!(chain.contains("Missing Permissions"));
    }

    #[tokio::test]
    async fn test_unknown_activity_fails_before_request() {
        let endpoint = Arc::new(FakeEndpoint::default());
        let service = DiscordActivityInvites::with_endpoint(endpoint.clone());

        let err = service.create_invite(42, "karaoke").await.unwrap_err();
        assert!(err.to_string().contains("unknown activity"));
        assert!(endpoint.calls.lock().unwrap().is_empty());
    }
}

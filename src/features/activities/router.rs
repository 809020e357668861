//! Fixed triggers for voice channel activities
//!
//! Exact-match literals such as `/youtube` bypass the prefix pipeline and
//! start an activity in the author's voice channel.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Contain invite failures with a localized reply
//! - 1.0.0: Initial trigger table

use log::{error, info, warn};
use std::collections::HashMap;
use std::sync::Arc;

use super::invite::ActivityInviteService;
use crate::commands::context::{IncomingMessage, Responder};
use crate::core::MessageCatalog;

/// Trigger literal -> activity name
pub const FIXED_TRIGGERS: &[(&str, &str)] = &[
    ("/youtube", "youtube"),
    ("/poker", "poker"),
    ("/ajedrez", "chess"),
    ("/amogus", "betrayal"),
    ("/fishing", "fishing"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Not a fixed trigger (or the author is not in voice); continue to the dispatcher
    NotMatched,
    Invited { activity: &'static str, code: String },
    Failed { activity: &'static str },
}

pub struct FixedTriggerRouter {
    triggers: HashMap<&'static str, &'static str>,
    service: Arc<dyn ActivityInviteService>,
    catalog: Arc<MessageCatalog>,
}

impl FixedTriggerRouter {
    pub fn new(service: Arc<dyn ActivityInviteService>, catalog: Arc<MessageCatalog>) -> Self {
        Self {
            triggers: FIXED_TRIGGERS.iter().copied().collect(),
            service,
            catalog,
        }
    }

    /// Activity for a message whose entire content is a trigger
    pub fn activity_for(&self, content: &str) -> Option<&'static str> {
        self.triggers.get(content).copied()
    }

    pub async fn route(&self, message: &IncomingMessage, responder: &dyn Responder) -> RouteOutcome {
        let Some(voice_channel_id) = message.voice_channel_id else {
            return RouteOutcome::NotMatched;
        };
        let Some(activity) = self.activity_for(&message.content) else {
            return RouteOutcome::NotMatched;
        };

        match self.service.create_invite(voice_channel_id, activity).await {
            Ok(invite) => {
                info!(
                    "🎮 {activity} invite created for user {} in voice channel {voice_channel_id}",
                    message.author_id
                );
                if let Err(e) = responder.send(&invite.code).await {
                    warn!("Failed to post {activity} invite: {e}");
                }
                RouteOutcome::Invited {
                    activity,
                    code: invite.code,
                }
            }
            Err(e) => {
                error!("Failed to create {activity} invite for channel {voice_channel_id}: {e:?}");
                if let Err(why) = responder.reply(&self.catalog.get("common.errorActivity")).await {
                    error!("Failed to send activity error message: {why}");
                }
                RouteOutcome::Failed { activity }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::testing::{message, RecordingResponder};
    use crate::features::activities::invite::ActivityInvite;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockInvites {
        calls: Mutex<Vec<(u64, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl ActivityInviteService for MockInvites {
        async fn create_invite(&self, voice_channel_id: u64, activity: &str) -> Result<ActivityInvite> {
            self.calls
                .lock()
                .unwrap()
                .push((voice_channel_id, activity.to_string()));
            if self.fail {
                anyhow::bail!("missing CREATE_INSTANT_INVITE permission");
            }
            Ok(ActivityInvite {
                code: format!("https://discord.com/invite/{activity}-code"),
            })
        }
    }

    fn router(service: Arc<MockInvites>) -> FixedTriggerRouter {
        FixedTriggerRouter::new(service, Arc::new(MessageCatalog::english()))
    }

    #[tokio::test]
    async fn test_youtube_trigger_in_voice() {
        let service = Arc::new(MockInvites::default());
        let responder = RecordingResponder::default();

        let outcome = router(service.clone())
            .route(&message("/youtube", 7, Some(99)), &responder)
            .await;

        assert_eq!(
            outcome,
            RouteOutcome::Invited {
                activity: "youtube",
                code: "https://discord.com/invite/youtube-code".to_string()
            }
        );
        assert_eq!(*service.calls.lock().unwrap(), vec![(99, "youtube".to_string())]);
        assert_eq!(responder.sent(), vec!["https://discord.com/invite/youtube-code"]);
        assert!(responder.replies().is_empty());
    }

    #[tokio::test]
    async fn test_trigger_table_mapping() {
        let service = Arc::new(MockInvites::default());
        let r = router(service.clone());
        let responder = RecordingResponder::default();

        for trigger in ["/poker", "/ajedrez", "/amogus", "/fishing"] {
            r.route(&message(trigger, 7, Some(1)), &responder).await;
        }
        let activities: Vec<_> = service.calls.lock().unwrap().iter().map(|(_, a)| a.clone()).collect();
        assert_eq!(activities, vec!["poker", "chess", "betrayal", "fishing"]);
    }

    #[tokio::test]
    async fn test_not_in_voice_is_not_matched() {
        let service = Arc::new(MockInvites::default());
        let responder = RecordingResponder::default();

        let outcome = router(service.clone())
            .route(&message("/youtube", 7, None), &responder)
            .await;

        assert_eq!(outcome, RouteOutcome::NotMatched);
        assert!(service.calls.lock().unwrap().is_empty());
        assert_eq!(responder.total(), 0);
    }

    #[tokio::test]
    async fn test_only_exact_matches() {
        let service = Arc::new(MockInvites::default());
        let r = router(service.clone());
        let responder = RecordingResponder::default();

        for content in ["/youtube ", "/YouTube", "/youtube now", "!youtube"] {
            assert_eq!(r.route(&message(content, 7, Some(1)), &responder).await, RouteOutcome::NotMatched);
        }
        assert!(service.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invite_failure_contained() {
        let service = Arc::new(MockInvites {
            fail: true,
            ..Default::default()
        });
        let responder = RecordingResponder::default();

        let outcome = router(service)
            .route(&message("/poker", 7, Some(1)), &responder)
            .await;

        assert_eq!(outcome, RouteOutcome::Failed { activity: "poker" });
        assert_eq!(responder.replies(), vec![MessageCatalog::english().get("common.errorActivity")]);
    }

    #[tokio::test]
    async fn test_reply_failure_swallowed() {
        let service = Arc::new(MockInvites {
            fail: true,
            ..Default::default()
        });
        let responder = RecordingResponder::failing();

        let outcome = router(service)
            .route(&message("/poker", 7, Some(1)), &responder)
            .await;
        assert_eq!(outcome, RouteOutcome::Failed { activity: "poker" });
    }
}

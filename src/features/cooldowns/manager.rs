//! # Feature: Command Cooldowns
//!
//! Per-command, per-user cooldown windows. Uses DashMap so the check-and-set for
//! a (command, user) pair happens under a single shard lock with no await in
//! between. Expired entries are dropped lazily when checked again and by a
//! periodic sweep, so no timer is kept per entry.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Composite key: (command name, user id)
type CooldownKey = (String, u64);

/// Result of a cooldown check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownDecision {
    /// The invocation may proceed; the user is now limited for the command's window
    Allowed,
    /// The user must wait this long before invoking the command again
    Denied { remaining: Duration },
}

impl CooldownDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CooldownDecision::Allowed)
    }
}

/// Remaining cooldown in seconds with one decimal, as shown to users
pub fn format_remaining(remaining: Duration) -> String {
    format!("{:.1}", remaining.as_secs_f64())
}

#[derive(Default)]
pub struct CooldownManager {
    /// Instant at which each entry's window closes
    entries: DashMap<CooldownKey, Instant>,
}

impl CooldownManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `user_id` may run `command` now, starting a new window if so
    pub fn check(&self, command: &str, user_id: u64, window: Duration) -> CooldownDecision {
        self.check_at(command, user_id, window, Instant::now())
    }

    /// Same as [`check`](Self::check) with an explicit clock reading
    pub fn check_at(
        &self,
        command: &str,
        user_id: u64,
        window: Duration,
        now: Instant,
    ) -> CooldownDecision {
        match self.entries.entry((command.to_string(), user_id)) {
            Entry::Occupied(mut entry) => {
                let expires_at = *entry.get();
                if now < expires_at {
                    // An active window is never refreshed
                    CooldownDecision::Denied {
                        remaining: expires_at - now,
                    }
                } else {
                    entry.insert(now + window);
                    CooldownDecision::Allowed
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(now + window);
                CooldownDecision::Allowed
            }
        }
    }

    /// Whether the user is inside an active window for the command
    pub fn is_limited(&self, command: &str, user_id: u64) -> bool {
        let now = Instant::now();
        self.entries
            .get(&(command.to_string(), user_id))
            .is_some_and(|expires_at| now < *expires_at)
    }

    /// Remove every entry whose window has closed, returning how many were removed
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, expires_at| {
            let keep = now < *expires_at;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Number of tracked (command, user) entries, expired ones included until swept
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spawn a background task sweeping expired entries every `every`
    pub fn spawn_sweeper(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let removed = self.sweep();
                if removed > 0 {
                    debug!("🧹 Swept {removed} expired cooldown entries ({} active)", self.len());
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const FIVE: Duration = Duration::from_secs(5);

    #[test]
    fn test_first_invocation_allowed() {
        let cooldowns = CooldownManager::new();
        assert!(cooldowns.check("play", 1, FIVE).is_allowed());
        assert!(cooldowns.is_limited("play", 1));
        assert_eq!(cooldowns.len(), 1);
    }

    #[test]
    fn test_second_invocation_within_window_denied() {
        let cooldowns = CooldownManager::new();
        let t0 = Instant::now();

        assert!(cooldowns.check_at("play", 1, FIVE, t0).is_allowed());
        let decision = cooldowns.check_at("play", 1, FIVE, t0 + Duration::from_secs(2));
        assert_eq!(
            decision,
            CooldownDecision::Denied {
                remaining: Duration::from_secs(3)
            }
        );
    }

    #[test]
    fn test_denied_check_does_not_refresh_window() {
        let cooldowns = CooldownManager::new();
        let t0 = Instant::now();

        cooldowns.check_at("play", 1, FIVE, t0);
        cooldowns.check_at("play", 1, FIVE, t0 + Duration::from_secs(4));
        assert!(cooldowns
            .check_at("play", 1, FIVE, t0 + Duration::from_secs(5))
            .is_allowed());
    }

    #[test]
    fn test_allowed_after_window_and_restarts_window() {
        let cooldowns = CooldownManager::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(6);

        cooldowns.check_at("play", 1, FIVE, t0);
        assert!(cooldowns.check_at("play", 1, FIVE, t1).is_allowed());
        assert!(!cooldowns
            .check_at("play", 1, FIVE, t1 + Duration::from_secs(1))
            .is_allowed());
    }

    #[test]
    fn test_per_command_independence() {
        let cooldowns = CooldownManager::new();
        let t0 = Instant::now();

        assert!(cooldowns.check_at("play", 1, FIVE, t0).is_allowed());
        assert!(!cooldowns.check_at("play", 1, FIVE, t0).is_allowed());
        assert!(cooldowns.check_at("skip", 1, FIVE, t0).is_allowed());
    }

    #[test]
    fn test_per_user_independence() {
        let cooldowns = CooldownManager::new();
        let t0 = Instant::now();

        assert!(cooldowns.check_at("play", 1, FIVE, t0).is_allowed());
        assert!(cooldowns.check_at("play", 2, FIVE, t0).is_allowed());
        assert!(!cooldowns.check_at("play", 1, FIVE, t0).is_allowed());
    }

    #[test]
    fn test_sweep_removes_only_expired() {
        let cooldowns = CooldownManager::new();
        let t0 = Instant::now();

        cooldowns.check_at("play", 1, Duration::from_secs(1), t0);
        cooldowns.check_at("skip", 1, Duration::from_secs(10), t0);

        assert_eq!(cooldowns.sweep_at(t0 + Duration::from_secs(2)), 1);
        assert_eq!(cooldowns.len(), 1);
        // Sweeping an already removed entry again is a no-op
        assert_eq!(cooldowns.sweep_at(t0 + Duration::from_secs(2)), 0);
        assert_eq!(cooldowns.sweep_at(t0 + Duration::from_secs(10)), 1);
        assert!(cooldowns.is_empty());
    }

    #[test]
    fn test_format_remaining_one_decimal() {
        assert_eq!(format_remaining(Duration::from_millis(1000)), "1.0");
        assert_eq!(format_remaining(Duration::from_millis(2340)), "2.3");
        assert_eq!(format_remaining(Duration::from_millis(50)), "0.1");
    }

    #[tokio::test]
    async fn test_cooldown_resets_after_window() {
        let cooldowns = CooldownManager::new();
        let window = Duration::from_millis(100);

        assert!(cooldowns.check("play", 1, window).is_allowed());
        assert!(!cooldowns.check("play", 1, window).is_allowed());

        sleep(Duration::from_millis(150)).await;
        assert!(!cooldowns.is_limited("play", 1));
        assert!(cooldowns.check("play", 1, window).is_allowed());
    }

    #[tokio::test]
    async fn test_sweeper_task_clears_entries() {
        let cooldowns = Arc::new(CooldownManager::new());
        cooldowns.check("play", 1, Duration::from_millis(20));

        let handle = cooldowns.clone().spawn_sweeper(Duration::from_millis(10));
        sleep(Duration::from_millis(100)).await;
        handle.abort();

        assert!(cooldowns.is_empty());
    }
}

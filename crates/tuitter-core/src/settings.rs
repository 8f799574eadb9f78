//! User settings and partial updates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Third-party account that can be linked for sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthProvider {
    /// GitHub.
    GitHub,
    /// GitLab.
    GitLab,
    /// Google.
    Google,
    /// Discord.
    Discord,
}

impl OAuthProvider {
    /// All providers in display order.
    pub const ALL: [Self; 4] = [Self::GitHub, Self::GitLab, Self::Google, Self::Discord];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
            Self::Google => "Google",
            Self::Discord => "Discord",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OAuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" => Ok(Self::GitHub),
            "gitlab" => Ok(Self::GitLab),
            "google" => Ok(Self::Google),
            "discord" => Ok(Self::Discord),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

/// Linked third-party accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connections {
    /// GitHub is linked.
    pub github: bool,
    /// GitLab is linked.
    pub gitlab: bool,
    /// Google is linked.
    pub google: bool,
    /// Discord is linked.
    pub discord: bool,
}

impl Connections {
    /// Whether `provider` is linked.
    pub fn get(&self, provider: OAuthProvider) -> bool {
        match provider {
            OAuthProvider::GitHub => self.github,
            OAuthProvider::GitLab => self.gitlab,
            OAuthProvider::Google => self.google,
            OAuthProvider::Discord => self.discord,
        }
    }

    /// Link or unlink `provider`.
    pub fn set(&mut self, provider: OAuthProvider, connected: bool) {
        let slot = match provider {
            OAuthProvider::GitHub => &mut self.github,
            OAuthProvider::GitLab => &mut self.gitlab,
            OAuthProvider::Google => &mut self.google,
            OAuthProvider::Discord => &mut self.discord,
        };
        *slot = connected;
    }
}

/// The viewer's account settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Profile display name.
    pub display_name: String,
    /// Profile biography.
    pub bio: String,
    /// Profile picture art. Empty when unset.
    pub avatar_art: String,
    /// Send notification digests by e-mail.
    pub email_notifications: bool,
    /// Show other users when the viewer is online.
    pub show_online_status: bool,
    /// Only approved followers can see posts.
    pub private_account: bool,
    /// Linked sign-in accounts.
    pub connections: Connections,
}

impl UserSettings {
    /// Merge every field present in `update`.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(name) = &update.display_name {
            self.display_name.clone_from(name);
        }
        if let Some(bio) = &update.bio {
            self.bio.clone_from(bio);
        }
        if let Some(art) = &update.avatar_art {
            self.avatar_art.clone_from(art);
        }
        if let Some(on) = update.email_notifications {
            self.email_notifications = on;
        }
        if let Some(on) = update.show_online_status {
            self.show_online_status = on;
        }
        if let Some(on) = update.private_account {
            self.private_account = on;
        }
        for &(provider, connected) in &update.connections {
            self.connections.set(provider, connected);
        }
    }
}

/// Partial settings change. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    /// New display name.
    pub display_name: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New profile picture art.
    pub avatar_art: Option<String>,
    /// New e-mail notification preference.
    pub email_notifications: Option<bool>,
    /// New online-status visibility.
    pub show_online_status: Option<bool>,
    /// New account privacy.
    pub private_account: Option<bool>,
    /// Providers to link (`true`) or unlink (`false`), applied in order.
    pub connections: Vec<(OAuthProvider, bool)>,
}

impl SettingsUpdate {
    /// Update that changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Update linking or unlinking one provider.
    pub fn connection(provider: OAuthProvider, connected: bool) -> Self {
        Self { connections: vec![(provider, connected)], ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> UserSettings {
        UserSettings {
            display_name: "Your Name".into(),
            bio: "bio".into(),
            avatar_art: String::new(),
            email_notifications: true,
            show_online_status: true,
            private_account: false,
            connections: Connections { github: true, ..Connections::default() },
        }
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut s = settings();
        let update = SettingsUpdate {
            bio: Some("new bio".into()),
            private_account: Some(true),
            connections: vec![(OAuthProvider::Discord, true)],
            ..SettingsUpdate::default()
        };

        s.apply(&update);

        assert_eq!(s.display_name, "Your Name");
        assert_eq!(s.bio, "new bio");
        assert!(s.private_account);
        assert!(s.connections.github);
        assert!(s.connections.discord);
    }

    #[test]
    fn empty_update_is_noop() {
        let mut s = settings();
        let update = SettingsUpdate::default();
        assert!(update.is_empty());

        s.apply(&update);
        assert_eq!(s, settings());
    }

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!("GitHub".parse::<OAuthProvider>(), Ok(OAuthProvider::GitHub));
        assert!("myspace".parse::<OAuthProvider>().is_err());
    }

    #[test]
    fn connections_snapshot() {
        let mut connections = Connections::default();
        connections.set(OAuthProvider::GitLab, true);

        insta::assert_json_snapshot!(connections, @r#"
        {
          "github": false,
          "gitlab": true,
          "google": false,
          "discord": false
        }
        "#);
    }
}

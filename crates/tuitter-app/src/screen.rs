//! Top-level screens.

use std::{fmt, str::FromStr};

/// A top-level screen of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Home timeline.
    #[default]
    Timeline,
    /// Trending posts and search.
    Discover,
    /// Activity notifications.
    Notifications,
    /// Direct messages.
    Messages,
    /// Account settings.
    Settings,
    /// A user's profile and posts.
    Profile,
}

impl Screen {
    /// Screens listed in the sidebar, in key order (`1`..`5`).
    pub const SIDEBAR: [Self; 5] =
        [Self::Timeline, Self::Discover, Self::Notifications, Self::Messages, Self::Settings];

    /// Screen bound to a digit key. `None` for anything outside `1`..`5`.
    pub fn from_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Self::SIDEBAR.get(usize::try_from(index).ok()?).copied()
    }

    /// Title shown in the header and sidebar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Discover => "Discover",
            Self::Notifications => "Notifications",
            Self::Messages => "Messages",
            Self::Settings => "Settings",
            Self::Profile => "Profile",
        }
    }

    /// Key hints shown in the footer.
    pub fn hints(self) -> &'static str {
        match self {
            Self::Timeline => "j/k move  enter comments  l like  r repost  n post  / search  : cmd",
            Self::Discover => "j/k move  enter comments  l like  r repost  / search  : cmd",
            Self::Notifications => "j/k move  enter/m mark read  u unread only  R refresh  : cmd",
            Self::Messages => "j/k move  enter open  i write  esc back  : cmd",
            Self::Settings => "j/k move  enter toggle  :set <field> <value>  : cmd",
            Self::Profile => "j/k move  enter comments  l like  r repost  : cmd",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "timeline" | "home" => Ok(Self::Timeline),
            "discover" | "explore" => Ok(Self::Discover),
            "notifications" | "notifs" => Ok(Self::Notifications),
            "messages" | "dms" => Ok(Self::Messages),
            "settings" => Ok(Self::Settings),
            "profile" | "me" => Ok(Self::Profile),
            other => Err(format!("unknown screen '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_sidebar() {
        assert_eq!(Screen::from_digit('1'), Some(Screen::Timeline));
        assert_eq!(Screen::from_digit('5'), Some(Screen::Settings));
        assert_eq!(Screen::from_digit('0'), None);
        assert_eq!(Screen::from_digit('6'), None);
        assert_eq!(Screen::from_digit('x'), None);
    }

    #[test]
    fn names_parse() {
        assert_eq!("Messages".parse::<Screen>(), Ok(Screen::Messages));
        assert_eq!("home".parse::<Screen>(), Ok(Screen::Timeline));
        assert!("inbox".parse::<Screen>().is_err());
    }
}

//! bundle.social entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Platforms a social account can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocialAccountType {
    Tiktok,
    Youtube,
    Instagram,
    Facebook,
    Twitter,
    Threads,
    Linkedin,
    Pinterest,
    Reddit,
    Discord,
    Slack,
    Mastodon,
    Bluesky,
    GoogleBusiness,
}

impl SocialAccountType {
    /// Wire name used by the vendor API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiktok => "TIKTOK",
            Self::Youtube => "YOUTUBE",
            Self::Instagram => "INSTAGRAM",
            Self::Facebook => "FACEBOOK",
            Self::Twitter => "TWITTER",
            Self::Threads => "THREADS",
            Self::Linkedin => "LINKEDIN",
            Self::Pinterest => "PINTEREST",
            Self::Reddit => "REDDIT",
            Self::Discord => "DISCORD",
            Self::Slack => "SLACK",
            Self::Mastodon => "MASTODON",
            Self::Bluesky => "BLUESKY",
            Self::GoogleBusiness => "GOOGLE_BUSINESS",
        }
    }
}

impl std::fmt::Display for SocialAccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `id` of a vendor object, when it is a string
fn id_of(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

/// Organization owning the API key.
///
/// Vendor entities wrap the payload as received so relaying them never
/// changes a field; the gateway reads what it needs through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Organization(Value);

impl Organization {
    pub fn id(&self) -> Option<&str> {
        id_of(&self.0)
    }

    /// Id of the organization's first team
    pub fn first_team_id(&self) -> Option<&str> {
        self.0
            .get("teams")
            .and_then(Value::as_array)
            .and_then(|teams| teams.first())
            .and_then(id_of)
    }
}

/// Team (account grouping entity owned by the vendor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(Value);

impl Team {
    pub fn id(&self) -> Option<&str> {
        id_of(&self.0)
    }

    pub fn social_accounts(&self) -> impl Iterator<Item = SocialAccount<'_>> {
        self.0
            .get("socialAccounts")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(SocialAccount)
    }

    /// First linked account of the given platform
    pub fn social_account(&self, account_type: SocialAccountType) -> Option<SocialAccount<'_>> {
        self.social_accounts()
            .find(|account| account.is(account_type))
    }
}

/// Borrowed view of a linked platform account inside a [`Team`].
///
/// The platform is read as the raw wire string so accounts on platforms this
/// crate does not know about are still visible.
#[derive(Debug, Clone, Copy)]
pub struct SocialAccount<'a>(&'a Value);

impl<'a> SocialAccount<'a> {
    pub fn account_type(&self) -> Option<&'a str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn is(&self, account_type: SocialAccountType) -> bool {
        self.account_type() == Some(account_type.as_str())
    }

    /// Ids of the account's channels, skipping entries without one
    pub fn channel_ids(&self) -> impl Iterator<Item = &'a str> {
        self.0
            .get("channels")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(id_of)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Upload(Value);

impl Upload {
    pub fn id(&self) -> Option<&str> {
        id_of(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post(Value);

impl Post {
    pub fn id(&self) -> Option<&str> {
        id_of(&self.0)
    }
}

macro_rules! impl_from_value {
    ($($entity:ident),*) => {
        $(
            impl From<Value> for $entity {
                fn from(value: Value) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

impl_from_value!(Organization, Team, Upload, Post);

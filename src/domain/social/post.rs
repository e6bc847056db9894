//! The fixed multi-platform post published by the `/post` route

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use super::entity::SocialAccountType;
use super::request::{CreatePostRequest, PlatformPostData, PostStatus};

pub const DEMO_POST_TITLE: &str = "Hello World";
pub const DEMO_POST_TEXT: &str = "Hello World from bundle.social!";
pub const DEMO_SUBREDDIT: &str = "r/bundlesocial";

pub const DEMO_POST_PLATFORMS: [SocialAccountType; 4] = [
    SocialAccountType::Instagram,
    SocialAccountType::Youtube,
    SocialAccountType::Tiktok,
    SocialAccountType::Reddit,
];

impl CreatePostRequest {
    /// Scheduled post of one uploaded video to every demo platform
    pub fn demo(team_id: impl Into<String>, upload_id: &str, post_date: DateTime<Utc>) -> Self {
        let data = DEMO_POST_PLATFORMS
            .iter()
            .map(|platform| (*platform, demo_platform_data(*platform, upload_id)))
            .collect::<BTreeMap<_, _>>();

        Self {
            team_id: team_id.into(),
            title: DEMO_POST_TITLE.to_string(),
            status: PostStatus::Scheduled,
            post_date: post_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            social_account_types: DEMO_POST_PLATFORMS.to_vec(),
            data,
        }
    }
}

fn demo_platform_data(platform: SocialAccountType, upload_id: &str) -> PlatformPostData {
    let base = PlatformPostData {
        text: DEMO_POST_TEXT.to_string(),
        upload_ids: vec![upload_id.to_string()],
        ..Default::default()
    };

    match platform {
        SocialAccountType::Instagram => PlatformPostData {
            post_type: Some("REEL".to_string()),
            ..base
        },
        SocialAccountType::Youtube => PlatformPostData {
            post_type: Some("SHORT".to_string()),
            ..base
        },
        SocialAccountType::Reddit => PlatformPostData {
            sr: Some(DEMO_SUBREDDIT.to_string()),
            ..base
        },
        _ => base,
    }
}

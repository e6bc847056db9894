//! bundle.social domain module
//!
//! Types for the parts of the bundle.social API the gateway talks to, and the
//! client contract the HTTP handlers depend on. Only the fields the gateway
//! inspects are typed; everything else is carried through untouched so relayed
//! payloads match what the vendor sent.

mod client;
mod entity;
mod post;
mod request;

pub use client::BundlesocialClient;
#[cfg(test)]
pub use client::MockBundlesocialClient;
pub use entity::{Organization, Post, SocialAccount, SocialAccountType, Team, Upload};
pub use post::{DEMO_POST_PLATFORMS, DEMO_POST_TEXT, DEMO_POST_TITLE, DEMO_SUBREDDIT};
pub use request::{
    ConnectRequest, CreatePostRequest, CreateTeamRequest, MediaFile, PlatformPostData,
    PostStatus, SetChannelRequest,
};

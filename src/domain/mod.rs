//! Domain layer - bundle.social entities, the vendor client contract and process state

pub mod error;
pub mod social;
pub mod team;
pub mod webhook;

pub use error::DomainError;
pub use social::{
    BundlesocialClient, ConnectRequest, CreatePostRequest, CreateTeamRequest,
    MediaFile, Organization, PlatformPostData, Post, PostStatus, SetChannelRequest,
    SocialAccount, SocialAccountType, Team, Upload,
};
pub use team::TeamIdStore;
pub use webhook::WebhookEvent;

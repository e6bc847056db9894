//! Team domain module
//!
//! The gateway does not own teams; it only remembers which vendor team the
//! demo routes act on.

mod store;

pub use store::TeamIdStore;

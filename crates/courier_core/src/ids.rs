//! Typed snowflake identifiers.
//!
//! Platform ids are all 64-bit integers; wrapping them keeps a role id from
//! being passed where a channel id is expected.

use serde::{Deserialize, Serialize};

macro_rules! snowflake {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::From,
        )]
        #[serde(transparent)]
        #[display("{}", _0)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw integer value.
            pub fn get(self) -> u64 {
                self.0
            }
        }
    };
}

snowflake!(
    /// A user (or bot) account.
    UserId
);
snowflake!(
    /// A community (guild).
    CommunityId
);
snowflake!(
    /// A text channel, private or community-owned.
    ChannelId
);
snowflake!(
    /// A permission role within a community.
    RoleId
);

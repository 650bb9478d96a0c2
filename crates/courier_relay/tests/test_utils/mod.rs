//! Test utilities for relay tests.
//!
//! Provides a mock platform implementing every relay capability, helpers
//! for building inbound messages, and an in-memory log sink.

#![allow(dead_code)]

use async_trait::async_trait;
use courier_core::{
    ChannelId, CommunityId, InboundMessage, InboundMessageBuilder, RelayConfig, RoleId, RoleSet,
    UserId,
};
use courier_error::{DeliveryError, ResolveError};
use courier_relay::{MemberFetcher, MembershipCache, MessageSink};
use courier_log::CourierLogLayer;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const BOT_ID: UserId = UserId(1);
pub const COMMUNITY: CommunityId = CommunityId(10);
pub const DESTINATION: ChannelId = ChannelId(20);
pub const STAFF_ROLE: RoleId = RoleId(30);
pub const OTHER_ROLE: RoleId = RoleId(31);
pub const DM_CHANNEL: ChannelId = ChannelId(40);

/// Mock platform recording every send.
#[derive(Default)]
pub struct MockPlatform {
    cached: HashMap<UserId, Vec<RoleId>>,
    remote: HashMap<UserId, Vec<RoleId>>,
    fail_fetch: bool,
    fail_send_to: Option<ChannelId>,
    fetch_calls: AtomicUsize,
    sent: Mutex<Vec<(ChannelId, String)>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cached_member(mut self, user: UserId, roles: &[RoleId]) -> Self {
        self.cached.insert(user, roles.to_vec());
        self
    }

    pub fn with_remote_member(mut self, user: UserId, roles: &[RoleId]) -> Self {
        self.remote.insert(user, roles.to_vec());
        self
    }

    pub fn with_fetch_failure(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn with_send_failure(mut self, channel: ChannelId) -> Self {
        self.fail_send_to = Some(channel);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<(ChannelId, String)> {
        self.sent.lock().expect("sent lock").clone()
    }

    pub fn sent_to(&self, channel: ChannelId) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, content)| content)
            .collect()
    }
}

impl MembershipCache for MockPlatform {
    fn cached_roles(&self, community: CommunityId, user: UserId) -> Option<RoleSet> {
        if community != COMMUNITY {
            return None;
        }
        self.cached
            .get(&user)
            .map(|roles| roles.iter().copied().collect())
    }
}

#[async_trait]
impl MemberFetcher for MockPlatform {
    async fn fetch_member_roles(
        &self,
        community: CommunityId,
        user: UserId,
    ) -> Result<Option<RoleSet>, ResolveError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(ResolveError::new(community.get(), user.get(), "Mock failure"));
        }
        if community != COMMUNITY {
            return Ok(None);
        }
        Ok(self
            .remote
            .get(&user)
            .map(|roles| roles.iter().copied().collect()))
    }
}

#[async_trait]
impl MessageSink for MockPlatform {
    async fn send(&self, channel: ChannelId, content: &str) -> Result<(), DeliveryError> {
        if self.fail_send_to == Some(channel) {
            return Err(DeliveryError::new(channel.get(), "Mock failure"));
        }
        self.sent
            .lock()
            .expect("sent lock")
            .push((channel, content.to_string()));
        Ok(())
    }
}

/// Configuration wired to the mock platform's constants.
pub fn test_config() -> RelayConfig {
    RelayConfig::new("test-token", COMMUNITY, DESTINATION, STAFF_ROLE)
        .expect("Failed to build test config")
}

/// A private-channel message from `author`.
pub fn direct_message(author: UserId, content: &str) -> InboundMessage {
    InboundMessageBuilder::default()
        .author_id(author)
        .author_name("U".to_string())
        .author_discriminator(Some(1))
        .content(content.to_string())
        .channel_id(DM_CHANNEL)
        .build()
        .expect("Failed to build message")
}

/// The same message but flagged as sent by a bot account.
pub fn bot_message(author: UserId, content: &str) -> InboundMessage {
    InboundMessageBuilder::default()
        .author_id(author)
        .author_name("SomeBot".to_string())
        .author_is_bot(true)
        .content(content.to_string())
        .channel_id(DM_CHANNEL)
        .build()
        .expect("Failed to build message")
}

/// A message posted in a community channel.
pub fn community_message(author: UserId, content: &str) -> InboundMessage {
    InboundMessageBuilder::default()
        .author_id(author)
        .author_name("U".to_string())
        .author_discriminator(Some(1))
        .content(content.to_string())
        .channel_id(ChannelId(50))
        .community_id(Some(COMMUNITY))
        .build()
        .expect("Failed to build message")
}

/// In-memory log sink capturing formatted lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Install a `CourierLogLayer` writing into this buffer as the thread's
    /// default subscriber until the guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        use tracing_subscriber::layer::SubscriberExt;
        let subscriber = tracing_subscriber::registry()
            .with(CourierLogLayer::new(self.clone()).with_ansi(false));
        tracing::subscriber::set_default(subscriber)
    }

    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().expect("buffer lock").clone();
        String::from_utf8(bytes)
            .expect("utf8 output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

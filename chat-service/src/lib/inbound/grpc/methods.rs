use std::time::Duration;

use pipeline::TimeoutTable;

pub const CREATE_ROOM: &str = "/chat.ChatService/CreateRoom";

/// Methods callable without a bearer token.
pub const PUBLIC_METHODS: [&str; 0] = [];

/// Per-method deadlines applied unless configuration overrides them.
///
/// Room creation makes a round trip to user-service before writing.
pub fn builtin_timeouts(default: Duration) -> TimeoutTable {
    TimeoutTable::new(default).with_method(CREATE_ROOM, Duration::from_secs(3))
}

use std::time::Duration;

use pipeline::TimeoutTable;

pub const REGISTER: &str = "/user_auth.AuthService/Register";
pub const LOGIN: &str = "/user_auth.AuthService/Login";
pub const LOGOUT: &str = "/user_auth.AuthService/Logout";
pub const REFRESH_TOKEN: &str = "/user_auth.AuthService/RefreshToken";
pub const FETCH_USER_PROFILE_BY_NICKNAME: &str = "/user.UserService/FetchUserProfileByNickname";
pub const FETCH_USER_PROFILE_BY_ID: &str = "/user.InternalUserService/FetchUserProfileById";

/// Methods callable without a bearer token.
pub const PUBLIC_METHODS: [&str; 5] = [
    REGISTER,
    LOGIN,
    LOGOUT,
    REFRESH_TOKEN,
    FETCH_USER_PROFILE_BY_NICKNAME,
];

/// Per-method deadlines applied unless configuration overrides them.
pub fn builtin_timeouts(default: Duration) -> TimeoutTable {
    TimeoutTable::new(default)
        .with_method(LOGIN, Duration::from_secs(2))
        .with_method(REGISTER, Duration::from_secs(5))
        .with_method(FETCH_USER_PROFILE_BY_NICKNAME, Duration::from_millis(300))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_timeouts() {
        let table = builtin_timeouts(Duration::from_secs(10));

        assert_eq!(table.for_method(LOGIN), Duration::from_secs(2));
        assert_eq!(table.for_method(REGISTER), Duration::from_secs(5));
        assert_eq!(
            table.for_method(FETCH_USER_PROFILE_BY_NICKNAME),
            Duration::from_millis(300)
        );
        assert_eq!(table.for_method(LOGOUT), Duration::from_secs(10));
        assert_eq!(table.for_method(FETCH_USER_PROFILE_BY_ID), Duration::from_secs(10));
    }

    #[test]
    fn test_internal_lookup_is_protected() {
        assert!(!PUBLIC_METHODS.contains(&FETCH_USER_PROFILE_BY_ID));
        assert!(PUBLIC_METHODS.contains(&LOGOUT));
    }
}

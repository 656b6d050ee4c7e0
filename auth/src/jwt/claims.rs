use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a signed access token.
///
/// `sub` holds the user identifier in decimal form, `nickname` the public
/// display name. `iat` and `exp` are Unix timestamps in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Display name of the subject
    pub nickname: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Create claims for a user, issued now and valid for `lifetime`.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `nickname` - Display name embedded in the token
    /// * `lifetime` - Time until the token expires
    pub fn for_user(user_id: impl ToString, nickname: impl Into<String>, lifetime: Duration) -> Self {
        Self::issued_at(user_id, nickname, Utc::now(), lifetime)
    }

    /// Create claims with an explicit issue instant.
    pub fn issued_at(
        user_id: impl ToString,
        nickname: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        let expiration = issued_at + lifetime;

        Self {
            sub: user_id.to_string(),
            nickname: nickname.into(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Absolute expiry as a timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = AccessClaims::for_user(42, "ann", Duration::minutes(15));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.nickname, "ann");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_expires_at_matches_exp() {
        let issued = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let claims = AccessClaims::issued_at(7, "bob", issued, Duration::hours(1));

        assert_eq!(claims.expires_at(), issued + Duration::hours(1));
    }
}

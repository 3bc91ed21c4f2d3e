//! User Id Value Object
//!
//! 認証基盤が発行したユーザーID。このサービスは発行も検証もせず、
//! リクエストヘッダーで渡された値をそのまま識別子として扱う。
//!
//! ## 不変条件
//! - 前後の空白を除いて空でない
//! - `/` を含まない（ストアのドキュメントパスに使われるため）
//! - 最大 128 文字

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FavoritesError, FavoritesResult};

/// Maximum length for a user id (in characters)
pub const USER_ID_MAX_LENGTH: usize = 128;

/// Opaque id of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: &str) -> FavoritesResult<Self> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(FavoritesError::MissingUser);
        }
        if value.chars().count() > USER_ID_MAX_LENGTH {
            return Err(FavoritesError::InvalidUserId(format!(
                "longer than {USER_ID_MAX_LENGTH} characters"
            )));
        }
        if value.contains('/') {
            return Err(FavoritesError::InvalidUserId("must not contain '/'".into()));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = FavoritesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

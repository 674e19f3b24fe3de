//! 値オブジェクト
//!
//! 生成時にバリデーションを行い、不正な値を持つインスタンスが存在しないことを保証します。

use std::fmt;

use super::error::ValueObjectError;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(super) String);

        impl $name {
            pub fn new(value: String) -> Result<Self, ValueObjectError> {
                if value.trim().is_empty() {
                    return Err(ValueObjectError::InvalidIdentifier);
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValueObjectError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier!(
    /// 接続ごとに発行される一時的なユーザー ID（認証の意味は持たない）
    UserId
);

identifier!(
    /// チャットメッセージの ID（サーバー側で生成、再利用されない）
    MessageId
);

identifier!(
    /// プロジェクトの ID
    ProjectId
);

/// チャットメッセージ本文
///
/// 前後の空白を除去した、空でない文字列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent(String);

impl MessageContent {
    /// 入力を trim して MessageContent を作成
    ///
    /// trim 後に空になる入力（空白のみ）は `EmptyMessageContent` で拒否します。
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyMessageContent);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageContent {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! project_field {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: &str) -> Result<Self, ValueObjectError> {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValueObjectError::EmptyProjectField($field));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

project_field!(ProjectName, "name");
project_field!(ProjectDescription, "description");

/// Unix タイムスタンプ（UTC, ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_content_is_trimmed() {
        // テスト項目: 前後の空白が除去される
        // given (前提条件):
        let raw = "  hi \n".to_string();

        // when (操作):
        let content = MessageContent::new(raw).unwrap();

        // then (期待する結果):
        assert_eq!(content.as_str(), "hi");
    }

    #[test]
    fn test_message_content_rejects_whitespace_only() {
        // テスト項目: 空白のみのメッセージは拒否される
        // given (前提条件):
        let raw = " \t ".to_string();

        // when (操作):
        let result = MessageContent::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyMessageContent));
    }

    #[test]
    fn test_message_content_keeps_inner_whitespace() {
        // テスト項目: 内部の空白はそのまま保持される
        let content = MessageContent::new(" hello   world ".to_string()).unwrap();
        assert_eq!(content.as_str(), "hello   world");
    }

    #[test]
    fn test_user_id_rejects_empty() {
        // テスト項目: 空の ID は作成できない
        assert_eq!(
            UserId::new(String::new()),
            Err(ValueObjectError::InvalidIdentifier)
        );
        assert_eq!(UserId::new("u1".to_string()).unwrap().as_str(), "u1");
    }

    #[test]
    fn test_project_fields_are_trimmed_and_required() {
        // テスト項目: プロジェクトのフィールドは trim され、空は拒否される
        assert_eq!(ProjectName::new("  Alpha ").unwrap().as_str(), "Alpha");
        assert_eq!(
            ProjectDescription::new("   "),
            Err(ValueObjectError::EmptyProjectField("description"))
        );
    }
}

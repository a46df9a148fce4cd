//! Error types / 错误类型

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("type mismatch: {value} not comparable with {existing} / 类型不匹配")]
  TypeMismatch {
    existing: &'static str,
    value: &'static str,
  },

  #[error("unknown sort: {0} / 未知排序方向")]
  UnknownSort(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Dynamically typed element / 动态类型元素
//!
//! For callers that cannot fix the element type at compile time.
//! Mixed kinds are rejected when compared instead of being coerced.
//! 用于无法在编译期确定元素类型的调用方。
//! 不同类型在比较时报错，不做隐式转换。

use std::{cmp::Ordering, fmt};

use crate::{Error, Result};

/// Dynamic value / 动态值
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
  /// Missing value, never stored
  /// 缺失值，不会被存储
  Null,
  Int(i64),
  Str(String),
}

impl Value {
  /// Kind name used in error messages
  /// 类型名，用于错误信息
  pub fn kind(&self) -> &'static str {
    match self {
      Value::Null => "null",
      Value::Int(_) => "int",
      Value::Str(_) => "str",
    }
  }

  #[inline]
  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  /// Three-way compare, only between values of the same kind
  /// 三路比较，仅限同类型之间
  pub fn try_cmp(&self, other: &Value) -> Result<Ordering> {
    match (self, other) {
      (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
      (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
      _ => Err(Error::TypeMismatch {
        existing: self.kind(),
        value: other.kind(),
      }),
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Null => f.write_str("null"),
      Value::Int(i) => write!(f, "{i}"),
      Value::Str(s) => f.write_str(s),
    }
  }
}

impl From<i64> for Value {
  #[inline]
  fn from(i: i64) -> Self {
    Value::Int(i)
  }
}

impl From<i32> for Value {
  #[inline]
  fn from(i: i32) -> Self {
    Value::Int(i.into())
  }
}

impl From<&str> for Value {
  #[inline]
  fn from(s: &str) -> Self {
    Value::Str(s.into())
  }
}

impl From<String> for Value {
  #[inline]
  fn from(s: String) -> Self {
    Value::Str(s)
  }
}

impl<V: Into<Value>> From<Option<V>> for Value {
  #[inline]
  fn from(v: Option<V>) -> Self {
    v.map_or(Value::Null, Into::into)
  }
}

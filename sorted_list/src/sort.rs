//! Sort direction / 排序方向

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Error, Result};

/// Sort direction, fixed when the list is created
/// 排序方向，创建列表时确定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sort {
  /// Ascending (standard behavior)
  /// 升序（标准行为）
  #[default]
  Asc,
  /// Descending (reverse behavior)
  /// 降序（反向行为）
  Desc,
}

impl Sort {
  /// Compare two values according to the direction
  /// 根据方向比较两个值
  #[inline(always)]
  pub fn cmp<T: Ord + ?Sized>(self, a: &T, b: &T) -> Ordering {
    match self {
      Sort::Asc => a.cmp(b),
      Sort::Desc => b.cmp(a),
    }
  }

  /// Placement predicate: `ord` is `current.cmp(value)`.
  /// true means the new value goes right before `current`.
  /// 放置判定：ord 为 current 与新值的比较结果，true 表示新值插在 current 之前
  #[inline(always)]
  pub fn place(self, ord: Ordering) -> bool {
    match self {
      Sort::Asc => ord.is_ge(),
      Sort::Desc => ord.is_le(),
    }
  }
}

impl FromStr for Sort {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "asc" | "ascending" => Ok(Sort::Asc),
      "desc" | "descending" => Ok(Sort::Desc),
      _ => Err(Error::UnknownSort(s.into())),
    }
  }
}

impl fmt::Display for Sort {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Sort::Asc => "asc",
      Sort::Desc => "desc",
    })
  }
}

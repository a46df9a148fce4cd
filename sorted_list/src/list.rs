//! SortedList - linked list that stays sorted on every insert
//! 有序链表 - 每次插入都保持有序
//!
//! # Complexity
//! 复杂度
//!
//! - add: O(n) linear scan, O(1) splice once the slot is found
//! - add_all: O(n) per element
//!
//! Position and front/back hints are accepted but ignored: placement is
//! always decided by the direction.
//! 位置与首尾提示会被接受但忽略：放置位置始终由排序方向决定。

use std::{
  cmp::Ordering,
  collections::{LinkedList, linked_list},
  convert::Infallible,
  fmt,
  ops::Deref,
};

use log::{debug, trace};

use crate::{Result, Sort, Value};

/// Linked list kept sorted by `Sort`
/// 按 Sort 保持有序的链表
///
/// Only read access to the backing list is exposed (via `Deref`),
/// so no mutation can bypass the insert routine.
/// 只通过 Deref 暴露对底层链表的只读访问，任何修改都必须走插入例程。
#[derive(Clone, PartialEq, Eq)]
pub struct SortedList<T> {
  li: LinkedList<T>,
  sort: Sort,
}

impl<T> SortedList<T> {
  #[inline]
  pub fn new(sort: Sort) -> Self {
    Self {
      li: LinkedList::new(),
      sort,
    }
  }

  /// Direction given at construction
  /// 构造时指定的方向
  #[inline]
  pub fn sort(&self) -> Sort {
    self.sort
  }

  #[inline]
  pub fn into_inner(self) -> LinkedList<T> {
    self.li
  }

  /// Insert before the first element accepted by `Sort::place`, else at the end.
  /// If `cmp` fails the list is left untouched.
  /// 插到第一个满足 Sort::place 的元素之前，否则追加到末尾。cmp 失败时链表不变。
  fn put<E>(
    &mut self,
    value: T,
    cmp: impl Fn(&T, &T) -> std::result::Result<Ordering, E>,
  ) -> std::result::Result<(), E> {
    let sort = self.sort;
    let len = self.li.len();
    let mut at = len;
    for (i, current) in self.li.iter().enumerate() {
      if sort.place(cmp(current, &value)?) {
        at = i;
        break;
      }
    }

    if at == 0 {
      self.li.push_front(value);
    } else if at == len {
      self.li.push_back(value);
    } else {
      let mut tail = self.li.split_off(at);
      tail.push_front(value);
      self.li.append(&mut tail);
    }
    trace!("{sort} put {at}/{len}");
    Ok(())
  }
}

impl<T: Ord> SortedList<T> {
  /// Insert keeping order, false if `value` is None
  /// 保序插入，value 为 None 时返回 false
  pub fn add(&mut self, value: impl Into<Option<T>>) -> bool {
    let Some(value) = value.into() else {
      debug!("skip none");
      return false;
    };
    let r: std::result::Result<(), Infallible> = self.put(value, |a, b| Ok(a.cmp(b)));
    match r {
      Ok(()) => true,
      Err(e) => match e {},
    }
  }

  /// Same as `add`, `_pos` is ignored
  /// 同 add，忽略 _pos
  #[inline]
  pub fn add_at(&mut self, _pos: usize, value: impl Into<Option<T>>) -> bool {
    self.add(value)
  }

  /// Same as `add`, the value is not forced to the front
  /// 同 add，不会强制放到开头
  #[inline]
  pub fn add_first(&mut self, value: impl Into<Option<T>>) -> bool {
    self.add(value)
  }

  /// Same as `add`, the value is not forced to the back
  /// 同 add，不会强制放到末尾
  #[inline]
  pub fn add_last(&mut self, value: impl Into<Option<T>>) -> bool {
    self.add(value)
  }

  /// Add each item in iteration order.
  /// Always true, even when some items were None.
  /// 按迭代顺序逐个插入。即使部分元素为 None 也总是返回 true。
  pub fn add_all<I>(&mut self, li: I) -> bool
  where
    I: IntoIterator,
    I::Item: Into<Option<T>>,
  {
    for value in li {
      self.add(value);
    }
    true
  }

  /// Same as `add_all`, `_pos` is ignored
  /// 同 add_all，忽略 _pos
  #[inline]
  pub fn add_all_at<I>(&mut self, _pos: usize, li: I) -> bool
  where
    I: IntoIterator,
    I::Item: Into<Option<T>>,
  {
    self.add_all(li)
  }

  /// Check every adjacent pair against the direction
  /// 检查每对相邻元素是否符合方向
  pub fn is_sorted(&self) -> bool {
    self
      .li
      .iter()
      .zip(self.li.iter().skip(1))
      .all(|(a, b)| self.sort.cmp(a, b).is_le())
  }
}

/// Weakly typed entry points: comparing values of different kinds fails
/// with `Error::TypeMismatch` and nothing is inserted.
/// 弱类型入口：不同类型的值比较时返回 Error::TypeMismatch，不插入任何内容。
impl SortedList<Value> {
  pub fn try_add(&mut self, value: impl Into<Value>) -> Result<bool> {
    let value = value.into();
    if value.is_null() {
      debug!("skip null");
      return Ok(false);
    }
    self
      .put(value, Value::try_cmp)
      .inspect_err(|e| debug!("{e}"))?;
    Ok(true)
  }

  #[inline]
  pub fn try_add_at(&mut self, _pos: usize, value: impl Into<Value>) -> Result<bool> {
    self.try_add(value)
  }

  #[inline]
  pub fn try_add_first(&mut self, value: impl Into<Value>) -> Result<bool> {
    self.try_add(value)
  }

  #[inline]
  pub fn try_add_last(&mut self, value: impl Into<Value>) -> Result<bool> {
    self.try_add(value)
  }

  /// Stops at the first mismatch, earlier items stay inserted
  /// 遇到第一个类型不匹配即停止，之前的元素保留
  pub fn try_add_all<I>(&mut self, li: I) -> Result<bool>
  where
    I: IntoIterator,
    I::Item: Into<Value>,
  {
    for value in li {
      self.try_add(value)?;
    }
    Ok(true)
  }

  #[inline]
  pub fn try_add_all_at<I>(&mut self, _pos: usize, li: I) -> Result<bool>
  where
    I: IntoIterator,
    I::Item: Into<Value>,
  {
    self.try_add_all(li)
  }
}

impl<T> Default for SortedList<T> {
  #[inline]
  fn default() -> Self {
    Self::new(Sort::default())
  }
}

impl<T: Ord> Extend<T> for SortedList<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.add(value);
    }
  }
}

impl<T> Deref for SortedList<T> {
  type Target = LinkedList<T>;

  #[inline]
  fn deref(&self) -> &Self::Target {
    &self.li
  }
}

impl<T> IntoIterator for SortedList<T> {
  type Item = T;
  type IntoIter = linked_list::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.li.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
  type Item = &'a T;
  type IntoIter = linked_list::Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.li.iter()
  }
}

/// `[a, b, c]`
impl<T: fmt::Display> fmt::Display for SortedList<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in self.li.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{value}")?;
    }
    f.write_str("]")
  }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(&self.li).finish()
  }
}

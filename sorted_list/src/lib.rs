//! # sorted_list - Linked list that keeps itself sorted / 自动保持有序的链表
//!
//! Every insert scans from the front and splices the value in front of the
//! first element that should follow it, so the list is sorted after every call.
//! 每次插入从头扫描，把值插到第一个应位于其后的元素之前，因此每次调用后链表都有序。
//!
//! ```
//! use sorted_list::{Sort, SortedList};
//!
//! let mut li: SortedList<i32> = SortedList::new(Sort::Asc);
//! li.add(10);
//! li.add_first(15);
//! li.add_last(5);
//! assert!(!li.add(None));
//! assert_eq!(li.to_string(), "[5, 10, 15]");
//! ```

pub mod error;
mod list;
mod sort;
mod value;

pub use error::{Error, Result};
pub use list::SortedList;
pub use sort::Sort;
pub use value::Value;

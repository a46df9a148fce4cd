use proptest::prelude::*;
use sorted_list::{Sort, SortedList};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn sort() -> impl Strategy<Value = Sort> {
  prop_oneof![Just(Sort::Asc), Just(Sort::Desc)]
}

fn filled(sort: Sort, li: &[i16]) -> SortedList<i16> {
  let mut r: SortedList<i16> = SortedList::new(sort);
  for &i in li {
    r.add(i);
  }
  r
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  /// Result is monotonic and equals a stable sort of the input
  /// 结果单调，且与输入的排序结果一致
  #[test]
  fn prop_sorted(sort in sort(), li in prop::collection::vec(any::<i16>(), 0..64)) {
    let r = filled(sort, &li);
    prop_assert!(r.is_sorted());
    prop_assert_eq!(r.len(), li.len());

    let mut expected = li.clone();
    expected.sort_by(|a, b| sort.cmp(a, b));
    prop_assert_eq!(r.iter().copied().collect::<Vec<_>>(), expected);
  }

  /// Every entry point gives the same list as plain add
  /// 所有入口与 add 结果一致
  #[test]
  fn prop_entry_points_agree(
    sort in sort(),
    li in prop::collection::vec(any::<i16>(), 0..32),
    pos in any::<usize>(),
  ) {
    let expected = filled(sort, &li);

    let mut at: SortedList<i16> = SortedList::new(sort);
    let mut first: SortedList<i16> = SortedList::new(sort);
    let mut last: SortedList<i16> = SortedList::new(sort);
    for &i in &li {
      at.add_at(pos, i);
      first.add_first(i);
      last.add_last(i);
    }
    prop_assert_eq!(&at, &expected);
    prop_assert_eq!(&first, &expected);
    prop_assert_eq!(&last, &expected);

    let mut all: SortedList<i16> = SortedList::new(sort);
    prop_assert!(all.add_all(li.iter().copied()));
    prop_assert_eq!(&all, &expected);

    let mut all_at: SortedList<i16> = SortedList::new(sort);
    prop_assert!(all_at.add_all_at(pos, li.clone()));
    prop_assert_eq!(&all_at, &expected);

    let mut ext: SortedList<i16> = SortedList::new(sort);
    ext.extend(li.iter().copied());
    prop_assert_eq!(&ext, &expected);
  }

  /// None never changes the list and reports false
  /// None 不改变链表并返回 false
  #[test]
  fn prop_none_skipped(
    sort in sort(),
    li in prop::collection::vec(prop::option::of(any::<i16>()), 0..32),
  ) {
    let mut r: SortedList<i16> = SortedList::new(sort);
    for &i in &li {
      let before = r.clone();
      let added = r.add(i);
      prop_assert_eq!(added, i.is_some());
      if i.is_none() {
        prop_assert_eq!(&r, &before);
      }
    }
    prop_assert_eq!(r.len(), li.iter().flatten().count());
    prop_assert!(r.is_sorted());
  }
}

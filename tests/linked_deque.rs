use std::collections::VecDeque;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sentinel_collections::{Error, LinkedDeque};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum DequeOp {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Front,
    Back,
    At(usize),
    InsertAt(usize, i32),
    EraseAt(usize),
    SetAt(usize, i32),
}

fn deque_op_strategy() -> impl Strategy<Value = DequeOp> {
    prop_oneof![
        4 => any::<i32>().prop_map(DequeOp::PushBack),
        4 => any::<i32>().prop_map(DequeOp::PushFront),
        2 => Just(DequeOp::PopBack),
        2 => Just(DequeOp::PopFront),
        1 => Just(DequeOp::Front),
        1 => Just(DequeOp::Back),
        2 => any::<usize>().prop_map(DequeOp::At),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(at, v)| DequeOp::InsertAt(at, v)),
        2 => any::<usize>().prop_map(DequeOp::EraseAt),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(at, v)| DequeOp::SetAt(at, v)),
    ]
}

fn offset(index: usize) -> isize {
    isize::try_from(index).expect("test sizes fit in isize")
}

// ─── Core operations against VecDeque ────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both LinkedDeque and
    /// VecDeque and asserts identical results at every step.
    #[test]
    fn deque_ops_match_vecdeque(ops in proptest::collection::vec(deque_op_strategy(), TEST_SIZE)) {
        let mut deque: LinkedDeque<i32> = LinkedDeque::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                DequeOp::PushBack(v) => {
                    deque.push_back(v);
                    model.push_back(v);
                }
                DequeOp::PushFront(v) => {
                    deque.push_front(v);
                    model.push_front(v);
                }
                DequeOp::PopBack => match model.pop_back() {
                    Some(v) => {
                        prop_assert_eq!(deque.pop_back(), Ok(v));
                    }
                    None => {
                        prop_assert_eq!(deque.pop_back(), Err(Error::ContainerEmpty));
                    }
                },
                DequeOp::PopFront => match model.pop_front() {
                    Some(v) => {
                        prop_assert_eq!(deque.pop_front(), Ok(v));
                    }
                    None => {
                        prop_assert_eq!(deque.pop_front(), Err(Error::ContainerEmpty));
                    }
                },
                DequeOp::Front => {
                    prop_assert_eq!(deque.front().ok(), model.front());
                }
                DequeOp::Back => {
                    prop_assert_eq!(deque.back().ok(), model.back());
                }
                DequeOp::At(at) => {
                    let index = at % (model.len() + 1);
                    match model.get(index) {
                        Some(v) => {
                            prop_assert_eq!(deque.at(index), Ok(v));
                        }
                        None => {
                            prop_assert_eq!(deque.at(index), Err(Error::IndexOutOfBound));
                        }
                    }
                }
                DequeOp::InsertAt(at, v) => {
                    let index = at % (model.len() + 1);
                    let position = deque.advance(deque.begin(), offset(index)).expect("within chain");
                    let inserted = deque.insert(position, v).expect("live position");
                    prop_assert_eq!(deque.distance(inserted, deque.begin()), Ok(offset(index)));
                    model.insert(index, v);
                }
                DequeOp::EraseAt(at) => {
                    let index = at % (model.len() + 1);
                    let position = deque.advance(deque.begin(), offset(index)).expect("within chain");
                    if index == model.len() {
                        prop_assert_eq!(deque.erase(position), Err(Error::InvalidIterator));
                    } else {
                        let next = deque.erase(position).expect("value position");
                        prop_assert_eq!(deque.distance(next, deque.begin()), Ok(offset(index)));
                        model.remove(index);
                    }
                }
                DequeOp::SetAt(at, v) => {
                    if model.is_empty() {
                        prop_assert_eq!(deque.at_mut(0), Err(Error::IndexOutOfBound));
                        continue;
                    }
                    let index = at % model.len();
                    *deque.at_mut(index).expect("index within len") = v;
                    model[index] = v;
                }
            }
            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.is_empty(), model.is_empty());
        }

        prop_assert!(deque.iter().eq(model.iter()));
        prop_assert!(deque.iter().rev().eq(model.iter().rev()));
        prop_assert!(deque.into_iter().eq(model.into_iter()));
    }

    #[test]
    fn advance_round_trips(values in proptest::collection::vec(any::<i32>(), 1..256), start in any::<usize>(), step in any::<usize>()) {
        let deque: LinkedDeque<i32> = values.into_iter().collect();
        let len = deque.len();
        let start = start % (len + 1);
        let n = offset(step % (len - start + 1));

        let it = deque.advance(deque.begin(), offset(start)).expect("within chain");
        let forward = deque.advance(it, n).expect("within chain");
        prop_assert_eq!(deque.advance(forward, -n), Ok(it));
        prop_assert_eq!(deque.distance(forward, it), Ok(n));
        prop_assert_eq!(deque.distance(it, forward), Ok(-n));

        let back = deque.advance(forward, -n).expect("within chain");
        prop_assert_eq!(deque.advance(back, n), Ok(forward));
    }

    #[test]
    fn advancing_past_either_boundary_fails(values in proptest::collection::vec(any::<i32>(), 0..64), start in any::<usize>()) {
        let deque: LinkedDeque<i32> = values.into_iter().collect();
        let len = deque.len();
        let start = start % (len + 1);
        let it = deque.advance(deque.begin(), offset(start)).expect("within chain");

        prop_assert_eq!(deque.advance(it, offset(len - start + 1)), Err(Error::InvalidIterator));
        prop_assert_eq!(deque.advance(it, -offset(start + 1)), Err(Error::InvalidIterator));
    }

    #[test]
    fn push_then_pop_restores_state(values in proptest::collection::vec(any::<i32>(), 0..64), x in any::<i32>()) {
        let mut deque: LinkedDeque<i32> = values.into_iter().collect();
        let len = deque.len();
        let back = deque.back().ok().copied();
        let front = deque.front().ok().copied();

        deque.push_back(x);
        prop_assert_eq!(deque.pop_back(), Ok(x));
        prop_assert_eq!(deque.len(), len);
        prop_assert_eq!(deque.back().ok().copied(), back);

        deque.push_front(x);
        prop_assert_eq!(deque.pop_front(), Ok(x));
        prop_assert_eq!(deque.len(), len);
        prop_assert_eq!(deque.front().ok().copied(), front);
    }

    #[test]
    fn clone_round_trips_and_is_independent(values in proptest::collection::vec(any::<i32>(), 0..256)) {
        let original: LinkedDeque<i32> = values.iter().copied().collect();
        let mut copy = original.clone();
        prop_assert!(copy.iter().eq(original.iter()));

        for v in copy.iter_mut() {
            *v = v.wrapping_add(1);
        }
        copy.push_back(0);
        prop_assert!(original.iter().eq(values.iter()));
        prop_assert_eq!(copy.len(), values.len() + 1);
    }
}

// ─── Scenarios and boundaries ────────────────────────────────────────────────

#[test]
fn push_pop_scenario() {
    let mut deque = LinkedDeque::new();
    deque.push_back(10);
    deque.push_back(20);
    deque.push_front(5);

    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![5, 10, 20]);
    assert_eq!(deque.at(1), Ok(&10));

    assert_eq!(deque.pop_front(), Ok(5));
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![10, 20]);
    assert_eq!(deque.front(), Ok(&10));
}

#[test]
fn empty_deque_reports_container_empty() {
    let mut deque: LinkedDeque<i32> = LinkedDeque::new();

    assert_eq!(deque.front(), Err(Error::ContainerEmpty));
    assert_eq!(deque.back(), Err(Error::ContainerEmpty));
    assert_eq!(deque.front_mut(), Err(Error::ContainerEmpty));
    assert_eq!(deque.back_mut(), Err(Error::ContainerEmpty));
    assert_eq!(deque.pop_front(), Err(Error::ContainerEmpty));
    assert_eq!(deque.pop_back(), Err(Error::ContainerEmpty));
    assert!(deque.is_empty());
}

#[test]
fn at_len_is_out_of_bound() {
    let deque = LinkedDeque::from([1, 2, 3]);
    assert_eq!(deque.at(deque.len()), Err(Error::IndexOutOfBound));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_past_len_panics() {
    let deque = LinkedDeque::from([1, 2, 3]);
    let _value: i32 = deque[3];
}

#[test]
fn index_mut_writes_through() {
    let mut deque = LinkedDeque::from(['a', 'b', 'c']);
    deque[1] = 'x';
    assert_eq!(deque.iter().collect::<String>(), "axc");
}

#[test]
fn end_boundary_cannot_be_dereferenced_or_erased() {
    let mut deque = LinkedDeque::from([1]);
    let end = deque.end();

    assert_eq!(deque.get_at(end), Err(Error::InvalidIterator));
    assert_eq!(deque.get_at_mut(end), Err(Error::InvalidIterator));
    assert_eq!(deque.erase(end), Err(Error::InvalidIterator));
    assert_eq!(deque.next(end), Err(Error::InvalidIterator));
    assert_eq!(deque.prev(deque.begin()), Err(Error::InvalidIterator));
    assert_eq!(deque.len(), 1);
}

#[test]
fn insert_into_empty_behaves_like_push_back() {
    let mut deque = LinkedDeque::new();
    let first = deque.insert(deque.end(), 7).expect("end is live");

    assert_eq!(first, deque.begin());
    assert_eq!(deque.front(), Ok(&7));
    assert_eq!(deque.back(), Ok(&7));
}

#[test]
fn insert_at_begin_becomes_front() {
    let mut deque = LinkedDeque::from([2, 3]);
    let one = deque.insert(deque.begin(), 1).expect("begin is live");

    assert_eq!(one, deque.begin());
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn erase_head_advances_begin() {
    let mut deque = LinkedDeque::from([1, 2, 3]);
    let next = deque.erase(deque.begin()).expect("value position");

    assert_eq!(next, deque.begin());
    assert_eq!(deque.get_at(next), Ok(&2));
}

#[test]
fn erase_last_returns_end() {
    let mut deque = LinkedDeque::from([1, 2]);
    let last = deque.prev(deque.end()).expect("non-empty");

    assert_eq!(deque.erase(last), Ok(deque.end()));
    assert_eq!(deque.back(), Ok(&1));
}

#[test]
fn positions_survive_unrelated_splices() {
    let mut deque = LinkedDeque::from([1, 2, 3, 4]);
    let three = deque.advance(deque.begin(), 2).expect("within chain");

    deque.push_front(0);
    deque.push_back(5);
    deque.erase(deque.begin()).expect("value position");
    let two = deque.prev(three).expect("not first");
    deque.erase(two).expect("value position");

    assert_eq!(deque.get_at(three), Ok(&3));
    assert_eq!(deque.distance(three, deque.begin()), Ok(1));
}

#[test]
fn foreign_positions_are_rejected() {
    let mut a = LinkedDeque::from([1, 2]);
    let b = a.clone();

    assert_ne!(a.begin(), b.begin());
    assert_ne!(a.end(), b.end());
    assert_eq!(a.get_at(b.begin()), Err(Error::InvalidIterator));
    assert_eq!(a.insert(b.begin(), 0), Err(Error::InvalidIterator));
    assert_eq!(a.erase(b.begin()), Err(Error::InvalidIterator));
    assert_eq!(a.advance(b.begin(), 1), Err(Error::InvalidIterator));
    assert_eq!(a.distance(a.begin(), b.begin()), Err(Error::InvalidIterator));
    assert_eq!(a.len(), 2);
}

#[test]
#[allow(clippy::eq_op)]
fn equality_is_identity() {
    let a = LinkedDeque::from([1, 2]);
    let b = a.clone();

    assert_eq!(a, a);
    assert_ne!(a, b);
    assert!(a.iter().eq(b.iter()));
}

#[test]
fn clone_from_keeps_positions_issued_by_target() {
    let source = LinkedDeque::from([7, 8, 9]);
    let mut target = LinkedDeque::from([1]);
    let end_before = target.end();

    target.clone_from(&source);
    assert!(target.iter().eq(source.iter()));
    assert_eq!(target.len(), 3);
    assert_eq!(target.get_at(source.begin()), Err(Error::InvalidIterator));
    assert_eq!(target.end(), end_before);
    assert_ne!(target.end(), source.end());
}

#[test]
fn cursor_forwards_read_only() {
    let deque = LinkedDeque::from([1, 2, 3]);
    let mut cursor = deque.cursor(deque.end());

    cursor.move_prev().expect("non-empty");
    assert_eq!(cursor.get(), Ok(&3));
    let begin = deque.cursor(deque.begin());
    assert_eq!(cursor.distance(&begin), Ok(2));
    assert_eq!(begin.offset(-1).map(|c| c.position()), Err(Error::InvalidIterator));
}

#[test]
fn clear_releases_everything_and_stales_positions() {
    let mut deque = LinkedDeque::from([1, 2, 3]);
    let first = deque.begin();

    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.begin(), deque.end());
    assert_eq!(deque.get_at(first), Err(Error::InvalidIterator));

    deque.push_back(4);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![4]);
    assert_eq!(deque.front(), Ok(&4));
}

#[test]
fn debug_formats_as_list() {
    let deque = LinkedDeque::from([1, 2]);
    assert_eq!(format!("{deque:?}"), "[1, 2]");
}

extern crate std;

use std::vec;
use std::vec::Vec;

use crate::linked_list::intrusive::{
    error::QueueError,
    slist::{SList, SListLink},
    slot::Slot,
};

use super::{items, Item};

fn values(list: &SList<Item>, arena: &[Item]) -> Vec<u32> {
    list.iter(arena).map(|i| arena[i].value).collect()
}

#[test]
fn test_slist_insert_head_is_lifo() {
    let mut arena = items(3);
    let mut list = SList::<Item>::new();
    assert!(list.is_empty());
    assert_eq!(list.first(), None);

    for i in 0..3 {
        list.insert_head(&mut arena, i);
    }

    assert!(!list.is_empty());
    assert_eq!(list.first(), Some(2));
    assert_eq!(list.next(&arena, 2), Some(1));
    assert_eq!(list.next(&arena, 0), None);
    assert_eq!(values(&list, &arena), vec![2, 1, 0]);
}

#[test]
fn test_slist_insert_after() {
    let mut arena = items(3);
    let mut list = SList::<Item>::new();
    list.insert_head(&mut arena, 2);
    list.insert_head(&mut arena, 0);

    list.insert_after(&mut arena, 0, 1);
    assert_eq!(values(&list, &arena), vec![0, 1, 2]);
}

#[test]
fn test_slist_remove_head_and_after() {
    let mut arena = items(4);
    let mut list = SList::<Item>::new();
    for i in (0..4).rev() {
        list.insert_head(&mut arena, i);
    }

    assert_eq!(list.remove_after(&mut arena, 1), 2);
    assert_eq!(values(&list, &arena), vec![0, 1, 3]);

    assert_eq!(list.remove_head(&mut arena), 0);
    assert_eq!(values(&list, &arena), vec![1, 3]);
    assert_eq!(list.first(), Some(1));
}

#[test]
fn test_slist_remove() {
    let mut arena = items(3);
    let mut list = SList::<Item>::new();
    for i in (0..3).rev() {
        list.insert_head(&mut arena, i);
    }

    // Remove middle
    list.remove(&mut arena, 1);
    assert_eq!(values(&list, &arena), vec![0, 2]);

    // Remove tail
    list.remove(&mut arena, 2);
    assert_eq!(values(&list, &arena), vec![0]);

    // Remove head
    list.remove(&mut arena, 0);
    assert!(list.is_empty());
}

#[test]
#[should_panic(expected = "is not a member")]
fn test_slist_remove_non_member_panics() {
    let mut arena = items(2);
    let mut list = SList::<Item>::new();
    list.insert_head(&mut arena, 0);
    list.remove(&mut arena, 1);
}

#[test]
#[should_panic(expected = "container is empty")]
fn test_slist_remove_head_on_empty_panics() {
    let mut arena = items(1);
    let mut list = SList::<Item>::new();
    list.remove_head(&mut arena);
}

#[test]
fn test_slist_checked_removal() {
    let mut arena = items(2);
    let mut list = SList::<Item>::new();
    assert_eq!(list.try_remove_head(&mut arena), Err(QueueError::Empty));

    list.insert_head(&mut arena, 0);
    assert_eq!(list.try_remove_after(&mut arena, 0), Err(QueueError::NoSuccessor(0)));
    assert_eq!(list.try_remove(&mut arena, 1), Err(QueueError::NotMember(1)));
    assert_eq!(list.try_remove(&mut arena, 9), Err(QueueError::NotMember(9)));
    assert_eq!(list.try_remove_after(&mut arena, 9), Err(QueueError::NotMember(9)));
    assert_eq!(list.try_remove(&mut arena, 0), Ok(()));
    assert!(list.is_empty());
}

#[test]
fn test_slist_swap() {
    let mut arena = items(4);
    let mut a = SList::<Item>::new();
    let mut b = SList::<Item>::new();
    a.insert_head(&mut arena, 1);
    a.insert_head(&mut arena, 0);
    b.insert_head(&mut arena, 3);

    a.swap(&mut b);
    assert_eq!(values(&a, &arena), vec![3]);
    assert_eq!(values(&b, &arena), vec![0, 1]);

    let mut empty = SList::<Item>::new();
    a.swap(&mut empty);
    assert!(a.is_empty());
    assert_eq!(values(&empty, &arena), vec![3]);
}

#[test]
fn test_slist_iter_from() {
    let mut arena = items(4);
    let mut list = SList::<Item>::new();
    for i in (0..4).rev() {
        list.insert_head(&mut arena, i);
    }

    let from: Vec<usize> = list.iter_from(&arena, Some(2)).collect();
    assert_eq!(from, vec![2, 3]);
    let all: Vec<usize> = list.iter_from(&arena, None).collect();
    assert_eq!(all, vec![0, 1, 2, 3]);
}

#[test]
fn test_slist_safe_iteration_removes_while_walking() {
    let mut arena = items(6);
    let mut list = SList::<Item>::new();
    for i in (0..6).rev() {
        list.insert_head(&mut arena, i);
    }

    let mut cursor = list.iter_safe();
    while let Some(i) = cursor.next(&arena) {
        if arena[i].value % 2 == 0 {
            list.remove(&mut arena, i);
        }
    }
    assert_eq!(values(&list, &arena), vec![1, 3, 5]);

    let mut cursor = list.iter_safe_from(Some(3));
    while let Some(i) = cursor.next(&arena) {
        list.remove(&mut arena, i);
    }
    assert_eq!(values(&list, &arena), vec![1]);
}

#[test]
fn test_slist_slot_walk() {
    let mut arena = items(3);
    let mut list = SList::<Item>::new();
    for i in (0..3).rev() {
        list.insert_head(&mut arena, i);
    }

    let slots: Vec<(Slot, usize)> = list.iter_slots(&arena).collect();
    assert_eq!(
        slots,
        vec![(Slot::First, 0), (Slot::Next(0), 1), (Slot::Next(1), 2)]
    );

    let (slot, _) = slots[2];
    assert_eq!(list.remove_at(&mut arena, slot), 2);
    let (slot, _) = slots[0];
    assert_eq!(list.remove_at(&mut arena, slot), 0);
    assert_eq!(values(&list, &arena), vec![1]);
}

#[test]
fn test_slist_over_bare_links_and_maps() {
    // An array of bare links is its own arena.
    let mut links = [SListLink::default(); 3];
    let mut list = SList::<SListLink>::new();
    list.insert_head(&mut links, 0);
    list.insert_head(&mut links, 2);
    assert_eq!(list.iter(&links).collect::<Vec<_>>(), vec![2, 0]);

    // Sparse ids in a hash map.
    let mut map: hashbrown::HashMap<usize, Item> = hashbrown::HashMap::new();
    map.insert(100, Item::default());
    map.insert(7, Item::default());
    let mut list = SList::<Item>::new();
    list.insert_head(&mut map, 100);
    list.insert_head(&mut map, 7);
    assert_eq!(list.iter(&map).collect::<Vec<_>>(), vec![7, 100]);
    list.remove(&mut map, 100);
    assert_eq!(list.iter(&map).collect::<Vec<_>>(), vec![7]);
}

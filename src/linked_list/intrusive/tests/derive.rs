extern crate std;

use std::vec;
use std::vec::Vec;

use crate::Linked;
use crate::linked_list::intrusive::{
    list::{List, ListLink},
    slist::SList,
    tailq::{TailQ, TailQLink},
    traits::Adapter,
};

use super::{items, Item};

/// A connection aged on one queue and hashed into a bucket list.
#[derive(Debug, Default, Linked)]
#[linked(crate_path = "crate")]
struct Conn {
    id: usize,
    #[linked(adapter = "ByAge")]
    age: TailQLink,
    #[linked(adapter = "ByIdle")]
    idle: TailQLink,
    #[linked(adapter = "ByBucket")]
    bucket: ListLink,
}

fn conns(n: usize) -> Vec<Conn> {
    (0..n).map(|id| Conn { id, ..Default::default() }).collect()
}

#[test]
fn test_derive_default_adapters() {
    let mut arena = items(3);
    let mut slist = SList::<Item>::new();
    let mut tailq = TailQ::<Item>::new();

    for i in 0..3 {
        slist.insert_head(&mut arena, i);
        tailq.insert_tail(&mut arena, i);
    }
    assert_eq!(slist.iter(&arena).collect::<Vec<_>>(), vec![2, 1, 0]);
    assert_eq!(tailq.iter(&arena).collect::<Vec<_>>(), vec![0, 1, 2]);

    tailq.remove(&mut arena, 1);
    assert_eq!(slist.iter(&arena).collect::<Vec<_>>(), vec![2, 1, 0]);
}

#[test]
fn test_derive_named_adapters_are_independent() {
    let mut arena = conns(4);
    let mut by_age = TailQ::<Conn, ByAge>::new();
    let mut by_idle = TailQ::<Conn, ByIdle>::new();
    let mut bucket = List::<Conn, ByBucket>::new();

    for i in 0..4 {
        by_age.insert_tail(&mut arena, i);
        by_idle.insert_head(&mut arena, i);
    }
    bucket.insert_head(&mut arena, 2);
    bucket.insert_head(&mut arena, 0);

    assert_eq!(by_age.iter(&arena).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(by_idle.iter(&arena).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
    assert_eq!(bucket.iter(&arena).collect::<Vec<_>>(), vec![0, 2]);

    // Touching a connection moves it to the idle tail without aging it.
    by_idle.remove(&mut arena, 3);
    by_idle.insert_tail(&mut arena, 3);
    assert_eq!(by_idle.iter(&arena).collect::<Vec<_>>(), vec![2, 1, 0, 3]);
    assert_eq!(by_age.iter(&arena).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

    bucket.remove(&mut arena, 2);
    assert!(!ByBucket::link(&arena[2]).is_linked());
    assert!(ByAge::link(&arena[2]).is_linked());
    assert!(arena[2].idle.is_linked());

    let ids: Vec<usize> = by_age.iter_rev(&arena).map(|i| arena[i].id).collect();
    assert_eq!(ids, vec![3, 2, 1, 0]);
}

extern crate std;

use std::thread;
use std::vec::Vec;

use crate::linked_list::intrusive::{sync::Guarded, tailq::TailQ};

use super::{items, Item};

const THREADS: usize = 4;
const PER_THREAD: usize = 250;

#[test]
fn test_guarded_concurrent_insert_and_pop() {
    let ready = Guarded::new(TailQ::<Item>::new(), items((THREADS * PER_THREAD) as u32));

    thread::scope(|s| {
        for t in 0..THREADS {
            let ready = &ready;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    let elm = t * PER_THREAD + i;
                    ready.with(|queue, arena| queue.insert_tail(arena, elm));
                }
            });
        }
    });

    let (mut queue, mut arena) = ready.into_inner();
    let mut seen: Vec<usize> = queue.iter(&arena).collect();
    assert_eq!(seen.len(), THREADS * PER_THREAD);

    // Each producer's elements keep their relative order.
    for t in 0..THREADS {
        let mine: Vec<usize> = seen
            .iter()
            .copied()
            .filter(|&elm| elm / PER_THREAD == t)
            .collect();
        assert!(mine.windows(2).all(|w| w[0] < w[1]));
    }

    seen.sort_unstable();
    assert!(seen.iter().enumerate().all(|(i, &elm)| i == elm));

    while queue.pop_head(&mut arena).is_some() {}
    assert!(queue.is_empty());
}

#[test]
fn test_guarded_lock_exposes_head_and_arena() {
    let shared = Guarded::new(TailQ::<Item>::new(), items(3));
    {
        let mut guard = shared.lock();
        let crate::Shared { head, arena } = &mut *guard;
        head.insert_tail(arena, 1);
        head.insert_head(arena, 2);
        assert!(shared.try_lock().is_none());
    }

    let guard = shared.try_lock().unwrap();
    assert_eq!(guard.head.iter(&guard.arena).collect::<Vec<_>>(), [2, 1]);
}

#[test]
fn test_guarded_producers_and_consumers() {
    let ready = Guarded::new(TailQ::<Item>::new(), items((THREADS * PER_THREAD) as u32));
    let consumed = Guarded::new(Vec::new(), ());

    thread::scope(|s| {
        for t in 0..THREADS {
            let ready = &ready;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    ready.with(|queue, arena| queue.insert_tail(arena, t * PER_THREAD + i));
                }
            });
        }
        for _ in 0..THREADS {
            let (ready, consumed) = (&ready, &consumed);
            s.spawn(move || {
                let mut taken = 0;
                while taken < PER_THREAD {
                    match ready.with(|queue, arena| queue.pop_head(arena)) {
                        Some(elm) => {
                            consumed.with(|done: &mut Vec<usize>, _| done.push(elm));
                            taken += 1;
                        }
                        None => std::hint::spin_loop(),
                    }
                }
            });
        }
    });

    let (mut done, ()) = consumed.into_inner();
    done.sort_unstable();
    assert_eq!(done, (0..THREADS * PER_THREAD).collect::<Vec<_>>());
    assert!(ready.lock().head.is_empty());
}

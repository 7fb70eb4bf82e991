//! Intrusive linked containers over caller-owned storage.
//!
//! Each record embeds one link field per container it can belong to. The
//! records themselves sit in an arena owned by the caller and the containers
//! only rewrite the indices stored in those link fields.
//!
//! # Examples
//!
//! ```
//! use mola_queue::{Linked, TailQ, TailQLink};
//!
//! #[derive(Default, Linked)]
//! struct Job {
//!     id: u32,
//!     link: TailQLink,
//! }
//!
//! let mut jobs: Vec<Job> = (0..4).map(|id| Job { id, ..Default::default() }).collect();
//! let mut queue = TailQ::<Job>::new();
//!
//! queue.insert_tail(&mut jobs, 1);
//! queue.insert_tail(&mut jobs, 2);
//! queue.insert_tail(&mut jobs, 3);
//! queue.remove(&mut jobs, 2);
//! queue.insert_after(&mut jobs, 1, 0);
//!
//! let ids: Vec<u32> = queue.iter(&jobs).map(|i| jobs[i].id).collect();
//! assert_eq!(ids, vec![1, 0, 3]);
//! assert_eq!(queue.last(), Some(3));
//! ```
pub mod intrusive;

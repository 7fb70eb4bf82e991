use crate::Linked;
use crate::linked_list::intrusive::{
    list::ListLink, slist::SListLink, stailq::STailQLink, tailq::TailQLink,
};

mod derive;
mod slist;
mod sync;

/// A record that can sit on one container of each kind at the same time.
#[derive(Debug, Default, Linked)]
#[linked(crate_path = "crate")]
struct Item {
    value: u32,
    slist: SListLink,
    stailq: STailQLink,
    list: ListLink,
    tailq: TailQLink,
}

fn items(n: u32) -> alloc::vec::Vec<Item> {
    (0..n)
        .map(|value| Item {
            value,
            ..Default::default()
        })
        .collect()
}

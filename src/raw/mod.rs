mod arena;
mod handle;
mod iter;
mod node;
mod raw_treap;
mod size;

pub(crate) use iter::Iter;
pub(crate) use node::Tree;
pub(crate) use raw_treap::RawTreap;

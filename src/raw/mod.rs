mod arena;
mod cell;
mod handle;
mod node;
mod owner;
mod raw_ostree;

pub(crate) use arena::Arena;
pub(crate) use cell::Cell;
pub(crate) use handle::Handle;
pub(crate) use node::Side;
pub(crate) use owner::OwnerId;
pub(crate) use raw_ostree::RawOSTree;

use core::num::NonZero;
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_OWNER: AtomicUsize = AtomicUsize::new(1);

/// Identity of one container instance.
///
/// Positions carry the token of the container that produced them; a container
/// only accepts positions carrying its own token. Clones receive a new token,
/// so positions never cross from a container into its copy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct OwnerId(NonZero<usize>);

impl OwnerId {
    pub(crate) fn fresh() -> Self {
        let id = NEXT_OWNER.fetch_add(1, Ordering::Relaxed);
        Self(NonZero::new(id).expect("`OwnerId::fresh()` - owner tokens exhausted!"))
    }
}

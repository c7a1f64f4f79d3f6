//! Detail/editor view contract.
//!
//! A detail view mirrors the one domain object the list has selected. It
//! reads the object directly (not the list's stale snapshot) and sends edits
//! through the domain's action API. The
//! [`Coordinator`](crate::coordinator::Coordinator) drives it.

use crate::error::Result;

/// A view showing the selected domain object.
pub trait DetailView<H> {
    /// Shows `handle`, releasing whatever the previous selection held.
    ///
    /// On error the view must be left empty, as after [`clear`](Self::clear).
    fn refresh_for(&mut self, handle: &H) -> Result<()>;

    /// Shows nothing and releases any per-selection resources.
    fn clear(&mut self);

    /// The handle being shown.
    fn current(&self) -> Option<&H>;

    /// Renders the view. Empty by default.
    fn view(&self) -> String {
        String::new()
    }
}

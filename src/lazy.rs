//! Compute-once memoization.

use std::cell::OnceCell;

/// A value computed on first access and cached for the lifetime of the cell.
///
/// The cell never invalidates; owners that mutate the inputs of the
/// computation must replace the whole cell with [`Lazy::new`].
#[derive(Clone, Default)]
pub struct Lazy<T> {
    cell: OnceCell<T>,
}

impl<T> Lazy<T> {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Get the cached value, computing it with `init` on the first call.
    pub fn get_or_init<F: FnOnce() -> T>(&self, init: F) -> &T {
        self.cell.get_or_init(init)
    }

    /// Get the cached value if it has been computed.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell.get() {
            Some(val) => write!(f, "Lazy({val:?})"),
            None => write!(f, "Lazy(<uninit>)"),
        }
    }
}

//! Newtype handles for document sink objects
//!
//! These types provide compile-time type safety to prevent mixing up the
//! opaque handles a `DocumentSink` implementation issues for pages,
//! text containers and tables.

use std::fmt;

macro_rules! sink_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(usize);

        impl $name {
            pub fn new(index: usize) -> Self {
                Self(index)
            }

            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

sink_handle! {
    /// Handle for one page (slide) of the document
    PageId
}

sink_handle! {
    /// Handle for one text container (shape) on a page
    ContainerId
}

sink_handle! {
    /// Handle for one table created on a page
    TableId
}

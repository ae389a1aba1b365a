pub mod color;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use geometry::Rect;
pub use ids::{ContainerId, PageId, TableId};

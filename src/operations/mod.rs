//! Constructions composed from the line and circle primitives.
mod common_point;
mod extend;
mod fillet;

pub use common_point::{common_point_of_segments, SharedEndpoint};
pub use extend::{extend_line, shorten_line};
pub use fillet::{find_fillet_points, Fillet};

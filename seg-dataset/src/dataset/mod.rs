//! Dataset types and the on-disk layout helpers.

mod dataset_;
mod indexed;
mod path;
mod split;

pub use dataset_::*;
pub use indexed::*;
pub use path::*;
pub use split::*;

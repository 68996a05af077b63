mod move_category;
mod move_spec;

pub use move_category::MoveCategory;
pub use move_spec::MoveSpec;

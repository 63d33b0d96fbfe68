mod build;
mod node;

pub use build::{build_tree, solve};
pub use node::Folder;

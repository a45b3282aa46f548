pub mod indexer;
pub mod views;
pub mod walker;

pub use indexer::DeclIndexer;
pub use views::{DeclView, FuncView, TypeView, VarView};
pub use walker::FileWalker;

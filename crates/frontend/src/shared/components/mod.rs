pub mod load_more;

pub use load_more::LoadMoreBar;

pub mod levels;
pub mod list;
pub mod show;
pub mod speak;
pub mod toggle;

pub mod bogo;
pub mod bubble;
pub mod common;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod partition;
pub mod quick;

pub mod latch;
pub mod tracker;

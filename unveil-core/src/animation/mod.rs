pub mod anim;
pub mod ease;
pub mod ops;
pub mod proc;

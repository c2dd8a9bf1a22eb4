pub mod pointer;

pub use pointer::{PointerAction, PointerTarget, retarget};

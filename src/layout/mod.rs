pub mod measure;

pub use measure::{MeasureMode, MeasuredSize, measure};

pub mod canvas;
pub mod frame;
pub mod scheduler;
pub mod transform;

pub use canvas::CanvasSurface;
pub use frame::{IconSurface, paint_frame};
pub use scheduler::{AnimationFrameScheduler, FrameScheduler};
pub use transform::IconTransform;

// Planning: next-topic suggestions for weak dimensions, and career roadmaps.

pub mod guidance;
pub mod handlers;
pub mod learning_path;

pub use guidance::GuidancePlanner;
pub use learning_path::LearningPathPlanner;

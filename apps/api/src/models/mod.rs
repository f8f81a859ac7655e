pub mod career;
pub mod plan;
pub mod skill;

pub use career::{CareerMatch, CareerProfile};
pub use plan::{LearningStep, RoadmapPlan};
pub use skill::{round4, Explanation, SkillDimension, SkillVector, TopicPerformanceRecord};

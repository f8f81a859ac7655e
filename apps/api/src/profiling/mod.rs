// Skill profiling: raw topic performance → per-dimension skill vector + explanation.

pub mod handlers;
pub mod profiler;

pub use profiler::SkillProfiler;

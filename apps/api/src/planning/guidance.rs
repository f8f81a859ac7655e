//! Guidance Planner: timeframe-aware roadmap and study tips for a career.
//!
//! Three baseline phases are always emitted. Careers listed in
//! [`CAREER_TRACKS`] add one extra phase and one extra tip; any other id gets
//! the baseline only. The phase list is then cut to
//! `max(4, months / 3 + 2)` entries.

use crate::models::{RoadmapPlan, SkillVector};

pub const DEFAULT_TIMEFRAME_MONTHS: i64 = 12;
pub const MIN_TIMEFRAME_MONTHS: i64 = 3;

/// Number of weak dimensions named in the prioritisation tip.
const WEAK_TIP_COUNT: usize = 2;

const BASELINE_PHASES: [&str; 3] = [
    "Phase 1 (Weeks 1-4): Strengthen fundamentals + daily practice (30-60 mins).",
    "Phase 2 (Weeks 5-8): Topic-focused improvement on weakest areas + weekly mock quizzes.",
    "Phase 3 (Weeks 9-12): Projects/competitions + revision + speed/accuracy tuning.",
];

const TRACKING_TIP: &str =
    "Track accuracy and time-per-question; aim for steady improvement each week.";
const SPACED_REPETITION_TIP: &str =
    "Use spaced repetition for formulas/definitions and active recall for concepts.";

/// Career-specific extra phase and tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerTrack {
    pub career_id: &'static str,
    pub phase: &'static str,
    pub tip: &'static str,
}

pub const CAREER_TRACKS: &[CareerTrack] = &[
    CareerTrack {
        career_id: "data_scientist",
        phase: "Phase 4: Build 1 mini data project (EDA + simple model) and publish on GitHub.",
        tip: "Learn Python + basic stats + linear algebra foundations.",
    },
    CareerTrack {
        career_id: "doctor",
        phase: "Phase 4: NEET-style revision cycles + previous years questions.",
        tip: "Daily biology diagrams + chemistry numericals practice.",
    },
    CareerTrack {
        career_id: "mechanical_engineer",
        phase: "Phase 4: Mechanics/physics problem sets + CAD intro project.",
        tip: "Focus on physics fundamentals and visualization of forces.",
    },
    CareerTrack {
        career_id: "civil_engineer",
        phase: "Phase 4: Geometry + physics applications + basic structural concepts.",
        tip: "Practice spatial reasoning and measurement-based numericals.",
    },
];

/// Looks up the extra phase/tip for `career_id`, if it has one.
pub fn career_track(career_id: &str) -> Option<&'static CareerTrack> {
    CAREER_TRACKS.iter().find(|t| t.career_id == career_id)
}

/// Maximum phases shown for a timeframe (already clamped to the minimum).
pub fn phase_limit(months: i64) -> usize {
    let unlocked = usize::try_from(months / 3 + 2).unwrap_or(0);
    unlocked.max(4)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GuidancePlanner;

impl GuidancePlanner {
    pub fn new() -> Self {
        Self
    }

    pub fn roadmap(
        &self,
        career_id: &str,
        timeframe_months: i64,
        vector: &SkillVector,
    ) -> RoadmapPlan {
        let months = timeframe_months.max(MIN_TIMEFRAME_MONTHS);

        let mut phases: Vec<String> = BASELINE_PHASES.iter().map(|p| p.to_string()).collect();
        let mut tips = Vec::new();

        if !vector.is_empty() {
            let weak = vector.weakest(WEAK_TIP_COUNT);
            let names: Vec<&str> = weak.iter().map(|d| d.as_str()).collect();
            tips.push(format!(
                "Prioritize weak skills: {} with 2 extra sessions/week.",
                names.join(", ")
            ));
        }
        tips.push(TRACKING_TIP.to_string());
        tips.push(SPACED_REPETITION_TIP.to_string());

        if let Some(track) = career_track(career_id) {
            phases.push(track.phase.to_string());
            tips.push(track.tip.to_string());
        }

        phases.truncate(phase_limit(months));

        RoadmapPlan { phases, tips }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillDimension;
    use crate::reference;
    use indexmap::IndexMap;

    fn vector(scores: &[(&str, f64)]) -> SkillVector {
        let taxonomy = reference::bundled().taxonomy;
        let map: IndexMap<SkillDimension, f64> =
            scores.iter().map(|(d, s)| ((*d).into(), *s)).collect();
        SkillVector::normalized(&taxonomy, &map)
    }

    #[test]
    fn test_unknown_career_gets_baseline_only() {
        let plan = GuidancePlanner::new().roadmap("astronaut", 12, &SkillVector::empty());
        assert_eq!(plan.phases.len(), 3);
        assert_eq!(plan.phases[0], BASELINE_PHASES[0]);
        assert_eq!(plan.tips, vec![TRACKING_TIP, SPACED_REPETITION_TIP]);
    }

    #[test]
    fn test_every_known_track_adds_phase_and_tip() {
        for track in CAREER_TRACKS {
            let plan = GuidancePlanner::new().roadmap(track.career_id, 12, &SkillVector::empty());
            assert_eq!(plan.phases.len(), 4, "{}", track.career_id);
            assert_eq!(plan.phases[3], track.phase);
            assert_eq!(plan.tips.last().map(String::as_str), Some(track.tip));
        }
    }

    #[test]
    fn test_weak_tip_names_two_lowest() {
        let v = vector(&[
            ("algebra", 0.7),
            ("geometry", 0.4),
            ("arithmetic", 0.5),
            ("physics", 0.6),
            ("chemistry", 0.3),
            ("biology", 0.2),
            ("logic", 0.8),
        ]);
        let plan = GuidancePlanner::new().roadmap("doctor", 12, &v);
        assert_eq!(
            plan.tips[0],
            "Prioritize weak skills: biology, chemistry with 2 extra sessions/week."
        );
        assert_eq!(plan.tips.len(), 4);
    }

    #[test]
    fn test_timeframe_clamped_to_minimum() {
        let planner = GuidancePlanner::new();
        let short = planner.roadmap("data_scientist", 0, &SkillVector::empty());
        let negative = planner.roadmap("data_scientist", -6, &SkillVector::empty());
        let minimum = planner.roadmap("data_scientist", 3, &SkillVector::empty());
        assert_eq!(short, minimum);
        assert_eq!(negative, minimum);
        assert_eq!(minimum.phases.len(), 4);
    }

    #[test]
    fn test_phase_limit_formula() {
        assert_eq!(phase_limit(3), 4);
        assert_eq!(phase_limit(6), 4);
        assert_eq!(phase_limit(9), 5);
        assert_eq!(phase_limit(24), 10);
    }

    #[test]
    fn test_phase_count_non_decreasing_in_timeframe() {
        let planner = GuidancePlanner::new();
        for career in ["data_scientist", "doctor", "astronaut"] {
            let mut previous = 0;
            for months in 0..=36 {
                let count = planner.roadmap(career, months, &SkillVector::empty()).phases.len();
                assert!(count >= previous, "{career} at {months} months");
                previous = count;
            }
        }
    }
}

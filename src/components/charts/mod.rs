mod component;
mod config;
mod format;
mod js_bridge;

pub use component::{InterestsPieChart, ResumeScoreChart, ScoresBarChart, SkillsRadarChart};
pub use format::{AssessmentResults, ScoreMap};

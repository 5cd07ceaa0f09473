pub mod quiz;
pub mod schedule;

pub use quiz::{QuizFeedback, QuizFeedbackItem, QuizQuestion};
pub use schedule::{
    BlockDuration, Schedule, ScheduleBlock, ScheduleSummary, ScheduleType, StudyTopic,
    TopicDifficulty,
};

//! Schema validation for model output.
//!
//! Two failure classes are kept distinct: text that is not JSON at all
//! (`AppError::Parse`) and JSON that does not match the feature's expected
//! shape (`AppError::Shape`, naming the offending index where one exists).

use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizFeedback, QuizQuestion, Schedule},
};

#[derive(Debug, Deserialize)]
struct QuizGenerationReply {
    questions: Vec<QuizQuestion>,
}

fn parse_json(normalized: &str) -> AppResult<Value> {
    serde_json::from_str(normalized).map_err(|err| AppError::Parse(err.to_string()))
}

/// Validates the quiz-generation reply: a `questions` array whose entries
/// each carry a non-empty question, exactly 4 options, and a correct index
/// in [0,3].
pub fn parse_quiz_questions(normalized: &str) -> AppResult<Vec<QuizQuestion>> {
    let value = parse_json(normalized)?;
    let reply: QuizGenerationReply = serde_json::from_value(value)
        .map_err(|err| AppError::Shape(format!("missing questions array: {}", err)))?;

    for (index, question) in reply.questions.iter().enumerate() {
        if !question.is_well_formed() {
            return Err(AppError::Shape(format!(
                "invalid question format at index {}",
                index
            )));
        }
    }

    Ok(reply.questions)
}

/// Validates the quiz-feedback reply: a `feedback` array plus `totalScore`
/// and `suggestions` text fields.
pub fn parse_quiz_feedback(normalized: &str) -> AppResult<QuizFeedback> {
    let value = parse_json(normalized)?;
    serde_json::from_value(value)
        .map_err(|err| AppError::Shape(format!("invalid feedback format: {}", err)))
}

/// Validates the scheduling reply: a `blocks` array whose entries each carry
/// non-empty date, timeSlot, topic, activity and duration. `summary` and
/// `recommendations` are relayed when present.
pub fn parse_schedule(normalized: &str) -> AppResult<Schedule> {
    let value = parse_json(normalized)?;
    let schedule: Schedule = serde_json::from_value(value)
        .map_err(|err| AppError::Shape(format!("missing blocks array: {}", err)))?;

    for (index, block) in schedule.blocks.iter().enumerate() {
        let complete = !block.date.trim().is_empty()
            && !block.time_slot.trim().is_empty()
            && !block.topic.trim().is_empty()
            && !block.activity.trim().is_empty()
            && !block.duration.is_empty();
        if !complete {
            return Err(AppError::Shape(format!(
                "invalid block format at index {}",
                index
            )));
        }
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::BlockDuration;

    const VALID_QUESTIONS: &str = r#"{
        "questions": [
            {"question": "Q1", "options": ["a", "b", "c", "d"], "correct": 0, "explanation": "e1"},
            {"question": "Q2", "options": ["a", "b", "c", "d"], "correct": 3}
        ]
    }"#;

    #[test]
    fn accepts_well_formed_questions() {
        let questions = parse_quiz_questions(VALID_QUESTIONS).expect("questions should parse");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].explanation.as_deref(), Some("e1"));
        assert_eq!(questions[1].correct, 3);
    }

    #[test]
    fn prose_is_a_parse_error() {
        let err = parse_quiz_questions("I could not produce a quiz today.")
            .expect_err("prose should fail");
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn missing_questions_key_is_a_shape_error() {
        let err = parse_quiz_questions(r#"{"items": []}"#).expect_err("should fail");
        assert!(matches!(err, AppError::Shape(_)));
    }

    #[test]
    fn shape_error_names_the_offending_question_index() {
        let json = r#"{
            "questions": [
                {"question": "Q1", "options": ["a", "b", "c", "d"], "correct": 0},
                {"question": "Q2", "options": ["a", "b", "c"], "correct": 1}
            ]
        }"#;

        let err = parse_quiz_questions(json).expect_err("short options should fail");
        assert!(err.to_string().contains("index 1"), "got: {}", err);
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let json = r#"{
            "questions": [
                {"question": "Q1", "options": ["a", "b", "c", "d"], "correct": 4}
            ]
        }"#;

        let err = parse_quiz_questions(json).expect_err("should fail");
        assert!(err.to_string().contains("index 0"), "got: {}", err);
    }

    #[test]
    fn non_integer_correct_is_a_shape_error() {
        let json = r#"{
            "questions": [
                {"question": "Q1", "options": ["a", "b", "c", "d"], "correct": "0"}
            ]
        }"#;

        let err = parse_quiz_questions(json).expect_err("should fail");
        assert!(matches!(err, AppError::Shape(_)));
    }

    #[test]
    fn accepts_complete_feedback() {
        let json = r#"{
            "feedback": [
                {"questionIndex": 0, "isCorrect": true, "explanation": "Right"},
                {"questionIndex": 1, "isCorrect": false, "explanation": "Wrong"}
            ],
            "totalScore": "1/2",
            "suggestions": "Review chapter 3"
        }"#;

        let feedback = parse_quiz_feedback(json).expect("feedback should parse");
        assert_eq!(feedback.feedback.len(), 2);
        assert_eq!(feedback.total_score, "1/2");
    }

    #[test]
    fn feedback_without_total_score_is_a_shape_error() {
        let json = r#"{"feedback": [], "suggestions": "s"}"#;
        let err = parse_quiz_feedback(json).expect_err("should fail");
        assert!(matches!(err, AppError::Shape(_)));
    }

    #[test]
    fn accepts_complete_schedule() {
        let json = r#"{
            "blocks": [
                {"date": "2026-08-10", "timeSlot": "Morning", "topic": "Algebra",
                 "activity": "Practice problems", "duration": "2 hours"},
                {"date": "2026-08-11", "timeSlot": "Evening", "topic": "Geometry",
                 "activity": "Review notes", "duration": 1.5}
            ],
            "summary": {"totalHours": 3.5, "topicsPerWeek": 2, "suggestedPace": "steady"},
            "recommendations": ["Take breaks"]
        }"#;

        let schedule = parse_schedule(json).expect("schedule should parse");
        assert_eq!(schedule.blocks.len(), 2);
        assert_eq!(schedule.blocks[1].duration, BlockDuration::Hours(1.5));
        let summary = schedule.summary.expect("summary should be relayed");
        assert_eq!(summary.total_hours, 3.5);
        assert_eq!(schedule.recommendations, vec!["Take breaks".to_string()]);
    }

    #[test]
    fn schedule_without_blocks_is_a_shape_error() {
        let err = parse_schedule(r#"{"summary": {}}"#).expect_err("should fail");
        assert!(matches!(err, AppError::Shape(_)));
    }

    #[test]
    fn schedule_prose_is_a_parse_error() {
        let err = parse_schedule("Here is your study plan: work hard every day.")
            .expect_err("prose should fail");
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn shape_error_names_the_offending_block_index() {
        let json = r#"{
            "blocks": [
                {"date": "2026-08-10", "timeSlot": "Morning", "topic": "Algebra",
                 "activity": "Practice", "duration": "2 hours"},
                {"date": "2026-08-11", "timeSlot": "", "topic": "Geometry",
                 "activity": "Review", "duration": "1 hour"}
            ]
        }"#;

        let err = parse_schedule(json).expect_err("empty timeSlot should fail");
        assert!(err.to_string().contains("index 1"), "got: {}", err);
    }

    #[test]
    fn zero_duration_block_is_rejected() {
        let json = r#"{
            "blocks": [
                {"date": "2026-08-10", "timeSlot": "Morning", "topic": "Algebra",
                 "activity": "Practice", "duration": 0}
            ]
        }"#;

        let err = parse_schedule(json).expect_err("zero duration should fail");
        assert!(err.to_string().contains("index 0"), "got: {}", err);
    }
}

//! Prompt templates for the three learning utilities.
//!
//! Each builder is a pure function: caller data is interpolated verbatim
//! into a fixed template that states the task and the exact JSON shape the
//! model must return. Builders never touch the network.

const QUIZ_GENERATION_TEMPLATE: &str = r#"Generate a new and unique quiz about {{topic}} with difficulty level {{difficulty}}.
Create exactly 5 multiple choice questions with varying complexity and structure to test different aspects of the topic.
Each question should have 4 options with only one correct answer.
Add a brief explanation for each correct answer to help with learning.
Format as clean JSON without any markdown:
{
  "questions": [
    {
      "question": "question text",
      "options": ["option1", "option2", "option3", "option4"],
      "correct": 0,
      "explanation": "Brief explanation why this answer is correct"
    }
  ]
}

To ensure uniqueness:
1. Vary question types (mix of factual, conceptual, and applied knowledge)
2. Use different question structures (what, how, why, which, etc.)
3. Include some scenario-based questions when appropriate
4. Ensure options are distinct and plausible
5. Make sure questions build on different aspects of {{topic}}"#;

const QUIZ_FEEDBACK_TEMPLATE: &str = r#"Given these quiz answers about {{topic}}, provide detailed feedback for each answer.
Questions and answers: {{answers}}
Provide feedback in this JSON format:
{
  "feedback": [
    {
      "questionIndex": 0,
      "isCorrect": true/false,
      "explanation": "Detailed explanation why this answer is correct/incorrect and what the correct answer is"
    }
  ],
  "totalScore": "x/y",
  "suggestions": "Overall suggestions for improvement"
}"#;

const SUMMARIZATION_TEMPLATE: &str = r#"Summarize the following text concisely (aim for about 25% of the original length). Focus on key points and main ideas.

Text to summarize:
"""
{{text}}
"""

Requirements:
1. Clear and concise language
2. Key information only
3. Maintain core message
4. No explanatory phrases or meta-text"#;

const SCHEDULE_TEMPLATE: &str = r#"Create a detailed {{schedule_type}} study schedule for the following topics:
{{topics}}

Consider these factors when creating the schedule:
1. Deadline priorities
2. Topic difficulties
3. Estimated study hours
4. Balanced distribution of study sessions
5. Regular breaks and review sessions
6. Progressive learning approach

Return the schedule in this JSON format:
{
  "blocks": [
    {
      "date": "YYYY-MM-DD",
      "timeSlot": "Morning/Afternoon/Evening",
      "topic": "Topic name",
      "activity": "Specific study activity or goal",
      "duration": "X hours"
    }
  ],
  "summary": {
    "totalHours": number,
    "topicsPerWeek": number,
    "suggestedPace": "Description of recommended study pace"
  },
  "recommendations": [
    "Specific study tips and recommendations"
  ]
}

Important guidelines:
1. Create a realistic and achievable schedule
2. Include variety in study activities
3. Account for topic dependencies
4. Include review sessions
5. Distribute difficult topics across different days
6. Consider optimal study times based on topic complexity"#;

pub fn quiz_generation_prompt(topic: &str, difficulty: &str) -> String {
    QUIZ_GENERATION_TEMPLATE
        .replace("{{topic}}", topic)
        .replace("{{difficulty}}", difficulty)
}

/// `answers_json` is the caller's graded answers serialized as JSON, embedded
/// verbatim so the model sees exactly what the learner submitted.
pub fn quiz_feedback_prompt(topic: &str, answers_json: &str) -> String {
    QUIZ_FEEDBACK_TEMPLATE
        .replace("{{topic}}", topic)
        .replace("{{answers}}", answers_json)
}

pub fn summarization_prompt(text: &str) -> String {
    SUMMARIZATION_TEMPLATE.replace("{{text}}", text)
}

pub fn schedule_prompt(topics_json: &str, schedule_type: &str) -> String {
    SCHEDULE_TEMPLATE
        .replace("{{schedule_type}}", schedule_type)
        .replace("{{topics}}", topics_json)
}

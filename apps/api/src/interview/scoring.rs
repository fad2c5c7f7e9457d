//! Answer grading: pure functions, no I/O.

use crate::interview::quiz::QuizQuestion;
use crate::models::assessment::QuestionResult;

/// Pairs each question with the answer at the same index.
/// Answers beyond the end of `answers` count as unanswered; unanswered is incorrect.
pub fn grade_answers(questions: &[QuizQuestion], answers: &[Option<String>]) -> Vec<QuestionResult> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let user_answer = answers.get(i).cloned().flatten();
            QuestionResult {
                question: q.question.clone(),
                answer: q.correct_answer.clone(),
                is_correct: user_answer.as_deref() == Some(q.correct_answer.as_str()),
                user_answer,
                explanation: q.explanation.clone(),
            }
        })
        .collect()
}

/// Percentage of correct results, 0 to 100. An empty list scores 0.
pub fn compute_score(results: &[QuestionResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let correct = results.iter().filter(|r| r.is_correct).count();
    correct as f64 / results.len() as f64 * 100.0
}

pub fn wrong_answers(results: &[QuestionResult]) -> Vec<&QuestionResult> {
    results.iter().filter(|r| !r.is_correct).collect()
}

/// Renders wrong answers for the improvement-tip prompt, one block per question.
pub fn format_wrong_answers(wrong: &[&QuestionResult]) -> String {
    wrong
        .iter()
        .map(|r| {
            format!(
                "Question: \"{}\"\nCorrect Answer: \"{}\"\nUser Answer: \"{}\"",
                r.question,
                r.answer,
                r.user_answer.as_deref().unwrap_or("(no answer)")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

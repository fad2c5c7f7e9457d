// Interview LLM prompt templates.
// All prompts for the interview module are defined here.

pub const QUIZ_PROMPT_TEMPLATE: &str = r#"You are an AI that generates interview and aptitude quiz questions.

Generate {num_questions} {quiz_type} questions for a {industry} professional{expertise} at a {difficulty} difficulty level.

Each question MUST be multiple choice with exactly 4 options.
"correctAnswer" MUST be copied verbatim from one of the 4 options.

The response MUST be valid JSON in the following format ONLY:
{
  "type": "technical | aptitude | verbal | analytical | behavioral",
  "questions": [
    {
      "question": "string",
      "options": ["string", "string", "string", "string"],
      "correctAnswer": "string",
      "explanation": "string"
    }
  ]
}

- Set "type" to "{quiz_type}".
"#;

pub const IMPROVEMENT_TIP_PROMPT_TEMPLATE: &str = r#"The user got the following {industry} {category} interview questions wrong:

{wrong_answers}

Based on these mistakes, provide a concise, specific improvement tip.
Focus on the knowledge gaps revealed by these wrong answers.
Keep the response under 2 sentences and make it encouraging.
Don't explicitly mention the mistakes, instead focus on what to learn/practice."#;

pub const SKILL_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert interview and career coach analyzing quiz performance data.

Based on the following questions, whether they were answered correctly, and their explanations, infer:
- The user's strong skills and topics
- The user's weak skills and topics
- Specific topics that require improvement
- Recommended focus areas for upcoming interviews

Quiz data:
{question_summaries}

Return a valid JSON object in this exact format:
{
  "strengths": ["string"],
  "weakAreas": ["string"],
  "topicsToImprove": ["string"],
  "recommendedFocusAreas": ["string"]
}

- Keep each bullet concise and specific (e.g., "Good understanding of OOP concepts").
- Focus on practical, actionable insights.
"#;

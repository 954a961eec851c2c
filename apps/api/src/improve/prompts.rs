// LLM prompt templates for field improvement and cover-letter writing.
// Shared fragments come from llm_client::prompts.

/// System prompt for improving a single resume field.
pub const IMPROVE_SYSTEM: &str = "You are an expert resume writer who rewrites resume \
    content to be impactful, concise and aligned with industry standards.";

/// Field improvement prompt.
/// Replace: {field_kind}, {industry_clause}, {context_lines}, {current_text}
/// `{industry_clause}` is `" for a <industry> professional"` or empty.
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer, improve the following {field_kind}{industry_clause}.
Make it more impactful, quantifiable, and aligned with industry standards.
{context_lines}
Current content: "{current_text}"

Requirements:
1. Use action verbs
2. Include metrics and results where possible
3. Highlight relevant technical skills
4. Keep it concise but detailed
5. Focus on achievements over responsibilities
6. Use industry-specific keywords

Format the response as a single paragraph without any additional text or explanations."#;

/// System prompt for cover letter generation.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional career writer who drafts \
    tailored cover letters in markdown.";

/// Cover letter prompt.
/// Replace: {job_title}, {company_name}, {industry}, {experience_years}, {skills}, {bio},
///          {job_description}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for a {job_title} position at {company_name}.

About the candidate:
- Industry: {industry}
- Years of Experience: {experience_years}
- Skills: {skills}
- Professional Background: {bio}

Job Description:
{job_description}

Requirements:
1. Use a professional, enthusiastic tone
2. Highlight relevant skills and experience
3. Show understanding of the company's needs
4. Keep it concise (max 400 words)
5. Use proper business letter formatting in markdown
6. Include specific examples of achievements
7. Relate candidate's background to job requirements

Format the letter in markdown."#;

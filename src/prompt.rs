//! Action-specific prompt templates and generation limits.
//!
//! Templates use `{placeholder}` substitution. System templates fix the output schema;
//! user templates carry the brief.

use crate::brief::{ContentBrief, GenerationAction, GenerationOptions};
use crate::provider::{GenerationLimits, Prompt};

const CONTENT_SYSTEM: &str = "You are a content production engine and a world-class content \
strategist who creates viral content packages. Generate a COMPLETE content package in JSON \
format with these fields:
{
  \"hooks\": [{count} hook options, each with \"text\" and \"style\" (controversial/curiosity/story/stat/question)],
  \"script\": \"Full script with timestamps and delivery notes\",
  \"caption\": \"Caption with CTA for the platform\",
  \"hashtags\": [30 hashtags ranked by estimated reach],
  \"bRollList\": [{\"shot\": \"description\", \"duration\": \"seconds\", \"purpose\": \"why\"}],
  \"thumbnailConcept\": \"Description of thumbnail idea\"
}
Respond with the JSON object only.";

const CONTENT_USER: &str = "Create a content package for {platform}.
Content type: {content_type}.
Topic: {topic}.
Niche: {niche}.
Tone: {tone}.";

const HOOKS_SYSTEM: &str = "You are a viral content hook expert. Generate {count} hooks across \
these 5 styles:
- Controversial: Challenge common beliefs
- Curiosity: Create information gaps
- Story: Personal narrative openings
- Stat: Lead with surprising numbers
- Question: Provocative questions
Return as JSON array: [{\"text\": \"...\", \"style\": \"...\", \"engagementScore\": 1-10}]";

const HOOKS_USER: &str = "Generate {count} hooks about: {topic}
Platform: {platform}.
Tone: {tone}.";

const SCRIPT_SYSTEM: &str = "You are a professional scriptwriter for content creators. Write a \
complete script with: intro hook, talking points with transitions, CTA placement suggestions, \
and outro. Include [TIMESTAMP] markers and [DELIVERY NOTE] annotations for filming. Make it \
natural and conversational, not robotic.";

const SCRIPT_USER: &str =
    "Write a {target_length} {platform} script about \"{topic}\" in a {style} style.
Tone: {tone}.";

const POSTING_SYSTEM: &str = "You are a social media analytics expert. Based on platform \
algorithms and engagement data, suggest the 5 best posting times. Include day of week, time, \
and reasoning for each suggestion. Format as JSON array: \
[{\"text\": \"Tuesday 9:00 AM -- reason\", \"day\": \"...\", \"time\": \"...\", \"reasoning\": \"...\"}]";

const POSTING_USER: &str =
    "Best posting times for {platform} in the {niche} niche? Topic focus: {topic}.";

const CHAT_SYSTEM: &str = "You are a creative assistant. Help creators produce viral content. \
Be creative and specific.";

const CHAT_USER: &str = "{topic}";

/// Token and temperature limits for an action. Package and script actions get the larger
/// budget.
pub fn limits_for(action: GenerationAction) -> GenerationLimits {
    let (max_tokens, temperature) = match action {
        GenerationAction::GenerateContent => (4096, 0.85),
        GenerationAction::GenerateScript => (4096, 0.8),
        GenerationAction::GenerateHooks => (2048, 0.9),
        GenerationAction::PostingTimes => (1024, 0.7),
        GenerationAction::Chat => (2048, 0.8),
    };
    GenerationLimits {
        max_tokens,
        temperature,
    }
}

fn templates(action: GenerationAction) -> (&'static str, &'static str) {
    match action {
        GenerationAction::GenerateContent => (CONTENT_SYSTEM, CONTENT_USER),
        GenerationAction::GenerateHooks => (HOOKS_SYSTEM, HOOKS_USER),
        GenerationAction::GenerateScript => (SCRIPT_SYSTEM, SCRIPT_USER),
        GenerationAction::PostingTimes => (POSTING_SYSTEM, POSTING_USER),
        GenerationAction::Chat => (CHAT_SYSTEM, CHAT_USER),
    }
}

fn render(
    template: &str,
    action: GenerationAction,
    brief: &ContentBrief,
    options: &GenerationOptions,
) -> String {
    template
        .replace("{platform}", brief.platform.label())
        .replace("{content_type}", brief.content_type.label())
        .replace("{tone}", brief.tone.trim())
        .replace("{niche}", options.niche.trim())
        .replace("{count}", &options.hook_count(action).to_string())
        .replace("{target_length}", options.target_length())
        .replace("{style}", options.style())
        // topic last so braces inside user text are never re-expanded
        .replace("{topic}", brief.topic.trim())
}

/// Build the role-structured prompt for one dispatch.
pub fn build_prompt(
    action: GenerationAction,
    brief: &ContentBrief,
    options: &GenerationOptions,
) -> Prompt {
    let (system, user) = templates(action);
    let mut user = render(user, action, brief, options);

    if let Some(audience) = brief.audience() {
        user.push_str(&format!("\nTarget audience: {}.", audience));
    }
    if let Some(context) = brief.context() {
        user.push_str(&format!("\nAdditional context: {}", context));
    }

    Prompt {
        system: render(system, action, brief, options),
        user,
    }
}

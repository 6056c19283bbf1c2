// All LLM prompt constants for the rewrite module.
// Plain-text output only — the Format Converter normalizes shape afterwards.

use crate::rewrite::{RewriteContext, RewriteGoal};

/// System prompt for all rewrite calls — enforces text-only replies.
pub const REWRITE_SYSTEM: &str = "You are an expert resume writer. \
    You rewrite resume text on request. \
    Respond with the rewritten text ONLY. \
    Do NOT use markdown code fences. \
    Do NOT include explanations, preambles, or apologies.";

/// Rewrite prompt template. Replace `{goal_instruction}`, `{shape_instruction}`,
/// and `{text}` before sending.
pub const REWRITE_PROMPT_TEMPLATE: &str = "Rewrite the following resume text.

Goal: {goal_instruction}
Output shape: {shape_instruction}

Text to rewrite:
{text}";

/// Per-goal rewriting instruction.
pub fn goal_instruction(goal: RewriteGoal) -> &'static str {
    match goal {
        RewriteGoal::Professional => {
            "Make the wording polished and professional. Prefer strong action \
             verbs and concrete outcomes; remove filler."
        }
        RewriteGoal::Punchy => {
            "Make it short and punchy. Cut every word that does not add \
             information; lead with impact."
        }
        RewriteGoal::Grammar => {
            "Fix grammar, spelling, and punctuation only. Do not change the \
             meaning, tone, or level of detail."
        }
        RewriteGoal::Executive => {
            "Elevate the language for an executive audience: strategy, scope, \
             and business outcomes over implementation detail."
        }
    }
}

/// Per-context output-shape instruction. Experience text comes back as
/// bullet points; summary text comes back as one paragraph.
pub fn shape_instruction(context: RewriteContext) -> &'static str {
    match context {
        RewriteContext::Experience => {
            "Bullet points, one achievement per line, each starting with '• '."
        }
        RewriteContext::Summary => "A single flowing paragraph with no bullet points.",
    }
}

/// Builds the complete rewrite prompt for one call.
pub fn build_rewrite_prompt(text: &str, goal: RewriteGoal, context: RewriteContext) -> String {
    REWRITE_PROMPT_TEMPLATE
        .replace("{goal_instruction}", goal_instruction(goal))
        .replace("{shape_instruction}", shape_instruction(context))
        .replace("{text}", text)
}

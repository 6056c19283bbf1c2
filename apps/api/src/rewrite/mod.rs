// AI rewrite collaborator.
// Sends text to the LLM with a goal and a context, then forces the reply
// back into the local bullets/paragraph policy via the Format Converter.
// On any upstream failure the original text is kept and a notice surfaced.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::format::{convert, TextFormat};
use crate::llm_client::{LlmClient, LlmError};
use crate::rewrite::prompts::{build_rewrite_prompt, REWRITE_SYSTEM};

// ────────────────────────────────────────────────────────────────────────────
// Request vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// What the caller wants the rewrite to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteGoal {
    Professional,
    Punchy,
    Grammar,
    Executive,
}

/// Which document field the text comes from. Experience text must come back
/// bullet-formatted, summary text as a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteContext {
    Experience,
    Summary,
}

impl RewriteContext {
    /// The target representation the Format Converter enforces on AI output
    /// for this context.
    pub fn target_format(self) -> TextFormat {
        match self {
            RewriteContext::Experience => TextFormat::Bullets,
            RewriteContext::Summary => TextFormat::Paragraph,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rewriter seam
// ────────────────────────────────────────────────────────────────────────────

/// Produces a replacement string for the given text. Implemented by
/// `LlmRewriter` in production; tests swap in a stub.
#[async_trait]
pub trait Rewriter: Send + Sync {
    async fn rewrite(
        &self,
        text: &str,
        goal: RewriteGoal,
        context: RewriteContext,
    ) -> Result<String, LlmError>;
}

/// Default rewriter backed by the shared LLM client.
pub struct LlmRewriter {
    llm: LlmClient,
}

impl LlmRewriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Rewriter for LlmRewriter {
    async fn rewrite(
        &self,
        text: &str,
        goal: RewriteGoal,
        context: RewriteContext,
    ) -> Result<String, LlmError> {
        let prompt = build_rewrite_prompt(text, goal, context);
        self.llm.call_text(&prompt, REWRITE_SYSTEM).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rewrite service
// ────────────────────────────────────────────────────────────────────────────

/// Result of one rewrite attempt. `rewritten == false` means the original
/// text was kept; `notice` explains why when the cause was a failure.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteOutcome {
    pub text: String,
    pub rewritten: bool,
    pub notice: Option<String>,
}

/// Rewrites `text` for the given goal and context.
///
/// The AI reply is post-processed through the Format Converter so the shape
/// policy holds even when the model ignores the prompt. A failed call is
/// non-fatal: the original text comes back unchanged with a notice.
pub async fn rewrite_text(
    rewriter: &dyn Rewriter,
    text: &str,
    goal: RewriteGoal,
    context: RewriteContext,
) -> RewriteOutcome {
    match rewriter.rewrite(text, goal, context).await {
        Ok(replacement) => RewriteOutcome {
            text: convert(&replacement, context.target_format()),
            rewritten: true,
            notice: None,
        },
        Err(e) => {
            warn!("Rewrite failed, keeping original text: {e}");
            RewriteOutcome {
                text: text.to_string(),
                rewritten: false,
                notice: Some("Rewrite unavailable; original text kept.".to_string()),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

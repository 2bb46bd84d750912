use super::anthropic_types::{AnthropicContentBlock, AnthropicResponse};
use super::message::{TokenUsage, VoisiaMessage};
use super::openai_types::OpenAIResponse;
use crate::error::{BridgeError, Result};

/// Collapse an Anthropic response into a Voisia message.
/// Text blocks are joined in order; every other block kind is skipped.
pub fn anthropic_to_message(resp: &AnthropicResponse) -> VoisiaMessage {
    let content: String = resp
        .content
        .iter()
        .filter_map(AnthropicContentBlock::as_text)
        .collect();

    VoisiaMessage {
        role: resp.role.clone(),
        content,
    }
}

/// Take role and content from the first choice of an `OpenAI` response.
pub fn openai_to_message(resp: &OpenAIResponse) -> Result<VoisiaMessage> {
    let choice = resp.choices.first().ok_or(BridgeError::NoChoices)?;

    Ok(VoisiaMessage {
        role: choice.message.role.clone(),
        content: choice.message.content.clone().unwrap_or_default(),
    })
}

/// Token usage of an Anthropic response, `None` when the response has no usage.
pub fn anthropic_token_usage(resp: &AnthropicResponse) -> Option<TokenUsage> {
    resp.usage.as_ref().map(|u| TokenUsage {
        input_tokens: u.input_tokens.unwrap_or(0),
        output_tokens: u.output_tokens.unwrap_or(0),
    })
}

/// Token usage of an `OpenAI` response, `None` when the response has no usage.
pub fn openai_token_usage(resp: &OpenAIResponse) -> Option<TokenUsage> {
    resp.usage.as_ref().map(|u| TokenUsage {
        input_tokens: u.prompt_tokens.unwrap_or(0),
        output_tokens: u.completion_tokens.unwrap_or(0),
    })
}

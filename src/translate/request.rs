//! Build backend invocation arguments from a conversation split into a [`Turn`].
//!
//! Field names follow the backend's snake_case convention:
//! `max_output_tokens` becomes `max_tokens`, the history goes to `convo_history`
//! (Anthropic) or `conversation_history` (`OpenAI`), and `OpenAI` instructions
//! travel as `system`.

use super::anthropic_types::{AnthropicInvokeParams, AnthropicModelParams};
use super::message::Turn;
use super::openai_types::{OpenAIInvokeParams, OpenAIModelParams};

/// Build the `generate_anthropic_response` arguments.
pub fn anthropic_invoke_params(turn: Turn, params: &AnthropicModelParams) -> AnthropicInvokeParams {
    AnthropicInvokeParams {
        model: params.model.clone(),
        input: turn.input,
        system: non_empty(params.system.as_deref()),
        max_tokens: params.max_output_tokens,
        temperature: params.temperature,
        top_p: params.top_p,
        thinking: params.thinking.clone(),
        convo_history: turn.history,
    }
}

/// Build the `generate_openai_response` arguments. Results are always stored.
pub fn openai_invoke_params(turn: Turn, params: &OpenAIModelParams) -> OpenAIInvokeParams {
    OpenAIInvokeParams {
        model: params.model.clone(),
        input: turn.input,
        max_tokens: params.max_output_tokens,
        temperature: params.temperature,
        top_p: params.top_p,
        store: true,
        system: non_empty(params.instructions.as_deref()),
        conversation_history: turn.history,
    }
}

// Empty text is sent as null, same as absent.
fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_string)
}

//! One adapter per provider, behind a shared trait.
//!
//! An adapter knows three things: how to turn a [`Turn`] into its backend
//! command's arguments, how to collapse the provider response into a
//! [`VoisiaMessage`], and where the response keeps its token counts. The
//! conversation splitting and the invocation itself live in [`generate`] and
//! are shared by both.

use crate::error::Result;
use crate::invoke::Invoker;
use crate::providers::ProviderKind;
use crate::translate::anthropic_types::{
    AnthropicInvokeParams, AnthropicModelParams, AnthropicResponse,
};
use crate::translate::message::{Conversation, TokenUsage, Turn, VoisiaMessage};
use crate::translate::openai_types::{OpenAIInvokeParams, OpenAIModelParams, OpenAIResponse};
use crate::translate::{request, response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait ProviderAdapter {
    const PROVIDER: ProviderKind;

    type Params;
    type Request: Serialize;
    type Response: DeserializeOwned;

    fn build_request(turn: Turn, params: &Self::Params) -> Self::Request;

    fn normalize_message(resp: &Self::Response) -> Result<VoisiaMessage>;

    fn extract_usage(resp: &Self::Response) -> Option<TokenUsage>;
}

/// Message-style adapter (Anthropic Messages API).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicAdapter;

impl ProviderAdapter for AnthropicAdapter {
    const PROVIDER: ProviderKind = ProviderKind::Anthropic;

    type Params = AnthropicModelParams;
    type Request = AnthropicInvokeParams;
    type Response = AnthropicResponse;

    fn build_request(turn: Turn, params: &Self::Params) -> Self::Request {
        request::anthropic_invoke_params(turn, params)
    }

    // Never fails: a malformed response yields an empty or role-less message.
    fn normalize_message(resp: &Self::Response) -> Result<VoisiaMessage> {
        Ok(response::anthropic_to_message(resp))
    }

    fn extract_usage(resp: &Self::Response) -> Option<TokenUsage> {
        response::anthropic_token_usage(resp)
    }
}

/// Completion-style adapter (`OpenAI`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIAdapter;

impl ProviderAdapter for OpenAIAdapter {
    const PROVIDER: ProviderKind = ProviderKind::OpenAI;

    type Params = OpenAIModelParams;
    type Request = OpenAIInvokeParams;
    type Response = OpenAIResponse;

    fn build_request(turn: Turn, params: &Self::Params) -> Self::Request {
        request::openai_invoke_params(turn, params)
    }

    fn normalize_message(resp: &Self::Response) -> Result<VoisiaMessage> {
        response::openai_to_message(resp)
    }

    fn extract_usage(resp: &Self::Response) -> Option<TokenUsage> {
        response::openai_token_usage(resp)
    }
}

/// Split `input`, build the adapter's arguments, invoke its backend command and
/// decode the raw provider response.
///
/// Backend failures are returned as they come; nothing is retried.
pub async fn generate<A: ProviderAdapter>(
    invoker: &dyn Invoker,
    input: impl Into<Conversation>,
    params: &A::Params,
) -> Result<A::Response> {
    let turn = Turn::split(input)?;
    let command = A::PROVIDER.command();

    tracing::debug!(
        command,
        history = turn.history.len(),
        "Invoking backend command"
    );

    let args = serde_json::to_value(A::build_request(turn, params))?;
    let raw = invoker.invoke(command, args).await?;

    Ok(serde_json::from_value(raw)?)
}

//! Chat backend client for the `ai` subcommand.
//!
//! Talks to an OpenAI-compatible chat completions endpoint. The endpoint URL
//! and API key come from the environment (`GROQ_API_URL`, `GROQ_API_KEY`),
//! loaded through a `.env` file when one is present.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

const MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Send `prompt` to the chat backend and return the first reply.
///
/// # Errors
///
/// Returns an error if `GROQ_API_URL` or `GROQ_API_KEY` is unset, the HTTP
/// request fails or comes back non-2xx, or the response carries no choices.
pub fn ask(prompt: &str) -> anyhow::Result<String> {
    dotenvy::dotenv().ok();
    let url = std::env::var("GROQ_API_URL").context("GROQ_API_URL is not set")?;
    let key = std::env::var("GROQ_API_KEY").context("GROQ_API_KEY is not set")?;

    let request = ChatRequest {
        model: MODEL,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
    };

    let client = reqwest::blocking::Client::new();
    let response: ChatResponse = client
        .post(&url)
        .bearer_auth(&key)
        .json(&request)
        .send()
        .context("chat request failed")?
        .error_for_status()
        .context("chat backend returned an error status")?
        .json()
        .context("failed to decode chat response")?;

    match response.choices.into_iter().next() {
        Some(choice) => Ok(choice.message.content),
        None => bail!("chat backend returned no choices"),
    }
}

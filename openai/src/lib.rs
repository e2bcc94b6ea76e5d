//! Thin OpenAI API client: chat completions, image synthesis, and resource
//! download. No retry or backoff; failures carry the provider's message.

mod client;

pub use client::OpenAiClient;

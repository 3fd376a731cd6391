//! Image classification via a generative-vision HTTP API.
//!
//! Implements the [`recircle_core::ImageClassifier`] capability against the
//! Gemini `generateContent` REST endpoint: one strict prompt, the image as an
//! inline base64 part, and JSON extracted from the model's free-text reply.

mod client;
mod parse;
mod prompt;

pub use client::GeminiClassifier;

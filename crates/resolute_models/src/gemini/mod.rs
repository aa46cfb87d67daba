mod client;
mod conversions;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiResponse, GeminiUsage,
};

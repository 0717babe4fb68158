#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Mock AI providers and fixtures shared by the integration tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use vidsum::{AiProvider, MediaRef, SummarizerError};

pub const YOUTUBE_URL: &str = "https://www.youtube.com/watch?v=abc123";

/// A typical model answer: a tag array on the first line, then markdown.
pub const TAGGED_RESPONSE: &str = "[\"rust\", \"async\", \"tutorial\"]\n\n# 📹 Async Rust\n\n## 🎯 Executive Summary\nA walk through futures and executors.";

// --- Mock AI Provider for Logic Testing ---
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, MediaRef)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    pub fn calls(&self) -> Vec<(String, MediaRef)> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str, media: &MediaRef) -> Result<String, SummarizerError> {
        self.call_history
            .write()
            .unwrap()
            .push((prompt.to_string(), media.clone()));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok("Default mock response".to_string())
        }
    }
}

// --- Mock AI Provider that always fails ---
#[derive(Clone, Debug)]
pub struct FailingAiProvider {
    pub status: u16,
}

#[async_trait]
impl AiProvider for FailingAiProvider {
    async fn generate(&self, _prompt: &str, _media: &MediaRef) -> Result<String, SummarizerError> {
        Err(SummarizerError::AiApi {
            status: self.status,
            body: "quota exceeded".to_string(),
        })
    }
}

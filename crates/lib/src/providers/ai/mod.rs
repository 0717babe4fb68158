pub mod vertex;

use crate::{errors::SummarizerError, types::MediaRef};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

pub use vertex::VertexProvider;

/// A trait for interacting with a generative AI provider.
///
/// The provider receives a text prompt together with a reference to remote media and
/// returns the generated text. Implementations perform exactly one call: no retries.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response for `prompt`, letting the model read `media`.
    async fn generate(&self, prompt: &str, media: &MediaRef) -> Result<String, SummarizerError>;
}

dyn_clone::clone_trait_object!(AiProvider);

//! External collaborator interfaces for PersonaSwarm
//!
//! The core consumes three collaborators through narrow contracts: a voice
//! synthesizer, a GPU telemetry sampler, and a trait-profile corpus store.
//! Each is an opaque, possibly-unavailable service; every failure path
//! degrades to a deterministic fallback rather than propagating.

pub mod error;
pub mod store;
pub mod telemetry;
pub mod voice;

pub use error::{CollaboratorError, CollaboratorResult};
pub use store::{PersonaCorpus, ProfileStore};
pub use telemetry::{FixedTelemetry, GpuTelemetry, NullTelemetry, TelemetrySample};
pub use voice::{
    synthesize_or_fallback, FallbackVoice, UnavailableVoice, VoiceConfig, VoiceQualityReport,
    VoiceSynthesizer,
};

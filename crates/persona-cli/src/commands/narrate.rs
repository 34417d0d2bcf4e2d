//! Narrate command implementation

use crate::{output, Result};
use clap::Args;
use personaswarm_collaborators::{synthesize_or_fallback, FallbackVoice, VoiceConfig};

#[derive(Debug, Clone, Args)]
pub struct NarrateArgs {
    /// Text to narrate
    pub text: String,

    /// Named voice preset
    #[arg(long, default_value = "narrator")]
    pub voice: String,

    /// Accent hint
    #[arg(long)]
    pub accent: Option<String>,

    /// Tone hint
    #[arg(long)]
    pub tone: Option<String>,

    /// Emit the quality report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: NarrateArgs) -> Result<()> {
    let config = VoiceConfig {
        voice: args.voice,
        accent: args.accent.or_else(|| VoiceConfig::default().accent),
        tone: args.tone.or_else(|| VoiceConfig::default().tone),
    };

    // No real synthesis backend is wired in; the fallback reports
    // deterministic demo quality metrics.
    let report = synthesize_or_fallback(&FallbackVoice, &args.text, &config).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::header("Narration quality");
    output::kv(
        "Voice authenticity",
        &format!("{:.3}", report.voice_authenticity),
    );
    output::kv("Naturalness MOS", &format!("{:.2}", report.naturalness_mos));
    output::kv("Fallback used", &report.fallback_used.to_string());
    if report.success {
        output::success("Narration produced");
    }
    Ok(())
}

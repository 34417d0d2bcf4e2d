//! Trait and phrase vocabulary drawn on by the genetic operators

/// Characteristics that mutation may add to a profile
pub const EXTENDED_TRAITS: [&str; 10] = [
    "sardonic",
    "erudite",
    "provocative",
    "incisive",
    "polemical",
    "articulate",
    "fearless",
    "skeptical",
    "combative",
    "urbane",
];

/// Sardonic phrases that mutation may add to a profile's markers
pub const ADDITIONAL_PHRASES: [&str; 8] = [
    "How refreshingly naive",
    "What a spectacle",
    "Utterly predictable",
    "One can only marvel",
    "How very convenient",
    "A triumph of hope over evidence",
    "Spare me the pieties",
    "The mind reels",
];

/// High-performance traits injected by the advanced strategy
pub const ELITE_TRAITS: [&str; 5] = [
    "devastating",
    "masterful",
    "penetrating",
    "authoritative",
    "brilliant",
];

/// Advanced stylistic markers injected by the advanced strategy
pub const ADVANCED_MARKERS: [&str; 6] = [
    "As any serious reader of history knows",
    "The evidence, inconvenient as it may be",
    "One is reminded of Orwell's observation",
    "Let us dispense with the euphemisms",
    "The record speaks with merciless clarity",
    "I take no pleasure in stating the obvious",
];

/// Core traits the diversity boost re-injects when lost
pub const CORE_TRAITS: [&str; 4] = ["witty", "eloquent", "incisive", "combative"];

/// Minimum number of characteristics any profile may hold
pub const MIN_CHARACTERISTICS: usize = 3;

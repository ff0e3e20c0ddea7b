//! Peptide suggestions keyed by language-model provider.
//!
//! The providers are placeholders: every handler is a deterministic slicing rule
//! over the sequence, no request leaves the process. The credential, model and
//! endpoint are carried so a real integration can slot in behind [`Provider`].

mod handlers;

pub use handlers::WINDOW;

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::peptide::Hydrophobicity;
use crate::structure::Residue;

pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Groq,
    Mistral,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::Groq,
        Provider::Mistral,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Groq => "Groq",
            Provider::Mistral => "Mistral",
        }
    }

    pub fn suggest(self, request: &ProviderRequest<'_>) -> Vec<Suggestion> {
        match self {
            Provider::OpenAi => handlers::openai(request),
            Provider::Anthropic => handlers::anthropic(request),
            Provider::Groq => handlers::groq(request),
            Provider::Mistral => handlers::mistral(request),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("Provider {0} not supported.")]
pub struct UnsupportedProvider(pub String);

impl FromStr for Provider {
    type Err = UnsupportedProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnsupportedProvider(s.to_string()))
    }
}

/// Everything a provider would need to produce suggestions for one structure.
#[derive(Debug, Clone)]
pub struct ProviderRequest<'a> {
    pub sequence: &'a str,
    pub residues: &'a [Residue],
    pub provider: &'a str,
    pub api_key: &'a str,
    pub model_name: &'a str,
    pub endpoint: Option<&'a str>,
    pub num_peptides: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionProperties {
    pub length: usize,
    /// Placeholder value, not computed from the peptide
    pub net_charge: i32,
    pub hydrophobicity: Hydrophobicity,
    pub motif: Option<String>,
}

impl SuggestionProperties {
    /// Label/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Length", self.length.to_string()),
            ("Net charge", self.net_charge.to_string()),
            ("Hydrophobicity", self.hydrophobicity.to_string()),
            ("Motif", self.motif.clone().unwrap_or_else(|| "None".to_string())),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub sequence: String,
    pub properties: Option<SuggestionProperties>,
    pub explanation: String,
}

impl Suggestion {
    fn unsupported(err: &UnsupportedProvider) -> Self {
        Suggestion {
            sequence: String::new(),
            properties: None,
            explanation: err.to_string(),
        }
    }
}

/// Dispatch `request` to its provider. An unknown provider name yields a single
/// placeholder record rather than an error.
pub fn suggest_peptides(request: &ProviderRequest<'_>) -> Vec<Suggestion> {
    match request.provider.parse::<Provider>() {
        Ok(provider) => {
            debug!(
                "suggesting {} peptides via {} (model {}, endpoint {}, {} residues)",
                request.num_peptides,
                provider,
                request.model_name,
                request.endpoint.unwrap_or("default"),
                request.residues.len()
            );
            provider.suggest(request)
        }
        Err(err) => {
            debug!("{}", err);
            vec![Suggestion::unsupported(&err)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ: &str = "ACDEFGHIKLMNPQRSTVWY";

    fn request(provider: &'static str, sequence: &'static str, n: usize) -> ProviderRequest<'static> {
        ProviderRequest {
            sequence,
            residues: &[],
            provider,
            api_key: "sk-test",
            model_name: DEFAULT_MODEL,
            endpoint: None,
            num_peptides: n,
        }
    }

    fn sequences(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.sequence.as_str()).collect()
    }

    #[test]
    fn test_provider_names() {
        assert_eq!("OpenAI".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!(" Mistral ".parse::<Provider>().unwrap(), Provider::Mistral);
        assert!("Cohere".parse::<Provider>().is_err());
        for p in Provider::ALL {
            assert_eq!(p.name().parse::<Provider>().unwrap(), p);
        }
    }

    #[test]
    fn test_openai_windows() {
        let out = suggest_peptides(&request("OpenAI", SEQ, 3));
        assert_eq!(sequences(&out), vec!["ACDEFGHI", "CDEFGHIK", "DEFGHIKL"]);
        let props = out[0].properties.as_ref().unwrap();
        assert_eq!(props.length, 8);
        assert_eq!(props.net_charge, -1);
        assert_eq!(props.hydrophobicity, Hydrophobicity::Low);
        assert_eq!(out[1].properties.as_ref().unwrap().hydrophobicity, Hydrophobicity::Moderate);
        assert!(out[0].explanation.starts_with("[OpenAI]"));
    }

    #[test]
    fn test_openai_motif_and_fallback() {
        let out = suggest_peptides(&request("OpenAI", "GGEDDGGGG", 3));
        assert_eq!(out[0].sequence, "GGEDDGGG");
        assert_eq!(out[0].properties.as_ref().unwrap().motif.as_deref(), Some("EDD"));
        assert!(out[0].explanation.contains("Motif analysis: EDD."));
        // past the end, fall back to the last window
        assert_eq!(out[2].sequence, "GEDDGGGG");
    }

    #[test]
    fn test_anthropic_windows() {
        let out = suggest_peptides(&request("Anthropic", SEQ, 2));
        assert_eq!(sequences(&out), vec!["PQRSTVWY", "NPQRSTVW"]);
        assert_eq!(out[1].properties.as_ref().unwrap().net_charge, 1);

        let short = suggest_peptides(&request("Anthropic", "ACDEF", 1));
        assert_eq!(short[0].sequence, "ACDEF");
    }

    #[test]
    fn test_groq_windows() {
        let out = suggest_peptides(&request("Groq", SEQ, 2));
        assert_eq!(sequences(&out), vec!["YWVTSRQP", "WVTSRQPN"]);
        assert_eq!(out[0].properties.as_ref().unwrap().hydrophobicity, Hydrophobicity::High);
        assert_eq!(out[1].properties.as_ref().unwrap().net_charge, 0);
    }

    #[test]
    fn test_mistral_windows() {
        let out = suggest_peptides(&request("Mistral", SEQ, 2));
        assert_eq!(sequences(&out), vec!["IHGFEDCA", "KIHGFEDC"]);
        assert!(out.iter().all(|s| s.properties.as_ref().unwrap().net_charge == 2));
    }

    #[test]
    fn test_unsupported_provider() {
        let out = suggest_peptides(&request("Cohere", SEQ, 5));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sequence, "");
        assert!(out[0].properties.is_none());
        assert_eq!(out[0].explanation, "Provider Cohere not supported.");
    }

    #[test]
    fn test_zero_requested() {
        for p in Provider::ALL {
            assert!(suggest_peptides(&request(p.name(), SEQ, 0)).is_empty());
        }
    }
}

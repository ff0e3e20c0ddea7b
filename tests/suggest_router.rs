use peptide_tools::suggest::{suggest_peptides, Provider, ProviderRequest};

const SEQUENCE: &str = "ACDEFGHIKLMNPQRSTVWY";

fn request(provider: &str, num_peptides: usize) -> ProviderRequest<'_> {
    ProviderRequest {
        sequence: SEQUENCE,
        residues: &[],
        provider,
        api_key: "sk-test",
        model_name: "gpt-4",
        endpoint: None,
        num_peptides,
    }
}

#[test]
fn known_providers_return_requested_count() {
    for provider in Provider::ALL {
        let suggestions = suggest_peptides(&request(provider.name(), 3));
        assert_eq!(suggestions.len(), 3, "{}", provider);
        for suggestion in &suggestions {
            assert_eq!(suggestion.sequence.len(), 8);
            assert!(suggestion.properties.is_some());
            assert!(suggestion.explanation.starts_with(&format!("[{}]", provider.name())));
        }
    }
}

#[test]
fn provider_names_ignore_case() {
    let upper = suggest_peptides(&request("OPENAI", 2));
    let canonical = suggest_peptides(&request("OpenAI", 2));
    let sequences = |s: &[peptide_tools::suggest::Suggestion]| {
        s.iter().map(|x| x.sequence.clone()).collect::<Vec<_>>()
    };
    assert_eq!(sequences(&upper), sequences(&canonical));
    assert_eq!(sequences(&canonical), vec!["ACDEFGHI", "CDEFGHIK"]);
}

#[test]
fn unknown_provider_is_a_single_placeholder() {
    let suggestions = suggest_peptides(&request("Cohere", 5));

    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].properties.is_none());
    assert!(suggestions[0].explanation.contains("Cohere"));
    assert!(suggestions[0].explanation.contains("not supported"));
}

use rainfo_core::{capitalize, lookup_rainfall, resolve_code, resolve_name, StateAtlas, INVALID_STATE};
use std::collections::HashSet;

fn mixed_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[test]
fn every_name_resolves_in_any_case() {
    for state in StateAtlas::embedded().states() {
        for input in [
            state.name.clone(),
            state.name.to_uppercase(),
            capitalize(&state.name),
            mixed_case(&state.name),
        ] {
            assert_eq!(resolve_code(&input), state.code, "input {:?}", input);
            assert_eq!(resolve_name(&input), input);
        }
    }
}

#[test]
fn every_code_resolves_in_any_case() {
    for state in StateAtlas::embedded().states() {
        for input in [state.code.clone(), state.code.to_lowercase(), mixed_case(&state.code)] {
            assert_eq!(resolve_code(&input), state.code, "input {:?}", input);
            assert_eq!(resolve_name(&input), state.name, "input {:?}", input);
        }
    }
}

#[test]
fn name_then_code_round_trips() {
    for state in StateAtlas::embedded().states() {
        for input in [state.name.to_uppercase(), state.code.to_lowercase()] {
            assert_eq!(resolve_code(resolve_name(&input)), resolve_code(&input));
        }
    }
}

#[test]
fn resolved_codes_are_clean() {
    let atlas = StateAtlas::embedded();
    let codes: HashSet<&str> = atlas.states().iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes.len(), 50);

    let inputs = ["california", "ca", "", "Nowhereland", "c a", "CAL", "ñ", "ＣＡ"];
    for input in inputs {
        let code = resolve_code(input);
        if code != INVALID_STATE {
            assert_eq!(code.len(), 2);
            assert!(code.bytes().all(|b| b.is_ascii_uppercase()));
            assert!(codes.contains(code));
        }
    }
}

#[test]
fn rainfall_is_reachable_from_any_resolved_name() {
    for state in StateAtlas::embedded().states() {
        let name = resolve_name(&state.code);
        assert!(lookup_rainfall(name).is_some(), "{} has no rainfall", name);
    }
    assert_eq!(lookup_rainfall("hawaii"), Some(63.7));
    assert_eq!(lookup_rainfall("atlantis"), None);
}

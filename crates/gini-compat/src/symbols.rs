/// Canonical registry name of a routine.
///
/// Names keep their case and lose one leading `_` of cdecl decoration.
pub fn canonical_symbol(name: &str) -> String {
    let sanitized = sanitize_symbol(name);
    match sanitized.strip_prefix('_') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => sanitized,
    }
}

/// Names to try, in order, when resolving a routine in a loaded library.
///
/// The name as given comes first, so a routine really called `_name` wins
/// over a `name` exported next to it. Then the canonical name, then its
/// `_`-decorated form for targets that decorate cdecl symbols (32-bit
/// Windows, Mach-O).
pub fn lookup_candidates(name: &str) -> Vec<String> {
    let exact = sanitize_symbol(name);
    let canonical = canonical_symbol(name);
    if canonical.is_empty() {
        return Vec::new();
    }
    let decorated = format!("_{canonical}");

    let mut candidates = Vec::with_capacity(3);
    for candidate in [exact, canonical, decorated] {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

fn sanitize_symbol(name: &str) -> String {
    name.trim()
        .trim_end_matches('\0')
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_symbols() {
        assert_eq!(canonical_symbol(" asm_float_round\0"), "asm_float_round");
        assert_eq!(canonical_symbol("asm-float.round"), "asmfloatround");
    }

    #[test]
    fn strips_one_cdecl_underscore() {
        assert_eq!(canonical_symbol("_asm_float_round"), "asm_float_round");
        assert_eq!(canonical_symbol("__asm_float_round"), "_asm_float_round");
        assert_eq!(canonical_symbol("_"), "_");
    }

    #[test]
    fn plain_name_tries_canonical_then_decorated() {
        assert_eq!(
            lookup_candidates("asm_float_round"),
            vec!["asm_float_round".to_string(), "_asm_float_round".to_string()]
        );
    }

    #[test]
    fn underscored_name_is_tried_as_given_first() {
        assert_eq!(
            lookup_candidates("_asm_float_round"),
            vec!["_asm_float_round".to_string(), "asm_float_round".to_string()]
        );
    }

    #[test]
    fn blank_name_has_no_candidates() {
        assert!(lookup_candidates(" \0").is_empty());
    }
}

//! Argument-type resolution
//!
//! Expands a sparse per-position type specification into the dense ordered
//! list of kinds a job record carries.

use crate::arg_type::ArgType;

/// Resolves a dense argument-type list from sparse overrides and the
/// declared argument-count bounds.
///
/// The resolved arity is the largest of `min_args`, `max_args`, and the
/// highest override position plus one. Positions without an explicit
/// override default to [`ArgType::String`]. Overrides are never dropped,
/// including positions beyond `max_args`, and need not be contiguous or
/// sorted. The output is deterministic for the same inputs.
pub fn parse_arg_types_list(
    specified: &[(usize, ArgType)],
    min_args: usize,
    max_args: usize,
) -> Vec<ArgType> {
    let highest = specified
        .iter()
        .map(|(position, _)| position + 1)
        .max()
        .unwrap_or(0);
    let arity = min_args.max(max_args).max(highest);

    let mut types = vec![ArgType::String; arity];
    for (position, kind) in specified {
        types[*position] = *kind;
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_specification() {
        assert!(parse_arg_types_list(&[], 0, 0).is_empty());
    }

    #[test]
    fn test_min_args_alone_sets_arity() {
        let types = parse_arg_types_list(&[], 2, 0);
        assert_eq!(types, vec![ArgType::String, ArgType::String]);
    }

    #[test]
    fn test_max_args_alone_sets_arity() {
        let types = parse_arg_types_list(&[], 0, 3);
        assert_eq!(types.len(), 3);
        assert!(types.iter().all(|t| *t == ArgType::String));
    }

    #[test]
    fn test_overrides_with_gaps_default_to_string() {
        let types = parse_arg_types_list(&[(0, ArgType::Int), (2, ArgType::Bool)], 0, 0);
        assert_eq!(types, vec![ArgType::Int, ArgType::String, ArgType::Bool]);
    }

    #[test]
    fn test_unsorted_overrides() {
        let types = parse_arg_types_list(&[(1, ArgType::Float), (0, ArgType::Int)], 0, 2);
        assert_eq!(types, vec![ArgType::Int, ArgType::Float]);
    }

    #[test]
    fn test_override_beyond_max_args_is_kept() {
        let types = parse_arg_types_list(&[(4, ArgType::Int)], 1, 2);
        assert_eq!(types.len(), 5);
        assert_eq!(types[4], ArgType::Int);
        assert_eq!(types[3], ArgType::String);
    }
}

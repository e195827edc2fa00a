//! Name comparison shared by every vocabulary lookup

/// Compare two names ignoring case.
///
/// The rules engine does not normalise the case of entity-type, attribute or
/// relationship names across rulebase versions, so every vocabulary match
/// goes through here.
///
/// # Examples
///
/// ```
/// use caab_domain::names::eq_ignore_case;
///
/// assert!(eq_ignore_case("GLOBAL", "global"));
/// assert!(!eq_ignore_case("global", "globals"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_names() {
        assert!(eq_ignore_case("APPLICATION_CASE_REF", "application_case_ref"));
        assert!(eq_ignore_case("", ""));
        assert!(!eq_ignore_case("proceeding", "proceedings"));
    }

    #[test]
    fn test_non_ascii_names() {
        assert!(eq_ignore_case("ÉTAT", "état"));
        assert!(!eq_ignore_case("état", "etat"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any casing of a name matches the canonical casing
        #[test]
        fn test_casing_is_irrelevant(name in "[A-Za-z_]{0,32}") {
            prop_assert!(eq_ignore_case(&name, &name.to_uppercase()));
            prop_assert!(eq_ignore_case(&name.to_lowercase(), &name));
        }

        /// Property: comparison is symmetric
        #[test]
        fn test_symmetric(a in "[A-Za-z_]{0,8}", b in "[A-Za-z_]{0,8}") {
            prop_assert_eq!(eq_ignore_case(&a, &b), eq_ignore_case(&b, &a));
        }
    }
}

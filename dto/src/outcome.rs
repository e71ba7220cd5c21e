/// Follow-up the page issues after a mutation round-trips. The list is only
/// ever replaced from a fresh GET, so a successful mutation is confirmed by
/// exactly one re-fetch with the active search term; a failed one leaves the
/// list untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refetch {
    With(String),
    Skip,
}

impl Refetch {
    pub fn after<T, E>(outcome: &Result<T, E>, active_term: &str) -> Self {
        match outcome {
            Ok(_) => Refetch::With(active_term.to_string()),
            Err(_) => Refetch::Skip,
        }
    }
}

/// True when a non-blank search came back empty. The grid already shows its
/// empty state; this warrants an extra heads-up toast.
pub fn fruitless_search(term: &str, count: usize) -> bool {
    count == 0 && !term.trim().is_empty()
}

#[cfg(test)]
mod test {
    use crate::outcome::*;

    #[test]
    fn successful_mutation_refetches_with_active_term() {
        let outcome: Result<(), String> = Ok(());
        assert_eq!(
            Refetch::after(&outcome, "pizza"),
            Refetch::With("pizza".to_string())
        );
    }

    #[test]
    fn failed_mutation_leaves_the_list_alone() {
        let outcome: Result<(), String> = Err("upstream unreachable".to_string());
        assert_eq!(Refetch::after(&outcome, "pizza"), Refetch::Skip);
    }

    #[test]
    fn blank_term_refetches_the_full_list() {
        let outcome: Result<u32, String> = Ok(7);
        assert_eq!(Refetch::after(&outcome, ""), Refetch::With(String::new()));
    }

    #[test]
    fn fruitless_search_needs_a_real_term_and_no_results() {
        assert!(fruitless_search("pizza", 0));
        assert!(!fruitless_search("pizza", 3));
        assert!(!fruitless_search("", 0));
        assert!(!fruitless_search("   ", 0));
    }
}

/// Orders overlapping list fetches. Each request takes a ticket from
/// [`RequestSeq::begin`]; when its response lands, [`RequestSeq::try_commit`]
/// accepts it only if no newer response has been applied yet. Rapid repeated
/// searches therefore settle on the last request issued, not the last
/// response to arrive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
    applied: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags a new outgoing request.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Returns true if the response tagged `ticket` may be applied; stale
    /// responses are discarded.
    pub fn try_commit(&mut self, ticket: u64) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }

    /// Returns true if the failure tagged `ticket` should be surfaced. Only
    /// the latest request may settle; a failure of a superseded request is
    /// ignored so the fetch that replaced it keeps the loading state.
    pub fn try_settle(&mut self, ticket: u64) -> bool {
        if ticket == self.issued && ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use crate::seq::*;

    #[test]
    fn in_order_responses_commit() {
        let mut seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(seq.try_commit(first));
        assert!(seq.try_commit(second));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();

        // The second search returns first; the slow first response must not
        // overwrite it.
        assert!(seq.try_commit(second));
        assert!(!seq.try_commit(first));
    }

    #[test]
    fn latest_failure_settles() {
        let mut seq = RequestSeq::new();
        let ticket = seq.begin();
        assert!(seq.try_settle(ticket));
    }

    #[test]
    fn superseded_failure_is_ignored() {
        let mut seq = RequestSeq::new();
        let first = seq.begin();
        let _second = seq.begin();
        assert!(!seq.try_settle(first));
    }

    #[test]
    fn settling_discards_the_stale_success_behind_it() {
        let mut seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();

        // The newer search fails and is reported; the slow older response
        // must not resurrect afterwards.
        assert!(seq.try_settle(second));
        assert!(!seq.try_commit(first));
    }

    #[test]
    fn duplicate_commit_is_rejected() {
        let mut seq = RequestSeq::new();
        let ticket = seq.begin();
        assert!(seq.try_commit(ticket));
        assert!(!seq.try_commit(ticket));
    }
}

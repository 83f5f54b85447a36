//! [`Query`] for checking whether a [`Draft`] may be published.

use std::convert::Infallible;

use tracing as log;

use crate::{
    domain::listing::{Draft, PublishGate},
    Service,
};

use super::Query;

/// [`Query`] evaluating the [`PublishGate`] of a [`Draft`].
#[derive(Clone, Copy, Debug)]
pub struct CheckPublishGate<'d> {
    /// [`Draft`] to evaluate.
    pub draft: &'d Draft,
}

impl Query<CheckPublishGate<'_>> for Service {
    type Ok = PublishGate;
    type Err = Infallible;

    fn execute(
        &self,
        CheckPublishGate { draft }: CheckPublishGate<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        let gate = draft.publish_gate();
        if !gate.can_publish() {
            log::debug!("`PublishGate` is closed by: {}", gate.to_failures());
        }
        Ok(gate)
    }
}

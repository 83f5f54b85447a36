//! [`Query`] for validating a [`Draft`] before saving it.

use std::convert::Infallible;

use tracing as log;

use crate::{
    domain::listing::{Draft, Errors},
    Service,
};

use super::Query;

/// [`Query`] computing blocking validation [`Errors`] of a [`Draft`].
#[derive(Clone, Copy, Debug)]
pub struct ValidateListing<'d> {
    /// [`Draft`] to validate.
    pub draft: &'d Draft,
}

impl Query<ValidateListing<'_>> for Service {
    type Ok = Errors;
    type Err = Infallible;

    fn execute(
        &self,
        ValidateListing { draft }: ValidateListing<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        let errors = draft.validate();
        if !errors.is_empty() {
            log::debug!("`Draft` has {} invalid fields: {errors}", errors.len());
        }
        Ok(errors)
    }
}

//! The shared overload resolver.
//!
//! Both template kinds funnel their candidate sets through
//! [`select_overload`]:
//!
//! 1. Candidates whose arity differs from the call are dropped before any
//!    rating happens.
//! 2. Each surviving candidate is rated one formal/actual pair at a time
//!    through the compatibility oracle; an incompatible pair drops the
//!    candidate entirely.
//! 3. Survivors sort ascending by [`Rating`]; a tie on the best score is
//!    an ambiguity error listing every tied candidate, never an arbitrary
//!    pick.

use pyrite_core::{OpKey, Signature, Type, TypingError};
use tracing::trace;

use crate::context::TypingContext;
use crate::rating::Rating;

/// Rate one candidate against the actual argument types.
///
/// `None` when the arity differs or any pair is incompatible.
fn rate_case(ctx: &TypingContext<'_>, case: &Signature, args: &[Type]) -> Option<Rating> {
    if case.arity() != args.len() {
        return None;
    }
    let mut rating = Rating::default();
    for (actual, formal) in args.iter().zip(&case.args) {
        rating.count(ctx.type_compatibility(actual, formal)?);
    }
    Some(rating)
}

/// Pick the single best candidate, or report that none survived.
pub(crate) fn select_overload(
    ctx: &TypingContext<'_>,
    key: OpKey,
    cases: &[Signature],
    args: &[Type],
) -> Result<Option<Signature>, TypingError> {
    let mut rated: Vec<(Rating, &Signature)> = cases
        .iter()
        .filter_map(|case| rate_case(ctx, case, args).map(|rating| (rating, case)))
        .collect();

    // Stable sort keeps registration order among distinct ratings
    // irrelevant and tie detection deterministic.
    rated.sort_by_key(|(rating, _)| *rating);
    trace!(%key, candidates = cases.len(), viable = rated.len(), "rated overload candidates");

    let Some(&(best, winner)) = rated.first() else {
        return Ok(None);
    };

    if rated.len() > 1 && rated[1].0 == best {
        let candidates = rated
            .iter()
            .take_while(|(rating, _)| *rating == best)
            .map(|(_, case)| case.to_string())
            .collect();
        return Err(TypingError::AmbiguousOverload {
            key,
            args: args.to_vec(),
            candidates,
        });
    }

    trace!(%key, winner = %winner, "selected overload");
    Ok(Some(winner.clone()))
}

//! Business rule evaluation
//!
//! A business rule is a precondition check that already ran and produced an
//! [`OpResult`]. [`run`] inspects them in order and surfaces the first
//! failure, so operations can bail out with that rule's message before
//! touching the repository.

use super::result::OpResult;

/// Returns the first failed check, or `None` when every rule passed
pub fn run(checks: impl IntoIterator<Item = OpResult>) -> Option<OpResult> {
    checks.into_iter().find(|check| !check.is_success())
}

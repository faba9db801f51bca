//! Sign-in use case implementation.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::SessionPort;

/// Marks the session as signed in.
///
/// Credentials are not collected or checked: submitting the form always
/// signs the user in.
#[derive(Clone)]
pub struct SignInUseCase {
    session: Arc<dyn SessionPort>,
}

impl SignInUseCase {
    /// Creates new sign-in use case.
    #[must_use]
    pub const fn new(session: Arc<dyn SessionPort>) -> Self {
        Self { session }
    }

    /// Executes sign-in. Always succeeds.
    pub fn execute(&self) {
        let already = self.session.is_logged_in();
        self.session.set_logged_in(true);
        info!(already_signed_in = already, "Sign-in submitted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSessionPort;
    use mockall::predicate::eq;

    #[test]
    fn test_execute_sets_flag_without_checks() {
        let mut session = MockSessionPort::new();
        session.expect_is_logged_in().return_const(false);
        session
            .expect_set_logged_in()
            .with(eq(true))
            .times(1)
            .return_const(());

        SignInUseCase::new(Arc::new(session)).execute();
    }

    #[test]
    fn test_execute_when_already_signed_in() {
        let mut session = MockSessionPort::new();
        session.expect_is_logged_in().return_const(true);
        session
            .expect_set_logged_in()
            .with(eq(true))
            .times(1)
            .return_const(());

        SignInUseCase::new(Arc::new(session)).execute();
    }
}

//! Sign-out use case implementation.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::SessionPort;

/// Clears the signed-in flag. No confirmation and nothing else to clean up.
#[derive(Clone)]
pub struct SignOutUseCase {
    session: Arc<dyn SessionPort>,
}

impl SignOutUseCase {
    /// Creates new sign-out use case.
    #[must_use]
    pub const fn new(session: Arc<dyn SessionPort>) -> Self {
        Self { session }
    }

    /// Executes sign-out. Always succeeds.
    pub fn execute(&self) {
        let was_signed_in = self.session.is_logged_in();
        self.session.set_logged_in(false);
        info!(was_signed_in, "Signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSessionPort;
    use mockall::predicate::eq;

    #[test]
    fn test_execute_clears_flag() {
        let mut session = MockSessionPort::new();
        session.expect_is_logged_in().return_const(true);
        session
            .expect_set_logged_in()
            .with(eq(false))
            .times(1)
            .return_const(());

        SignOutUseCase::new(Arc::new(session)).execute();
    }

    #[test]
    fn test_execute_when_signed_out_is_harmless() {
        let mut session = MockSessionPort::new();
        session.expect_is_logged_in().return_const(false);
        session
            .expect_set_logged_in()
            .with(eq(false))
            .times(1)
            .return_const(());

        SignOutUseCase::new(Arc::new(session)).execute();
    }
}

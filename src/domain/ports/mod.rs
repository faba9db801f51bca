mod session_port;

pub use session_port::SessionPort;

#[cfg(test)]
pub mod mocks {
    pub use super::session_port::MockSessionPort;
}

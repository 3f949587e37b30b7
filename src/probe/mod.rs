pub mod classify;
pub mod engine;
pub mod headers;
pub mod transport;

pub use engine::ProbeEngine;
pub use headers::{FixedUserAgent, RandomUserAgent, UserAgentSource};
pub use transport::{ReqwestTransport, Transport, TransportResponse};

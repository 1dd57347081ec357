//! HTTP server startup and lifecycle.
//!
//! Plain HTTP only: TLS termination belongs to the platform load balancer in
//! the deployments this service demonstrates. The server handle created at
//! startup is captured by the signal task, so the listener really is closed
//! on the termination signal.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};

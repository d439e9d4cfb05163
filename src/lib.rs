//! embot - emotional chatbot control CLI
//!
//! A thin dispatcher in front of three collaborators this crate does not
//! implement: the backend server, the database manager, and the RAG
//! knowledge-base tooling. Each invocation runs exactly one blocking
//! subprocess or one blocking HTTP request and reports the outcome via
//! the process exit status.

pub mod cli;
pub mod config;
pub mod launcher;
pub mod remote;

pub use config::Config;
pub use remote::RagClient;

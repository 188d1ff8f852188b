//! Driven adapters implementing the domain ports.

pub mod http;
pub mod token_file;

pub use self::http::ReqwestTransport;
pub use self::token_file::FileTokenStore;

mod extract;
mod handlers;
mod server;

pub use extract::ValidatedJson;
pub use server::{HttpServer, HttpServerConfig, CLAIMS_BASE_PATH, GENERATE_ACCEPTED_MESSAGE};

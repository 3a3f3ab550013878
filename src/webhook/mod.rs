mod filter;
mod server;

pub use filter::{INVALID_WEBHOOK_DATA, filter, filter_at};
pub use server::{router, serve};

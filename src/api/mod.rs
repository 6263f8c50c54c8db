/// Open Collective GraphQL API: client, transport, and the two queries.
pub mod backers;
pub mod client;
pub mod errors;
pub mod queries;
pub mod tiers;
pub mod transport;

pub use backers::fetch_active_backers;
pub use client::{Client, DEFAULT_ENDPOINT};
pub use errors::ApiError;
pub use tiers::fetch_tiers;
pub use transport::Transport;

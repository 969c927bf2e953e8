pub mod store;

pub use store::{LeaderboardStore, StoreResult};

//! Results: completed-game records, their persistence, and the informer
//! flag shown after a game ends.

pub mod record;
pub mod store;

pub use record::{NewResult, ResultRecord};
pub use store::{ResultsError, ResultsStore};

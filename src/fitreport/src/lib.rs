#[macro_use]
extern crate log;

mod users;
pub use users::UsersFile;

mod batch;
pub use batch::{Analysis, BatchRunner, BatchSummary};

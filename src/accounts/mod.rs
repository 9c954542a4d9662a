pub mod email;
pub mod model;
pub mod password;
pub mod repo;

pub use model::{Account, NewAccount, Role};
pub use repo::{create_account, create_privileged_account};

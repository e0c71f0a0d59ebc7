pub(crate) mod login;
mod logout;
pub(crate) mod output;
mod profile;
mod status;

pub use login::Login;
pub use logout::Logout;
pub use output::{N8rOutput, StatusReport};
pub use profile::Profile;
pub use status::Status;

pub mod delete_account;
pub mod login;
pub mod profile;
pub mod signup;
pub mod update_account;

pub use delete_account::delete_account;
pub use login::{LoginRequest, LoginResponse, login};
pub use profile::profile;
pub use signup::{SignupRequest, signup};
pub use update_account::{UpdateAccountRequest, update_account};

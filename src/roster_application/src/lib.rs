pub mod use_cases;

pub use use_cases::{
    delete_account::{DeleteAccountError, DeleteAccountUseCase},
    login::{LoginError, LoginUseCase},
    signup::{SignupError, SignupUseCase},
    update_account::{AccountUpdate, UpdateAccountError, UpdateAccountUseCase},
};

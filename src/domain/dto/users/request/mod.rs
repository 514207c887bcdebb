pub mod register_request;
pub mod login_request;

pub use register_request::RegisterUserRequest;
pub use login_request::LoginRequest;

pub mod user_store;
pub mod user_repo;

pub use user_repo::UserRepository;
pub use user_store::UserStore;

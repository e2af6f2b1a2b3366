pub mod errors;
pub mod firebase;
pub mod memory;

pub use firebase::FirebaseIdentity;
pub use memory::InMemoryIdentity;

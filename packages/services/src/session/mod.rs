pub mod flash;
pub mod memory;
pub mod store;

pub use flash::{add_flash, take_flash, FLASH_KEY};
pub use memory::MemorySession;
pub use store::{SessionError, SessionStore};

#[cfg(test)]
pub use store::MockSessionStore;

//! Post repository implementations.

mod memory;
mod seed;

pub use memory::InMemoryPostRepository;
pub use seed::sample_posts;

//! Storage adapters for interrogation state.

mod in_memory_state_repository;

pub use in_memory_state_repository::InMemoryInterrogationStateRepository;

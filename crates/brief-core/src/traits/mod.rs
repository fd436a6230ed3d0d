pub mod chat_model;
pub mod embedder;
pub mod memory_store;

pub use chat_model::IChatModel;
pub use embedder::IEmbedder;
pub use memory_store::IMemoryStore;

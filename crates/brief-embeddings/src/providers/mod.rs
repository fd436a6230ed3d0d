pub mod api;
pub mod lexical;

pub use api::ApiEmbedder;
pub use lexical::LexicalEmbedder;

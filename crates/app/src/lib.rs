//! Dashboard wiring: the editor session over a document store.

pub mod session;

pub use session::EditorSession;

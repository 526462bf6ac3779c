// Reusable library API: visible to both CLI and WASM builds
pub mod errors;
pub mod grid;
mod grid_parser;
pub mod log;
pub mod matcher;
pub mod placement;
pub mod requests;
pub mod scanner;
pub mod word_list;

// File-backed lists and the HTTP surface need a real filesystem and sockets.
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(not(target_arch = "wasm32"))]
pub mod service;
#[cfg(not(target_arch = "wasm32"))]
pub mod store;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

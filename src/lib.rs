pub mod backdrop;
pub mod content;
pub mod flipbook;
pub mod poem;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
pub use frontend::run;

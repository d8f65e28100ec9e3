//! Greylab WASM - WebAssembly bindings for Greylab
//!
//! This crate exposes the greylab-core transformation engine to
//! JavaScript/TypeScript front ends.
//!
//! # Module Structure
//!
//! - `engine` - The `JsEngine` editing session (load, invoke, query)
//! - `types` - WASM-compatible wrapper types for grid data
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEngine } from '@greylab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const engine = new JsEngine(height, width, grayBytes);
//! engine.invoke('Rotate');
//! const grid = engine.current();
//! console.log(`Now ${grid.cols}x${grid.rows}`);
//! ```

use wasm_bindgen::prelude::*;

mod engine;
mod types;

// Re-export public types
pub use engine::JsEngine;
pub use types::JsGrid;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

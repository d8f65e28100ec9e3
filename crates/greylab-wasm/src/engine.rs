//! WASM bindings for the transformation engine.
//!
//! `JsEngine` is the command interface a web front end drives: load an
//! image, list the operation names for its buttons, invoke them by name,
//! and read back the current grid for display.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const engine = new JsEngine(rows, cols, samples);
//! for (const name of JsEngine.operation_names()) {
//!   addButton(name, () => {
//!     try {
//!       engine.invoke(name);
//!     } catch (e) {
//!       showStatus(e);
//!     }
//!     draw(engine.current());
//!   });
//! }
//! ```

use crate::types::JsGrid;
use greylab_core::{EditError, Engine, Grid};
use wasm_bindgen::prelude::*;

fn to_js_error(err: EditError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A grayscale editing session for JavaScript.
#[wasm_bindgen]
pub struct JsEngine {
    inner: Engine,
}

#[wasm_bindgen]
impl JsEngine {
    /// Start a session from row-major samples.
    ///
    /// # Errors
    ///
    /// Throws if either dimension is zero or `samples.length != rows * cols`.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize, samples: Vec<u8>) -> Result<JsEngine, JsValue> {
        Self::build(rows, cols, samples).map_err(to_js_error)
    }

    /// Start a session from a nested `number[][]` array.
    ///
    /// # Errors
    ///
    /// Throws for ragged rows, empty input, or samples outside 0-255.
    pub fn from_rows(value: JsValue) -> Result<JsEngine, JsValue> {
        let rows: Vec<Vec<i32>> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid rows: {}", e)))?;
        let inner = Engine::from_rows(rows).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Replace the image and clear the history.
    ///
    /// On failure the current session is left untouched.
    pub fn load(&mut self, rows: usize, cols: usize, samples: Vec<u8>) -> Result<(), JsValue> {
        let grid = Grid::new(rows, cols, samples).map_err(to_js_error)?;
        self.inner.load(grid).map_err(to_js_error)
    }

    /// Names of every operation in catalog order.
    pub fn operation_names() -> js_sys::Array {
        Engine::operation_names()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// Invoke an operation by name.
    ///
    /// # Errors
    ///
    /// Throws for an unknown name, Undo with no history, or Scale 50% on a
    /// grid that cannot get any smaller. The image is unchanged in each case.
    pub fn invoke(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.invoke(name).map_err(to_js_error)
    }

    /// The working grid.
    pub fn current(&self) -> JsGrid {
        JsGrid::from_grid(self.inner.current())
    }

    /// The grid as it was loaded.
    pub fn original(&self) -> JsGrid {
        JsGrid::from_grid(self.inner.original())
    }

    /// Number of snapshots available to undo
    #[wasm_bindgen(getter)]
    pub fn history_len(&self) -> usize {
        self.inner.history_len()
    }

    /// Whether Undo currently has anything to restore
    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    /// Text preview of the working grid (` .` for zero, ` O` otherwise).
    pub fn render_ascii(&self) -> String {
        self.inner.current().render_ascii()
    }

    /// Serialize the working grid as `{ rows, cols, samples }`.
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.current())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsEngine {
    fn build(rows: usize, cols: usize, samples: Vec<u8>) -> Result<Self, EditError> {
        let inner = Engine::new(Grid::new(rows, cols, samples)?)?;
        Ok(Self { inner })
    }
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_operation_names() {
        let names = JsEngine::operation_names();
        assert_eq!(names.length(), 11);
        assert_eq!(names.get(6).as_string().unwrap(), "Scale 50%");
    }

    #[wasm_bindgen_test]
    fn test_unknown_operation_throws() {
        let mut engine = JsEngine::new(1, 2, vec![10, 20]).unwrap();
        assert!(engine.invoke("Sharpen").is_err());
        assert_eq!(engine.current().pixels(), vec![10, 20]);
    }

    #[wasm_bindgen_test]
    fn test_size_limit_throws() {
        let mut engine = JsEngine::new(1, 4, vec![1, 2, 3, 4]).unwrap();
        assert!(engine.invoke("Scale 50%").is_err());
        assert_eq!(engine.history_len(), 0);
    }

    #[wasm_bindgen_test]
    fn test_from_rows() {
        let rows = serde_wasm_bindgen::to_value(&vec![vec![1, 2], vec![3, 4]]).unwrap();
        let engine = JsEngine::from_rows(rows).unwrap();
        assert_eq!(engine.current().pixels(), vec![1, 2, 3, 4]);

        let ragged = serde_wasm_bindgen::to_value(&vec![vec![1, 2], vec![3]]).unwrap();
        assert!(JsEngine::from_rows(ragged).is_err());
    }

    #[wasm_bindgen_test]
    fn test_failed_load_keeps_session() {
        let mut engine = JsEngine::new(1, 2, vec![10, 20]).unwrap();
        engine.invoke("Brighten").unwrap();
        assert!(engine.load(2, 2, vec![0; 5]).is_err());
        assert_eq!(engine.current().pixels(), vec![20, 30]);
        assert_eq!(engine.history_len(), 1);
    }
}

//! WASM bindings for heightmap-mesher.
//!
//! This module provides JavaScript-friendly APIs for use in the browser.

use wasm_bindgen::prelude::*;

use crate::mesher::{Mesher, MesherConfig};

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();
}

/// Mesher configuration options.
#[wasm_bindgen]
#[derive(Default)]
pub struct MesherOptions {
    config: MesherConfig,
}

#[wasm_bindgen]
impl MesherOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MesherOptions {
        MesherOptions::default()
    }

    #[wasm_bindgen(setter)]
    pub fn set_width(&mut self, value: u32) {
        self.config.width = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_height(&mut self, value: u32) {
        self.config.height = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_z_scale(&mut self, value: f32) {
        self.config.z_scale = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_invert(&mut self, value: bool) {
        self.config.invert = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_blur(&mut self, value: u32) {
        self.config.blur = value;
    }
}

/// Mesh an encoded image (PNG/JPEG bytes) into a GLB asset.
#[wasm_bindgen]
pub fn mesh_image_bytes(data: &[u8], options: &MesherOptions) -> Result<Vec<u8>, JsError> {
    let source = crate::load_image_from_bytes(data).map_err(|e| JsError::new(&e.to_string()))?;

    let mesher = Mesher::with_config(options.config.clone());
    let output = mesher.mesh(&source).map_err(|e| JsError::new(&e.to_string()))?;

    crate::export_glb(&output).map_err(|e| JsError::new(&e.to_string()))
}

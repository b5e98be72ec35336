//! Generator Config Loader
//!
//! Reads optional overrides from the inline JSON block in `index.html`:
//!
//! ```html
//! <script type="application/json" id="tracker-config">{"itemsPerProperty": 10}</script>
//! ```

use renovation_core::GeneratorConfig;

const CONFIG_ELEMENT_ID: &str = "tracker-config";

/// Load the generator config, falling back to defaults when the block is
/// missing, empty or invalid.
pub fn load_generator_config() -> GeneratorConfig {
    let Some(raw) = read_config_block() else {
        log::debug!("no #{} block, using default generator config", CONFIG_ELEMENT_ID);
        return GeneratorConfig::default();
    };

    match GeneratorConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("loaded generator config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("{}; using default generator config", e);
            GeneratorConfig::default()
        }
    }
}

fn read_config_block() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

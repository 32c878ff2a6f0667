use crate::blend_mode::*;

use flo_surface::BlendMode;

use std::collections::HashMap;

///
/// Settings for a `TextCanvasRenderer`
///
/// Missing fields take their default values, so an empty document describes a surface that supports every
/// composite operation.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRendererConfig {
    /// False if the surface only supports the Porter-Duff operators and `Lighter`
    pub extended_blend_modes: bool,

    /// Composite operations to use in place of the defaults for particular blend modes
    pub blend_overrides: HashMap<GameBlendMode, BlendMode>,
}

impl Default for TextRendererConfig {
    fn default() -> Self {
        TextRendererConfig {
            extended_blend_modes:   true,
            blend_overrides:        HashMap::new(),
        }
    }
}

impl TextRendererConfig {
    ///
    /// Builds the blend mode table described by this configuration
    ///
    pub fn blend_mode_table(&self) -> BlendModeTable {
        let mut table = if self.extended_blend_modes {
            BlendModeTable::new()
        } else {
            BlendModeTable::basic()
        };

        for (mode, operation) in self.blend_overrides.iter() {
            table.set(*mode, *operation);
        }

        table
    }
}

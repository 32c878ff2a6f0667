use flo_surface::BlendMode;

///
/// The blend modes that can be assigned to a game object
///
/// These describe the effect the game object should have; a `BlendModeTable` decides which composite
/// operation produces that effect on a particular surface.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GameBlendMode {
    Normal,
    Add,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl Default for GameBlendMode {
    fn default() -> Self {
        GameBlendMode::Normal
    }
}

impl GameBlendMode {
    /// Every game blend mode
    pub const ALL: [GameBlendMode; 17] = [
        GameBlendMode::Normal,
        GameBlendMode::Add,
        GameBlendMode::Multiply,
        GameBlendMode::Screen,
        GameBlendMode::Overlay,
        GameBlendMode::Darken,
        GameBlendMode::Lighten,
        GameBlendMode::ColorDodge,
        GameBlendMode::ColorBurn,
        GameBlendMode::HardLight,
        GameBlendMode::SoftLight,
        GameBlendMode::Difference,
        GameBlendMode::Exclusion,
        GameBlendMode::Hue,
        GameBlendMode::Saturation,
        GameBlendMode::Color,
        GameBlendMode::Luminosity,
    ];

    ///
    /// The composite operation that produces this effect on a surface that supports every blend mode
    ///
    pub fn composite_operation(&self) -> BlendMode {
        use self::GameBlendMode::*;

        match self {
            Normal      => BlendMode::SourceOver,
            Add         => BlendMode::Lighter,
            Multiply    => BlendMode::Multiply,
            Screen      => BlendMode::Screen,
            Overlay     => BlendMode::Overlay,
            Darken      => BlendMode::Darken,
            Lighten     => BlendMode::Lighten,
            ColorDodge  => BlendMode::ColorDodge,
            ColorBurn   => BlendMode::ColorBurn,
            HardLight   => BlendMode::HardLight,
            SoftLight   => BlendMode::SoftLight,
            Difference  => BlendMode::Difference,
            Exclusion   => BlendMode::Exclusion,
            Hue         => BlendMode::Hue,
            Saturation  => BlendMode::Saturation,
            Color       => BlendMode::Color,
            Luminosity  => BlendMode::Luminosity,
        }
    }
}

///
/// Maps the blend mode of a game object to the composite operation used to draw it
///
/// Every `GameBlendMode` has an entry, so looking up a mode can't fail.
///
#[derive(Clone, PartialEq, Debug)]
pub struct BlendModeTable {
    /// Composite operations, indexed by `GameBlendMode as usize`
    composite_operations: [BlendMode; 17],
}

impl BlendModeTable {
    ///
    /// Creates the table for a surface that supports all of the composite operations
    ///
    pub fn new() -> BlendModeTable {
        BlendModeTable {
            composite_operations: GameBlendMode::ALL.map(|mode| mode.composite_operation())
        }
    }

    ///
    /// Creates the table for a surface that only supports the Porter-Duff operators and additive blending
    ///
    /// Modes that need one of the extended operations are drawn with `SourceOver` instead.
    ///
    pub fn basic() -> BlendModeTable {
        let composite_operations = GameBlendMode::ALL.map(|mode| {
            let operation = mode.composite_operation();

            if operation.is_extended() {
                BlendMode::SourceOver
            } else {
                operation
            }
        });

        BlendModeTable { composite_operations }
    }

    ///
    /// Changes the composite operation used for a game blend mode
    ///
    pub fn set(&mut self, mode: GameBlendMode, operation: BlendMode) {
        self.composite_operations[mode as usize] = operation;
    }

    ///
    /// The composite operation to use for a game blend mode
    ///
    #[inline]
    pub fn composite_operation(&self, mode: GameBlendMode) -> BlendMode {
        self.composite_operations[mode as usize]
    }
}

impl Default for BlendModeTable {
    fn default() -> Self {
        BlendModeTable::new()
    }
}

///
/// The parts of a camera that affect how a game object is drawn
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera {
    /// Identifies the camera for filtering: a single bit, matched against `TextObject::camera_filter`
    pub id: u32,

    /// How far the camera has scrolled horizontally
    pub scroll_x: f32,

    /// How far the camera has scrolled vertically
    pub scroll_y: f32,

    /// Alpha applied to everything this camera draws
    pub alpha: f32,

    /// Set to truncate the position of game objects to whole pixels
    pub round_pixels: bool,
}

impl Camera {
    ///
    /// Creates an opaque camera at the origin
    ///
    pub fn new() -> Camera {
        Camera {
            id:             1,
            scroll_x:       0.0,
            scroll_y:       0.0,
            alpha:          1.0,
            round_pixels:   false,
        }
    }

    ///
    /// Returns this camera with a different ID
    ///
    pub fn with_id(mut self, id: u32) -> Camera {
        self.id = id;
        self
    }

    ///
    /// Scrolls the camera to a new position
    ///
    pub fn set_scroll(&mut self, scroll_x: f32, scroll_y: f32) -> &mut Camera {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    ///
    /// Sets the alpha applied to everything drawn through this camera
    ///
    pub fn set_alpha(&mut self, alpha: f32) -> &mut Camera {
        self.alpha = alpha;
        self
    }

    ///
    /// Sets whether positions are truncated to whole pixels
    ///
    pub fn set_round_pixels(&mut self, round_pixels: bool) -> &mut Camera {
        self.round_pixels = round_pixels;
        self
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new()
    }
}

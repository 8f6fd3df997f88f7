/// Icon generation constants: default sizes, palette and geometry floors

pub mod sizes {
    /// Icon sizes the browser extension manifest references
    pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

    /// Icons at or below this size use the simplified composition
    /// (border + dot only, no brackets or crosshair)
    pub const SIMPLIFIED_MAX: u32 = 16;

    /// Largest size accepted by the generator
    pub const MAX_ICON_SIZE: u32 = 1024;
}

pub mod palette {
    /// Border and crosshair color (#4285F4)
    pub const PRIMARY: [u8; 4] = [66, 133, 244, 255];

    /// Corner brackets and center dot (#34A853)
    pub const SECONDARY: [u8; 4] = [52, 168, 83, 255];

    /// Fully transparent background
    pub const BACKGROUND: [u8; 4] = [0, 0, 0, 0];
}

pub mod floors {
    /// Minimum inset of the border from the image edge
    pub const MIN_PADDING: u32 = 2;

    /// Minimum stroke width, keeps strokes visible at small sizes
    pub const MIN_LINE_WIDTH: u32 = 2;

    /// Minimum border corner radius
    pub const MIN_RADIUS: u32 = 2;

    /// Minimum gap between the crosshair arms and the center
    pub const MIN_CROSSHAIR_GAP: u32 = 3;

    /// Minimum center dot radius
    pub const MIN_DOT_RADIUS: u32 = 2;
}

pub mod output {
    /// Default output directory, relative to the working directory
    pub const DEFAULT_DIR: &str = "icons";

    /// File name template; `{size}` is replaced by the icon size
    pub const DEFAULT_FILE_NAME: &str = "icon{size}.png";

    /// Placeholder substituted in the file name template
    pub const SIZE_PLACEHOLDER: &str = "{size}";
}

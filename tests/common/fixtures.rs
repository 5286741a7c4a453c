//! Test fixtures and constants.

/// Icon path handed to the engine for hint and error records
pub const ICON_PATH: &str = "images/app.png";

/// Equivalent spellings of pure red in every notation
pub mod red {
    pub const HEX_SHORT: &str = "#F00";
    pub const HEX: &str = "#ff0000";
    pub const RGB: &str = "255, 0, 0";
    pub const RGB_FUNC: &str = "rgb(255,0,0)";
    pub const VEC3: &str = "1.0, 0.0, 0.0";
    pub const HSL: &str = "0.0, 100.0%, 50.0%";
    pub const HSL_FUNC: &str = "hsl(0, 100%, 50%)";

    /// Expected (title, subtitle) pairs for a red token
    pub const RECORDS: [(&str, &str); 4] = [
        (HEX, "hex"),
        (RGB, "rgb"),
        (VEC3, "vec3"),
        (HSL, "hsl"),
    ];
}

/// The example query copied by the hint record
pub const MULTI_QUERY: &str = "99,197,34;(39,0,152)";

//! Report and data version constants.

pub use textfacts_bidi::MAX_DEPTH;

/// Version of the resolution report (`v` field).
pub const REPORT_V: u8 = 1;

/// Unicode version of the bundled property tables, e.g. `"15.1.0"`.
pub fn unicode_version() -> String {
    let (major, minor, micro) = textfacts_props::UNICODE_VERSION;
    format!("{major}.{minor}.{micro}")
}

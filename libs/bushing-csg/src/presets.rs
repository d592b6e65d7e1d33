//! Named bushing configurations.
//!
//! Each preset is an independent physical variant. They are not points on
//! a shared sizing curve, so nothing here interpolates between them.

use crate::error::BushingError;
use crate::spec::BushingSpec;

/// Bushing for a 32.5 mm bore.
///
/// Its shoulder (37 mm) is wider than its body (35.5 mm), so the shoulder
/// cut removes nothing. Kept as-is since it is a real part.
pub const BORE_32_5: BushingSpec = BushingSpec::new(32.5, 3.0, 4.5, 25.0, 4.0);

/// Bushing for a 20 mm bore with a 0.5 mm shoulder lip.
pub const BORE_20: BushingSpec = BushingSpec::new(20.0, 1.5, 0.5, 10.0, 4.0);

static PRESETS: [(&str, BushingSpec); 2] = [("bore-32.5", BORE_32_5), ("bore-20", BORE_20)];

/// All presets with their names, in declaration order.
pub fn all() -> &'static [(&'static str, BushingSpec)] {
    &PRESETS
}

/// Preset names, in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

/// Looks up a preset by name.
///
/// # Examples
/// ```
/// use bushing_csg::presets;
/// let spec = presets::by_name("bore-20").unwrap();
/// assert_eq!(spec.inner_diameter, 20.0);
/// assert!(presets::by_name("bore-8").is_err());
/// ```
pub fn by_name(name: &str) -> Result<BushingSpec, BushingError> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, spec)| *spec)
        .ok_or_else(|| BushingError::UnknownPreset(name.to_string()))
}

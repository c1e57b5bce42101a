//! Names owned by the set's own attribute surface.

/// Accessor names resolved by [`AttributeSurface::attr`](super::AttributeSurface::attr)
/// before any declared constant. A choice may not use any of them.
pub const RESERVED_NAMES: [&str; 4] = ["pairs", "names", "choices", "constants"];

/// Check whether `name` collides with a built-in accessor
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

//! Intent trait.

/// Something that happened and may change state: an action starting,
/// a service call finishing, or a local edit such as dismissing an error.
pub trait Intent: Send + 'static {}

//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing an entity update.
#[derive(Clone, Copy, Debug)]
pub struct Update;

/// Marker type describing an entity publication.
#[derive(Clone, Copy, Debug)]
pub struct Publication;

/// Marker type describing a stay start.
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker type describing a stay end.
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;

pub(super) mod core;
pub(super) mod manuscript;

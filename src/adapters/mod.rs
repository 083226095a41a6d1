// Adapters layer: concrete speech and display providers.

pub mod console;
pub mod memory;

pub mod registry;

pub use registry::HookRegistry;

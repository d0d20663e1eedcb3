pub mod conversion;
pub mod notables;
pub mod ownership;
pub mod session;

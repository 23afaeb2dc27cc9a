mod errors;
mod subscribe;

pub use subscribe::{subscribe, subscribe_with_provider};

pub mod types;

pub use types::CrosscheckError;

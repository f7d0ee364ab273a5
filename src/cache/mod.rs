pub mod lookup_cache;

pub use lookup_cache::{LookupCache, LookupKey, LookupKind, LookupValue};

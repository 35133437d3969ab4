pub mod impl_tracing;
pub mod interface;

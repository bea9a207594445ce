//! One handler per operation, each holding its ports as `Arc<dyn Trait>`.

pub mod account;
pub mod checkin;
pub mod goal;

#[cfg(test)]
pub(crate) mod support;

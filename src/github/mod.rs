pub mod client;
pub mod events;
#[cfg(test)]
pub mod fixtures;

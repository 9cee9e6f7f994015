pub mod membership;
pub mod playlist;
pub mod shared;
pub mod song;

#[cfg(test)]
pub(crate) mod testing;

pub mod field;
pub mod membership;
pub mod playlist;
pub mod song;
pub mod value;

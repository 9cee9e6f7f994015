pub mod playlist;
pub mod song;

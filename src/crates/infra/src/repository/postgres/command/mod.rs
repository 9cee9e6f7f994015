pub mod db_data;
pub mod membership;
pub mod playlist;
pub mod song;

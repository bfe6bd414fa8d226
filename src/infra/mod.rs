pub mod db;
pub mod listener;

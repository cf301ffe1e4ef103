pub mod keys;
pub mod messages;
pub mod table;
pub mod view;

pub mod contacts;
pub mod docs;

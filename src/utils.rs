pub mod date;
pub mod kv;
pub mod logs;

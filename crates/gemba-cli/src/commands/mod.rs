pub mod delete;
pub mod dispatch;
pub mod get;
pub mod health;
pub mod list;
pub mod serve;
pub mod shared;
pub mod stats;
pub mod submit;

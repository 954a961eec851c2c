// Document persistence: one markdown document per (user, kind), written with upsert.

pub mod handlers;
pub mod store;

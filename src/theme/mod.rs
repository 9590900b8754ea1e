//! Theme - Colors used by the admin console

pub mod colors;

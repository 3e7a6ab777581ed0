//! Unit tests mirroring the `src` tree file-for-file

mod configuration;
mod error;

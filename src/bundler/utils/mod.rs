//! Filesystem and path helpers shared by the output writers and the assembler.

pub mod fs;
pub mod path;

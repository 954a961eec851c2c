// Markdown Compiler: deterministic ResumeDocument → markdown rendering.

pub mod compiler;
pub mod entries;

pub use compiler::compile_resume;

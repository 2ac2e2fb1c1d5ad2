mod pages;
mod root;

pub use root::Cli;

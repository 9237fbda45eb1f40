mod builtin;
mod tables;

//! datajpa CLI library - subcommands shared by the `datajpa` binary

pub mod commands;

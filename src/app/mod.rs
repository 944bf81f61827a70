// Application layer: the operations the CLI exposes, kept free of argument parsing.

pub mod commands;

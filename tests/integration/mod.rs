mod cli_contracts;
mod generation;

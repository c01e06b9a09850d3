pub(crate) mod cli;
pub(crate) mod scenarios;

//! Unit-level tests exercising single components against real files

mod test_ini_parser;
mod test_options;

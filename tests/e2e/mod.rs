// E2E test modules

pub mod editing;

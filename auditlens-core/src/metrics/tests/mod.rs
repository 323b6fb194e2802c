mod reader_tests;
mod week_key_tests;

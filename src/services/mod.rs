pub mod report_parser;
pub mod alert_counter;
pub mod env_file_writer;

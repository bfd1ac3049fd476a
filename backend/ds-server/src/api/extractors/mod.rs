pub mod authenticated;

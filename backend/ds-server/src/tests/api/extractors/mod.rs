mod authenticated;

mod file_context_tests;

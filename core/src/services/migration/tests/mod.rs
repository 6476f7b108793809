mod allow_null_tests;

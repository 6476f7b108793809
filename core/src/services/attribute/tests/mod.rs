mod langcode_tests;

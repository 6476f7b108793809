mod cache_tests;
mod mocks;

mod blocks_tests;
mod levels_tests;
mod values_tests;

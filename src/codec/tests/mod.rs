mod test_utils;
mod number_tests;
mod stream_tests;
mod feature_tests;

mod fractional_test;
mod mock_test;

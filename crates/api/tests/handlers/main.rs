mod availability_test;
mod health_test;
mod test_utils;

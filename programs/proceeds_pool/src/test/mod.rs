pub mod test_pool;

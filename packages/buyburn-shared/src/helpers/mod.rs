pub mod pool_path;

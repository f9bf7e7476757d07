mod helpers;
mod test_swap;

pub mod amm_router;
pub mod concentrated_router;

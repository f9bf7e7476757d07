pub mod asset_ext;
pub mod asset_info_ext;

use buyburn_shared::msgs_buy_burn::{BurnSettings, Config, SwapRoute, SwapSettings};
use cosmwasm_std::Addr;
use cw_asset::AssetInfo;
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");

/// Only enabled assets have an entry, disabling removes it from both maps.
pub const SWAP_SETTINGS: Map<&AssetInfo, SwapSettings> = Map::new("swap_settings");
pub const SWAP_ROUTES: Map<&AssetInfo, SwapRoute> = Map::new("swap_routes");

pub const BURN_SETTINGS: Item<BurnSettings> = Item::new("burn_settings");

pub const WHITELIST: Map<&Addr, ()> = Map::new("whitelist");

use buyburn_shared::msgs_buy_burn::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use cosmwasm_schema::write_api;

fn main() {
  write_api! {
      instantiate: InstantiateMsg,
      execute: ExecuteMsg,
      query: QueryMsg,
      migrate: MigrateMsg
  }
}

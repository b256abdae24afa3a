use crate::store::UserSource;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_user_list;

pub fn handle_list(ctx: CommandContext, json: bool) -> Result<()> {
    let store = ctx.user_store()?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.users())?);
    } else {
        print_user_list(store.users());
    }
    Ok(())
}

use crate::graphql::build_schema;
use crate::store::UserStore;
use anyhow::Result;

pub fn handle_sdl() -> Result<()> {
    let schema = build_schema(UserStore::seed());
    print!("{}", schema.sdl());
    Ok(())
}

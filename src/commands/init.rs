use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::Store;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);

    let store = Store::new()?;
    msg_info!(Message::TasksFileLocation(store.path().display().to_string()));
    Ok(())
}

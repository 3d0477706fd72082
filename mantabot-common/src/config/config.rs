// See config.toml for information on the variables here.

use serde::Deserialize;

#[derive(Deserialize)]
pub struct MantabotConfig {
    pub authentication: Authentication,
    pub prefix: Prefixes,
}

#[derive(Deserialize)]
pub struct Authentication {
    pub discord_token: String,
}

#[derive(Deserialize)]
pub struct Prefixes {
    pub default: String,
}

use config::Config;
use serde::Deserialize;
use tracing::warn;

/// Runtime settings. Defaults match the conventional file names; any field
/// can be overridden from an optional `lflist.toml` next to the binary or
/// from `LFLIST_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcg_list: String,
    pub ocg_list: String,
    pub traditional_list: String,
    pub worlds_list: String,
    pub worlds_out: String,
    pub traditional_out: String,
    pub card_db: String,
    pub scripts_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tcg_list: "0TCG.lflist.conf".into(),
            ocg_list: "OCG.lflist.conf".into(),
            traditional_list: "Traditional.lflist.conf".into(),
            worlds_list: "World.lflist.conf".into(),
            worlds_out: "World.new.lflist.conf".into(),
            traditional_out: "Traditional.new.lflist.conf".into(),
            card_db: "cards.delta.cdb".into(),
            scripts_dir: "script".into(),
        }
    }
}

pub fn load() -> Settings {
    let built = Config::builder()
        .add_source(config::File::with_name("lflist").required(false))
        .add_source(config::Environment::with_prefix("LFLIST"))
        .build()
        .and_then(|c| c.try_deserialize::<Settings>());

    match built {
        Ok(settings) => settings,
        Err(e) => {
            warn!("using default settings: {}", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_names() {
        let settings = Settings::default();
        assert_eq!(settings.tcg_list, "0TCG.lflist.conf");
        assert_eq!(settings.worlds_out, "World.new.lflist.conf");
        assert_eq!(settings.traditional_out, "Traditional.new.lflist.conf");
    }
}

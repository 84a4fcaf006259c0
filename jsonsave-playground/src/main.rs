use jsonsave_core::{JsonStreamer, Object, Result, Value};
use jsonsave_macros::JsonSave;

use std::path::PathBuf;
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Saves and reloads a settings file")]
struct Args {
    /// File to write and read back
    #[arg(default_value = "settings.json")]
    path: PathBuf,

    /// Volume to store before saving
    #[arg(long, default_value_t = 11)]
    volume: i32,
}

#[derive(Debug, Clone, Default, JsonSave)]
struct Settings {
    #[json_save(kind = String)]
    user: String,
    #[json_save(kind = Int)]
    volume: i32,
    #[json_save(kind = Float)]
    zoom: f32,
    #[json_save(kind = Boolean)]
    fullscreen: bool,
    #[json_save]
    window: Value,

    recent: Vec<String>,
}

impl JsonStreamer for Settings {

    fn serialize(&self) -> Object {
        let mut object = Object::new();
        object.insert("recent".into(), json!(self.recent));
        object
    }

    fn deserialize(&mut self, object: &Object) -> Result<()> {
        self.recent = object.get("recent")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(Value::as_str).map(String::from).collect())
            .unwrap_or_default();
        Ok(())
    }

}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let settings = Settings {
        user: "playground".into(),
        volume: args.volume,
        zoom: 1.25,
        fullscreen: false,
        window: json!({ "width": 1280, "height": 720 }),
        recent: vec!["notes.txt".into(), "todo.md".into()],
    };

    settings.write(&args.path)?;
    info!(path = %args.path.display(), "saved settings");

    let loaded = Settings::load(&args.path)?;
    info!(?loaded, "reloaded settings");

    Ok(())
}

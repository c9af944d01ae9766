use crate::error::Result;
use crate::settings::{load_settings, settings_path};

pub fn run() -> Result<()> {
    let path = settings_path();
    let settings = load_settings();

    let note = if path.exists() { "" } else { " (not created, using defaults)" };
    println!("Settings:       {}{note}", path.display());
    println!("Input dir:      {}", settings.input_dir);
    println!("Default output: {}", settings.default_output);
    Ok(())
}

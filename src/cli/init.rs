use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(input_dir: Option<String>, default_output: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = input_dir {
        settings.input_dir = shellexpand_path(&dir);
    }
    if let Some(name) = default_output {
        settings.default_output = name;
    }

    save_settings(&settings)?;
    println!("Saved settings to {}", settings_path().display());
    Ok(())
}

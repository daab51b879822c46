use crate::models::{config, UserConfig};
use super::fail;

pub fn show_config(user_config: &UserConfig, init: bool) {
    let path = config::get_config_path();

    match &path {
        Some(p) => println!("Config file: {}", p.display()),
        None => println!("Config file: (no home directory)"),
    }

    if init {
        match &path {
            Some(p) if p.exists() => println!("Config file already exists, leaving it untouched."),
            Some(p) => {
                config::save_to(p, &UserConfig::default()).unwrap_or_else(|e| fail(e));
                println!("Wrote default config.");
            }
            None => println!("Cannot write a config file without a home directory."),
        }
    }

    println!();
    println!("Problems folder: {}", user_config.problems_root.display());
    println!("Default cases:   {}", user_config.default_cases);
    println!("Language:        {}", user_config.language.display_name());
    println!("C++ flags:       {}", user_config.cpp_flags.join(" "));
    println!("C flags:         {}", user_config.c_flags.join(" "));
    println!("Rust flags:      {}", user_config.rust_flags.join(" "));
    match user_config.timeout_secs {
        Some(secs) => println!("Timeout:         {}s", secs),
        None => println!("Timeout:         none"),
    }
}

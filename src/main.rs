use clap::{Arg, ArgAction, Command};
use std::error::Error;
use std::{env, fs, path};

use synctrig::config::Config;
use synctrig::controller::{PressOutcome, SyncButtonController};
use synctrig::hook::HookClient;
use synctrig::surface::ConsoleSurface;

///////////////////////
// Utility functions //
///////////////////////

fn init_synctrig_dir() -> Result<path::PathBuf, Box<dyn Error>> {
	match env::var("HOME") {
		Ok(home) => {
			let synctrig_dir = path::PathBuf::from(home).join(".synctrig");

			match fs::metadata(&synctrig_dir) {
				Ok(meta) => {
					if meta.is_dir() {
						Ok(synctrig_dir)
					} else {
						Err(format!("{} exists, but it is not a directory!", synctrig_dir.display())
							.into())
					}
				}
				Err(_err) => {
					// Not exists
					fs::create_dir(&synctrig_dir)
						.map_err(|err| format!("Cannot create directory: {}", err))?;
					Ok(synctrig_dir)
				}
			}
		}
		Err(_e) => Err("Could not determine HOME directory!".into()),
	}
}

fn load_config(matches: &clap::ArgMatches) -> Result<Config, Box<dyn Error>> {
	let profile = matches.get_one::<String>("profile").map(|s| s.as_str()).unwrap_or("default");
	let synctrig_dir = init_synctrig_dir()?;
	let mut config = Config::load(&synctrig_dir, profile)?;

	if let Some(url) = matches.get_one::<String>("url") {
		config.base_url = url.clone();
	}
	config.validate()?;
	Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	let matches = Command::new("SyncTrig")
		.version("0.2.0")
		.author("Szilard Hajba <szilard@symbion.hu>")
		.about("Remote database sync-hook trigger")
		.subcommand_required(true)
		.arg(
			Arg::new("profile")
				.short('p')
				.long("profile")
				.value_name("PROFILE")
				.help("Profile"),
		)
		.arg(
			Arg::new("url")
				.short('u')
				.long("url")
				.value_name("URL")
				.help("Base URL of the server hosting the sync hook"),
		)
		.subcommand(
			Command::new("trigger").about("Trigger the sync hook once and exit").arg(
				Arg::new("delayed-reload")
					.long("delayed-reload")
					.action(ArgAction::SetTrue)
					.help("Wait one second between Success and reload"),
			),
		)
		.subcommand(Command::new("check").about("Probe whether the hook server is reachable"))
		.subcommand(Command::new("tui").about("Interactive button UI"))
		.get_matches();

	if let Some(sub_matches) = matches.subcommand_matches("trigger") {
		synctrig::logging::init_tracing();
		let mut config = load_config(&matches)?;
		if sub_matches.get_flag("delayed-reload") {
			config.reload_delay_ms = 1000;
		}

		let surface = ConsoleSurface::new(config.labels.clone());
		let mut controller = SyncButtonController::from_config(&config, surface);
		match controller.press().await {
			PressOutcome::Synced => {}
			_ => std::process::exit(1),
		}
	} else if matches.subcommand_matches("check").is_some() {
		synctrig::logging::init_tracing();
		let config = load_config(&matches)?;

		let client = HookClient::new(&config.base_url).with_hook_path(&config.hook_path);
		match client.probe().await {
			Ok(status) => {
				println!("{}: reachable (status {})", config.base_url, status);
			}
			Err(e) => {
				eprintln!("{}: unreachable ({})", config.base_url, e);
				std::process::exit(1);
			}
		}
	} else if matches.subcommand_matches("tui").is_some() {
		#[cfg(feature = "tui")]
		{
			let config = load_config(&matches)?;
			return synctrig::tui::run_tui(config).await;
		}
		#[cfg(not(feature = "tui"))]
		{
			return Err("This build was compiled without the 'tui' feature".into());
		}
	}

	Ok(())
}

// vim: ts=4

use clap::Parser;
use pwvault::cli::commands;
use pwvault::cli::{load_settings, output, AuthAction, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            pwvault::logging::init(cli.verbose, "warn");
            output::error(&e.to_string());
            std::process::exit(1);
        }
    };
    pwvault::logging::init(cli.verbose, &settings.log_level);

    let result = match cli.command.as_ref().unwrap_or(&Commands::Menu) {
        Commands::Generate {
            length,
            save,
            copy,
        } => commands::generate::execute(&settings, length.as_deref(), save.as_deref(), *copy),
        Commands::Get { name, copy } => commands::get::execute(&settings, name, *copy),
        Commands::List => commands::list::execute(&settings),
        Commands::Delete { name, force } => commands::delete::execute(&settings, name, *force),
        Commands::Menu => commands::menu::execute(&settings),
        Commands::Completions { shell } => commands::completions::execute(*shell),
        Commands::Auth { action } => match action {
            AuthAction::Keyring { delete } => {
                commands::auth::execute_keyring(&settings, *delete)
            }
        },
    };

    if let Err(e) = result {
        tracing::debug!(fatal = e.is_fatal(), error = ?e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

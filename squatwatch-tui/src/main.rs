use std::sync::Arc;

use anyhow::Result;

use squatwatch_tui::backend::{ConfigService, ConsoleConfig, ConsoleService, LocalConfigService};
use squatwatch_tui::i18n::{set_language, Language};
use squatwatch_tui::model::App;
use squatwatch_tui::util::{init_terminal, restore_terminal};
use squatwatch_tui::view::theme::set_theme_index;
use squatwatch_tui::{app, update};

fn main() -> Result<(), anyhow::Error> {
    // 1. Load configuration; a broken config file falls back to defaults
    let config = match LocalConfigService.load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Failed to load configuration: {err:#}");
            ConsoleConfig::default()
        }
    };

    if let Some(language) = Language::from_code(&config.language) {
        set_language(language);
    }
    set_theme_index(config.theme.index());

    // 2. Connect the backend services
    let backend = Arc::new(ConsoleService::new(&config.api_base)?);

    // 3. Initialize the terminal
    let mut terminal = init_terminal()?;

    // 4. Create the application and load the watchlist
    let mut app = App::new(backend);
    update::bootstrap(&mut app);

    // 5. Run the main loop
    let result = app::run(&mut terminal, &mut app);

    // 6. Restore the terminal, even when the loop failed
    restore_terminal(&mut terminal)?;

    result
}

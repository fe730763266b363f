mod bootstrap;

use anyhow::Result;
use bikeshare_core::settings::Settings;
use bikeshare_runtime::session::Session;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = bootstrap::resolve_data_dir(settings.data_dir.as_deref());
    tracing::info!("Reading city data from {}", data_dir.display());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session =
        Session::new(stdin.lock(), stdout.lock(), data_dir).with_timing(settings.show_timing());

    let iterations = session.run()?;
    tracing::info!("Session finished after {} iteration(s)", iterations);

    Ok(())
}

use jiyer_site::{App, SiteConfig};

fn main() {
    let (config, err) = SiteConfig::from_env();

    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("failed to initialize logger: {err}");
    }
    if let Some(err) = err {
        tracing::warn!(%err, "falling back to the default log level");
    }
    tracing::info!(api = %config.api_base, "starting site");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

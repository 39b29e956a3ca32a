mod app;

use beanery::{Catalog, Config, Context};
use beanery_auto::AutoCatalog as _;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use app::services::UserService;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,beanery=debug")))
        .init();

    let catalog = Catalog::new().provide_auto_components();
    let context = Context::new(&catalog, &Config::new().base_package(concat!(module_path!(), "::app")))?;

    for (type_info, name) in context.candidates() {
        info!(%type_info, name = %name, "Candidate");
    }

    let service = context.get::<dyn UserService>()?;
    info!(users = ?service.users(), "Users from the bound service");

    let local = context.get_by_name::<dyn UserService>("localUsers")?;
    info!(users = ?local.users(), "Users from `localUsers`");

    Ok(())
}

use solcat_companion::{
    configuration::get_config,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    init_subscriber(get_subscriber(
        "solcat-companion".into(),
        "info".into(),
        std::io::stdout,
    ));

    let configuration = get_config().expect("failed to get configuration");
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await
}

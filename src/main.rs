use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;

use quiz_server::{
    app_state::AppState,
    auth::issue_dev_token,
    config::Config,
    handlers::{configure, json_config},
    middleware::RequestIdMiddleware,
};

#[derive(Parser, Debug)]
#[command(name = "quiz-server", version, about = "Quiz CRUD HTTP server")]
struct Cli {
    /// Print a shared-secret bearer token for UID and exit (development only)
    #[arg(long, value_name = "UID")]
    issue_token: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    if let Some(uid) = cli.issue_token {
        let token = issue_dev_token(&config, &uid).map_err(|e| std::io::Error::other(e.to_string()))?;
        println!("{}", token);
        return Ok(());
    }

    if config.is_production() {
        config.validate_for_production();
    }

    let state = AppState::new(&config)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to initialise app state: {}", e)))?;

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::newsletter::NewsletterRouter;
use crate::notifications::Renderer;
use crate::routes::{
    health_check, submit_adoption, submit_contact, submit_foster, submit_volunteer, subscribe,
    subscribe_with_provider,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = config.email_client.client()?;
        let renderer = Renderer::new(config.organization, config.email_client.senders)?;
        let newsletter = NewsletterRouter::from_settings(&config.newsletter, config.environment)?;

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}."))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, renderer, newsletter)?;

        tracing::info!(%address, port, environment = config.environment.as_str(), "Listening");

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    renderer: Renderer,
    newsletter: NewsletterRouter,
) -> Result<Server, anyhow::Error> {
    let email_client = web::Data::new(email_client);
    let renderer = web::Data::new(renderer);
    let newsletter = web::Data::new(newsletter);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/adoptions", web::post().to(submit_adoption))
                    .route("/fosters", web::post().to(submit_foster))
                    .route("/volunteers", web::post().to(submit_volunteer))
                    .route("/contact", web::post().to(submit_contact))
                    .route("/newsletter", web::post().to(subscribe))
                    .route("/newsletter/{provider}", web::post().to(subscribe_with_provider)),
            )
            .app_data(email_client.clone())
            .app_data(renderer.clone())
            .app_data(newsletter.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

mod client;
mod conf;
mod controller;
mod db;
mod model;
mod provider;
mod repository;
mod service;
#[cfg(test)]
mod test;

use crate::{
    conf::Conf,
    provider::{AwesomeApi, QuotationSource},
    repository::QuotationRepository,
};
use anyhow::{anyhow, Result};
use rocket::{catchers, routes, Build, Rocket};
use std::{env, io, process::exit};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let conf = Conf::new().unwrap_or_else(|e| {
        error!(%e, "Unable to load configuration");
        exit(1);
    });

    match args.first().map(String::as_str) {
        None | Some("serve") => serve(conf).await.unwrap_or_else(|e| {
            error!(%e, "Server failed");
            exit(1);
        }),
        Some("client") => client::run(&conf.client, &mut io::stdout()).await.unwrap_or_else(|e| {
            error!(%e, "Client failed");
            exit(1);
        }),
        _ => {
            error!(?args, "Unknown argument");
            exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn serve(conf: Conf) -> Result<()> {
    let pool = db::pool(&conf.store)?;
    let repo = QuotationRepository::new(pool, conf.store.timeout());
    info!(
        address = %conf.server.address,
        port = conf.server.port,
        db_url = %conf.store.db_url,
        quotations = repo.count()?,
        "Starting server"
    );

    let source = AwesomeApi::new(conf.upstream.clone())?;
    let figment = rocket::Config::figment()
        .merge(("address", &conf.server.address))
        .merge(("port", conf.server.port));

    prepare(rocket::custom(figment), Box::new(source), repo)
        .launch()
        .await
        .map_err(|e| anyhow!("{}", e))?;

    info!(db_url = %conf.store.db_url, "Server stopped, database closed");
    Ok(())
}

pub fn prepare(
    rocket: Rocket<Build>,
    source: Box<dyn QuotationSource>,
    repo: QuotationRepository,
) -> Rocket<Build> {
    rocket
        .mount("/", routes![controller::quotation::get])
        .register("/", catchers![controller::not_found, controller::default])
        .manage(source)
        .manage(repo)
}

use core::sync::atomic::{AtomicUsize, Ordering};

use clap::Parser;
use tamil_sangam::config::Config;
use tamil_sangam::controllers::{serve, PostController};
use tamil_sangam::{in_memory, mongo};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

async fn controller(config: &Config) -> ::anyhow::Result<PostController> {
    match &config.mongodb_uri {
        Some(uri) => {
            let c = mongo(uri, &config.db_name).await?;
            tracing::info!(db = %config.db_name, "connected to mongodb");
            Ok(c)
        },
        None => {
            tracing::warn!("MONGODB_URI is not set, serving seeded posts from memory");
            Ok(in_memory())
        },
    }
}

async fn async_main(config: Config) {
    let c = match controller(&config).await {
        Ok(c) => c,
        Err(e) => return tracing::error!("cannot set up storage: {}", e),
    };

    if let Err(e) = serve(c, (config.host.clone(), config.port)).await {
        tracing::error!("server stopped: {}", e);
    }
}

fn main() {
    let config = Config::parse();

    let filter = EnvFilter::try_new(&config.log).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name_fn(|| {
            static NUM: AtomicUsize = AtomicUsize::new(0);
            format!("tamil_sangam-worker-{}", NUM.fetch_add(1, Ordering::Relaxed))
        })
        .build()
    {
        Ok(r) => r,
        Err(e) => return eprintln!("{}", e),
    };

    rt.block_on(async_main(config))
}

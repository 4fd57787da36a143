//! Demo binary: walks the list/detail flow once in a terminal.
//!
//! Loads the first two pages of the catalog, then the detail record of
//! the first entry, printing what a screen would render. `RUST_LOG`
//! controls the request/response logging.

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use pokedex::state::ViewState;
use pokedex::{Config, Dependencies, PokemonSummary};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    let deps = Dependencies::new(config).context("building HTTP client")?;

    let list = deps.list_store();
    let mut list_states = list.subscribe();

    list.load_first_page();
    let first_page = settled(&mut list_states).await;
    let items = match &first_page {
        ViewState::Success(items) => items.clone(),
        ViewState::Failure(err) => bail!("first page failed: {err}"),
        ViewState::Loading => bail!("list store dropped before settling"),
    };
    print_page(&items);

    list.load_next_page();
    list_states.changed().await.ok();
    if let ViewState::Success(items) = &*list_states.borrow_and_update() {
        println!("-- after load more: {} entries --", items.len());
    }

    let Some(first) = items.first() else {
        bail!("server returned an empty first page");
    };

    let detail_store = deps.detail_store(first.id);
    let mut detail_states = detail_store.subscribe();
    detail_store.load();

    match settled(&mut detail_states).await {
        ViewState::Success(detail) => {
            println!("#{} {}", detail.id, detail.name);
            if let Some(url) = &detail.image_url {
                println!("  sprite: {url}");
            }
            if let Some(types) = &detail.types {
                let names = types.iter().map(|t| t.type_name.as_str()).join(", ");
                println!("  types: {names}");
            }
            if let Some(stats) = &detail.stats {
                for stat in stats {
                    println!("  {:>3} {}", stat.base_value, stat.stat_name);
                }
            }
        }
        ViewState::Failure(err) => bail!("detail load failed: {err}"),
        ViewState::Loading => bail!("detail store dropped before settling"),
    }

    Ok(())
}

/// Waits until the observed state leaves `Loading`.
async fn settled<T: Clone>(rx: &mut watch::Receiver<ViewState<T>>) -> ViewState<T> {
    loop {
        {
            let state = rx.borrow_and_update();
            if !state.is_loading() {
                return state.clone();
            }
        }
        if rx.changed().await.is_err() {
            return ViewState::Loading;
        }
    }
}

fn print_page(items: &[PokemonSummary]) {
    for item in items {
        match &item.image_url {
            Some(url) => println!("#{:<4} {:<14} {url}", item.id, item.name),
            None => println!("#{:<4} {}", item.id, item.name),
        }
    }
}

//! # order_lookup
//!
//! Look up an order by id against the order backend and show the result.
//!
//! The lookup state lives in one actor ([`lookup_actor::LookupService`]). The
//! terminal front end feeds it ids and prints a [`render::Renderer`] view of
//! every status it publishes.
//!
//! ```bash
//! # One-shot lookups
//! order_lookup b563feb7b2b84b6test
//!
//! # Interactive: one id per line, `:clear` to reset, `:quit` to leave
//! order_lookup --base-url http://localhost:9000 --locale ru
//! ```

mod app_system;
mod clients;
mod domain;
mod error;
mod input;
mod lookup_actor;
mod messages;
mod render;
mod source;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn, Instrument};

use crate::app_system::{setup_tracing, Args, LookupSystem};
use crate::clients::LookupClient;
use crate::input::InputCommand;
use crate::render::Renderer;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let args = Args::parse();
    let config = args.lookup_config().map_err(|e| e.to_string())?;
    let renderer = Renderer::new(config.locale);

    let system = LookupSystem::start(&config).map_err(|e| e.to_string())?;
    info!(base_url = %config.base_url, "Order lookup ready");

    if args.order_ids.is_empty() {
        println!("{}", renderer.messages().title);
        let view_task = spawn_view(&system.lookup_client, renderer);
        let result = run_interactive(&system.lookup_client).await;
        system.shutdown().await?;
        // The view task ends once the actor is gone and its last status is printed.
        join_view(view_task).await;
        result
    } else {
        let result = run_batch(&system.lookup_client, renderer, &args.order_ids).await;
        system.shutdown().await?;
        result
    }
}

/// Look up each id in turn and print the view it settles on.
async fn run_batch(client: &LookupClient, renderer: Renderer, order_ids: &[String]) -> Result<(), String> {
    for order_id in order_ids {
        let span = tracing::info_span!("batch_lookup", order_id = %order_id);
        async {
            match client.submit(order_id.clone()).await.map_err(|e| e.to_string())? {
                Some(_) => {
                    let status = client.settled().await.map_err(|e| e.to_string())?;
                    println!("{}", renderer.render(&status));
                }
                None => warn!("Skipping empty order id"),
            }
            Ok::<(), String>(())
        }
        .instrument(span)
        .await?;
    }
    Ok(())
}

/// Print every status transition, including those of responses that arrive
/// after a newer submit.
fn spawn_view(client: &LookupClient, renderer: Renderer) -> tokio::task::JoinHandle<()> {
    let mut status_rx = client.subscribe();
    tokio::spawn(async move {
        while status_rx.changed().await.is_ok() {
            let view = renderer.render(&status_rx.borrow_and_update());
            if !view.is_empty() {
                println!("{}", view);
            }
        }
    })
}

/// Wait for the view task. A panic in it is logged rather than propagated.
async fn join_view(view_task: tokio::task::JoinHandle<()>) -> bool {
    match view_task.await {
        Ok(()) => true,
        Err(e) => {
            error!(error = ?e, "View task failed");
            false
        }
    }
}

/// Read ids from stdin until `:quit` or end of input.
async fn run_interactive(client: &LookupClient) -> Result<(), String> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        match InputCommand::parse(&line) {
            InputCommand::Search(text) => {
                client.set_order_id(text).await.map_err(|e| e.to_string())?;
                client.submit_current().await.map_err(|e| e.to_string())?;
            }
            InputCommand::Clear => client.clear().await.map_err(|e| e.to_string())?,
            InputCommand::Quit => break,
        }
    }

    // Let every submitted lookup finish before leaving.
    client.settled().await.map_err(|e| e.to_string())?;
    Ok(())
}

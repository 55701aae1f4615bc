//! View a proposal from the terminal.
//!
//! ```text
//! VALENTINE_BACKEND_URL=http://localhost:8001 cargo run -p valentine-sdk --example view_proposal -- /proposal/<id> [--accept]
//! ```

use valentine_core::{PageState, Rendered};
use valentine_sdk::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valentine=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/".to_string());
    let accept = args.any(|a| a == "--accept");

    let client = ValentineClient::from_env()?;

    let Some(page) = ProposalPage::mount_path(client, &path).await else {
        println!("Not a proposal link: {path}");
        return Ok(());
    };

    match page.state() {
        PageState::Loading => println!("💗 Loading..."),
        PageState::Error(failure) => {
            println!("💔 Oops! {}", failure.message());
            let link = failure.recovery();
            println!("   {} -> {}", link.label, link.route.path());
        }
        PageState::Loaded(view) => {
            if let Some(presenter) = page.presenter() {
                match presenter.render() {
                    Rendered::Animation { source } => println!("🎞  {source}"),
                    Rendered::Image { source, alt } => println!("🖼  {alt}: {source}"),
                    Rendered::Emoji { glyph } => println!("{glyph}"),
                }
            }
            println!("{}", view.valentine_name);
            if let Some(message) = &view.custom_message {
                println!("{message}");
            }

            if accept {
                if let Some(handle) = page.accept() {
                    println!("💖 Yay!");
                    handle.await?;
                }
            }
        }
    }

    Ok(())
}

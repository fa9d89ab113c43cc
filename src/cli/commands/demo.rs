//! Genre lookup demo.

use std::fmt::Display;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::lookup::GenreService;

/// Print genres for a title and an author, then the author and identifiers
/// resolved for a second title
pub fn cmd_demo(
    rt: &Runtime,
    config: &Config,
    title: &str,
    author: &str,
    author_of: &str,
) -> anyhow::Result<()> {
    let lookup = match config.lookup_config() {
        Ok(lookup) => lookup,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Get keys at:");
            eprintln!("  Goodreads: https://www.goodreads.com/api/keys");
            eprintln!("  ISBNdb:    https://isbndb.com/account/dev/keys");
            eprintln!("Then use: --goodreads-key KEY --isbndb-key KEY [config --save]");
            return Err(e.into());
        }
    };
    let service = GenreService::from_config(&lookup).with_context("building genre service")?;

    rt.block_on(async {
        println!("Genres of {:?}: {}", title, service.title_genre(title).await);
        println!("Genres of {:?}: {}", author, service.author_genre(author).await);
        println!();

        let resolver = service.resolver();
        println!(
            "Author of {:?}: {}",
            author_of,
            describe(
                resolver
                    .resolve_author_name(author_of)
                    .await
                    .with_context("resolving author name")
            )
        );
        println!(
            "  Title ID:  {}",
            describe(
                resolver
                    .resolve_title_id(author_of)
                    .await
                    .with_context("resolving title ID")
            )
        );
        println!(
            "  Author ID: {}",
            describe(
                resolver
                    .resolve_author_id(author_of)
                    .await
                    .with_context("resolving author ID")
            )
        );
        println!(
            "  ISBN:      {}",
            describe(
                resolver
                    .resolve_isbn(author_of)
                    .await
                    .with_context("resolving ISBN")
            )
        );
    });

    Ok(())
}

/// Render a lookup outcome for display
fn describe<T: Display>(result: Result<Option<T>>) -> String {
    match result {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => "None found".to_string(),
        Err(e) => format!("lookup failed ({})", e),
    }
}

use std::path::Path;

use crate::app::{AppContext, Result};
use crate::domain::Article;
use crate::export;

pub async fn generate_tips(ctx: &AppContext, save: Option<&Path>) -> Result<()> {
    println!("Generating random tips...");
    let articles = ctx.generator.random_tips().await?;
    print_articles(&articles);
    save_if_requested(&articles, save)?;
    Ok(())
}

pub async fn generate_topic(ctx: &AppContext, topic: &str, save: Option<&Path>) -> Result<()> {
    println!("Generating articles about \"{}\"...", topic);
    let articles = ctx.generator.from_topic(topic).await?;
    print_articles(&articles);
    save_if_requested(&articles, save)?;
    Ok(())
}

fn print_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("No articles generated");
        return;
    }

    println!("Generated {} article(s):\n", articles.len());
    for article in articles {
        println!("{}\n  {}", article.title, article.description);
    }
}

fn save_if_requested(articles: &[Article], save: Option<&Path>) -> Result<()> {
    let Some(dir) = save else {
        return Ok(());
    };

    std::fs::create_dir_all(dir)?;
    let mut written = 0;
    let mut errors = 0;
    for article in articles {
        match export::save_markdown(article, dir) {
            Ok(path) => {
                println!("  + {}", path.display());
                written += 1;
            }
            Err(e) => {
                eprintln!("  ! {}: {}", article.title, e);
                errors += 1;
            }
        }
    }
    println!("Saved {} file(s), {} error(s)", written, errors);
    Ok(())
}

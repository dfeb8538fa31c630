use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_catalog::services::{LessonPager, TabController, TabState};
use course_catalog::{CatalogConfig, CatalogHttpClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_catalog=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::new_from_env()?;
    info!("using catalog at {}", config.base_url);
    let page_size = config.page_size;
    let client = CatalogHttpClient::new(config)?;

    let mut tabs = TabController::new();
    tabs.load(&client).await?;

    if tabs.state() == TabState::Empty {
        println!("No courses available");
        return Ok(());
    }

    for (category, courses) in tabs.partition().iter() {
        println!("[{}]", category);
        for course in courses {
            println!("  {:>3}  {}", course.id, course.titles.description);
        }
    }

    let Some(first) = tabs.active_courses().first() else {
        return Ok(());
    };

    let mut pager = LessonPager::new(first.id, page_size)?;
    match pager.load(&client).await {
        Ok(lessons) => {
            println!();
            println!("Lessons for {}:", first.titles.description);
            for lesson in lessons {
                println!("  {:>3}  {:<50} {}", lesson.seq_no, lesson.description, lesson.duration);
            }
        }
        Err(err) => warn!("could not load lessons for course {}: {}", first.id, err),
    }

    Ok(())
}

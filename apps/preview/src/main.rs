use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    aggregator::{fetch_service_catalog, order_nav_sections},
    config::load_settings,
    display::{article_cards, format_published_date, NO_ARTICLES_PLACEHOLDER},
    FetchError, SiteClient,
};
use shared::{
    domain::{WebinarId, WebinarStatus},
    protocol::{ContactSubmission, WebinarRegistration},
};

#[derive(Parser, Debug)]
struct Cli {
    /// Overrides the configured backend base URL.
    #[arg(long)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the joined navigation tree of categories and services.
    Nav,
    /// List published articles.
    Articles,
    /// Show one article by slug.
    Article { slug: String },
    /// List projects.
    Projects,
    /// List webinars with their status.
    Webinars,
    /// Register for a webinar.
    Register {
        webinar_id: i64,
        username: String,
        email: String,
        phone: String,
    },
    /// Submit the contact form.
    Contact {
        name: String,
        email: String,
        phone: String,
        #[arg(long, default_value = "2-4 weeks")]
        timeline: String,
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let cli = Cli::parse();

    let settings = load_settings();
    let base_url = cli.base_url.unwrap_or(settings.api_base_url.clone());
    let client = SiteClient::new(base_url)?;

    match cli.command {
        Command::Nav => {
            let catalog = fetch_service_catalog(&client).await?;
            if catalog.is_empty() {
                println!("No categories available");
                return Ok(());
            }
            let sections = order_nav_sections(
                catalog.groups,
                &settings.nav_keywords,
                settings.nav_max_sections,
            );
            for section in sections {
                println!("{} ({})", section.label, section.category.slug);
                for service in section.services {
                    println!("  - {} [{}]", service.title, service.slug);
                }
            }
        }
        Command::Articles => {
            let articles = client.list_articles().await?;
            if articles.is_empty() {
                println!("{NO_ARTICLES_PLACEHOLDER}");
                return Ok(());
            }
            for card in article_cards(&articles) {
                println!("{} — {} [{}]", card.title, card.published, card.slug);
            }
        }
        Command::Article { slug } => match client.article_detail(&slug).await {
            Ok(article) => {
                println!("{}", article.title);
                println!("Published {}", format_published_date(article.created_at));
            }
            Err(FetchError::NotFound { .. }) => println!("No article for slug {slug:?}"),
            Err(err) => return Err(err.into()),
        },
        Command::Projects => {
            for project in client.list_projects().await? {
                println!("{} [{}]", project.title, project.slug);
            }
        }
        Command::Webinars => {
            for webinar in client.list_webinars().await? {
                let status = match webinar.status {
                    WebinarStatus::Upcoming => "upcoming",
                    WebinarStatus::Past => "past",
                };
                println!("{} ({status}) [{}]", webinar.title, webinar.slug);
            }
        }
        Command::Register {
            webinar_id,
            username,
            email,
            phone,
        } => {
            let registration = WebinarRegistration {
                username,
                email,
                phone_number: phone,
                webinar: WebinarId(webinar_id),
            };
            match client.register_for_webinar(&registration).await {
                Ok(ack) => println!(
                    "{}",
                    ack.detail.unwrap_or_else(|| "Registration received".into())
                ),
                Err(err) => println!("Registration failed: {}", err.inline_message()),
            }
        }
        Command::Contact {
            name,
            email,
            phone,
            timeline,
            message,
        } => {
            let submission = ContactSubmission {
                name,
                email,
                phone,
                project_timeline: timeline,
                message,
            };
            match client.submit_contact(&submission).await {
                Ok(ack) => println!(
                    "{}",
                    ack.detail.unwrap_or_else(|| "Message received".into())
                ),
                // The entered values stay in `submission`; nothing is lost on
                // a failed submit.
                Err(err) => println!("Submission failed: {}", err.inline_message()),
            }
        }
    }

    Ok(())
}

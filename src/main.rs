//! Prints the demo timeline and collections.

use std::error::Error;

use chrono::{DateTime, Local, TimeZone, Utc};
use dining_log::dto::collections::CitySectionDto;
use dining_log::dto::timeline::TimelineSectionDto;
use dining_log::engine::locale::EnUs;
use dining_log::models::config::AppConfig;
use dining_log::repository::seed::demo_repository;
use dining_log::services::{collections, timeline};

const CONFIG_PATH: &str = "config/default";

fn print_timeline(sections: &[TimelineSectionDto]) {
    println!("== Timeline");
    for section in sections {
        let marker = if section.highlighted { "*" } else { "-" };
        println!("{marker} {}", section.label);
        for check_in in &section.check_ins {
            println!(
                "    {} ({}) {}: {}",
                check_in.restaurant_name,
                check_in.location,
                check_in.rating_label,
                check_in.dishes.join(", ")
            );
        }
    }
}

fn print_collections(sections: &[CitySectionDto]) {
    println!("== Collections");
    for section in sections {
        println!("{} ({})", section.city, section.collections.len());
        for card in &section.collections {
            let avatars = card
                .avatars
                .as_ref()
                .map(|stack| {
                    let names: Vec<&str> = stack.shown.iter().map(|c| c.name.as_str()).collect();
                    match &stack.overflow_label {
                        Some(label) => format!(" [{} {label}]", names.join(", ")),
                        None => format!(" [{}]", names.join(", ")),
                    }
                })
                .unwrap_or_default();
            println!(
                "    {}: {} places, {} saves, updated {}{avatars}",
                card.title, card.place_count, card.save_count, card.updated
            );
        }
    }
}

fn run<Tz: TimeZone>(now: DateTime<Tz>, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let repo = demo_repository(&now)?;

    let sections = timeline::show_timeline(&repo, &now, &EnUs)?;
    print_timeline(&sections);

    let cities = collections::show_collections(&repo, now.with_timezone(&Utc), config)?;
    print_collections(&cities);

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load(CONFIG_PATH)?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.log_level));

    match config.fixed_offset() {
        Some(offset) => {
            log::info!("Using fixed UTC offset {offset}");
            run(Utc::now().with_timezone(&offset), &config)
        }
        None => run(Local::now(), &config),
    }
}

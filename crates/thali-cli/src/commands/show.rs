//! Show command - render the dashboard in the terminal.

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use thali::{BadgeVariant, Dataset, RatingClass, Section, format};

use super::load_snapshot;

/// Width of the block bars in chart rows.
const BAR_WIDTH: usize = 30;

pub fn run(
    file: Option<PathBuf>,
    section: Option<Section>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_snapshot(&file)?;

    match section {
        Some(section) => render_section(&dataset, section),
        None => {
            render_header(&dataset);
            for section in Section::ALL {
                println!();
                render_section(&dataset, section);
            }
        }
    }

    Ok(())
}

fn render_header(dataset: &Dataset) {
    let metrics = dataset.key_metrics();

    println!(
        "{} {}",
        "Dashboard for".cyan().bold(),
        dataset.meta.label.white().bold()
    );
    println!("  Source: {}", dataset.meta.source);
    println!();
    println!(
        "  Restaurants: {}",
        format::group_thousands(metrics.total_restaurants as u64)
            .white()
            .bold()
    );
    println!(
        "  Avg rating:  {}",
        format::rating(metrics.average_rating).white().bold()
    );
    if let (Some(name), Some(count)) = (&metrics.top_cuisine, metrics.top_cuisine_restaurants) {
        println!(
            "  Top cuisine: {} ({} restaurants)",
            name.white().bold(),
            format::group_thousands(count as u64)
        );
    }
    if let (Some(city), Some(count)) = (&metrics.top_city, metrics.top_city_count) {
        println!(
            "  Cities:      {} ({} leads with {})",
            metrics.cities.to_string().white().bold(),
            city,
            format::group_thousands(count as u64)
        );
    }
}

fn render_section(dataset: &Dataset, section: Section) {
    println!("{}", section.title().yellow().bold());
    match section {
        Section::Cuisines => render_cuisines(dataset),
        Section::Cities => render_cities(dataset),
        Section::Ratings => render_ratings(dataset),
        Section::Prices => render_prices(dataset),
        Section::Localities => render_localities(dataset),
        Section::ValuePoints => render_value_points(dataset),
    }
}

fn render_cuisines(dataset: &Dataset) {
    let max = dataset.cuisines.iter().map(|c| c.restaurants).max().unwrap_or(0);
    for cuisine in &dataset.cuisines {
        println!(
            "  {:<14} {} {:>6}  {:>5}  {:>6}  {:>6}  {}",
            cuisine.name,
            bar(cuisine.restaurants, max).cyan(),
            format::group_thousands(cuisine.restaurants as u64),
            format::rating(cuisine.avg_rating),
            format::percentage(cuisine.market_share),
            format::currency(cuisine.avg_cost as u64),
            badge(RatingClass::for_rating(cuisine.avg_rating))
        );
    }
}

fn render_cities(dataset: &Dataset) {
    let total: u32 = dataset.cities.iter().map(|c| c.count).sum();
    for city in &dataset.cities {
        let share = if total == 0 {
            0.0
        } else {
            city.count as f64 * 100.0 / total as f64
        };
        println!(
            "  {:<12} {:>6} restaurants  {:>6}  {:>5}  {} localities",
            city.name,
            format::group_thousands(city.count as u64),
            format::percentage(share),
            format::rating(city.avg_rating),
            city.localities
        );
    }
}

fn render_ratings(dataset: &Dataset) {
    let max = dataset
        .rating_distribution
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for bucket in &dataset.rating_distribution {
        println!(
            "  {:<22} {} {:>6}  {:>5}",
            bucket.label,
            bar(bucket.count, max).cyan(),
            format::group_thousands(bucket.count as u64),
            format::percentage(bucket.percentage)
        );
    }
}

fn render_prices(dataset: &Dataset) {
    for segment in &dataset.price_segments {
        println!(
            "  {:<24} {:>6} restaurants  {:>5}  {:>5}",
            segment.segment,
            format::group_thousands(segment.count as u64),
            format::rating(segment.avg_rating),
            format::percentage(segment.percentage)
        );
    }
}

fn render_localities(dataset: &Dataset) {
    for locality in &dataset.localities {
        println!(
            "  {:<20} {:<12} {:>4}  {:>4} restaurants  [{}]  {}",
            locality.locality,
            locality.city,
            format::rating(locality.avg_rating),
            locality.restaurants,
            locality.area_type,
            badge(RatingClass::for_rating(locality.avg_rating))
        );
    }
}

fn render_value_points(dataset: &Dataset) {
    for point in &dataset.value_points {
        println!(
            "  {:>7}  rating {:>4}  {:>4} restaurants  {}",
            format::currency(point.cost as u64),
            format::rating(point.rating),
            point.restaurants,
            point.category
        );
    }
}

/// Scaled block bar in the style of a progress bar.
fn bar(count: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count as usize * BAR_WIDTH) / max as usize
    };
    "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled)
}

/// Color a rating badge by its variant.
fn badge(class: RatingClass) -> ColoredString {
    match class.badge() {
        BadgeVariant::Default => class.label().green(),
        BadgeVariant::Secondary => class.label().blue(),
        BadgeVariant::Destructive => class.label().red(),
    }
}

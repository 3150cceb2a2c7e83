use voiranime_core::VoiranimeScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clearance = std::env::var("VOIRANIME_CLEARANCE").unwrap_or_default();
    let scraper = VoiranimeScraper::new(&clearance)?;

    println!("🔍 Dernières sorties...\n");

    let recent = scraper.get_recent_episodes().await?;
    for (i, entry) in recent.iter().enumerate() {
        println!(
            "  {}. {} (note {:.2}) - {}",
            i + 1,
            entry,
            entry.anime_rating,
            entry.episode_publish_time
        );
    }

    println!("\n📺 Détail de 'one-piece'...\n");

    let anime = scraper.get_anime("one-piece").await?;
    println!("Titre: {}", anime);
    if let Some(english) = &anime.english_title {
        println!("Titre anglais: {}", english);
    }
    if let Some(rating) = anime.rating {
        println!("Note: {:.2}", rating);
    }
    if let Some(status) = &anime.status {
        println!("Statut: {}", status);
    }
    if let Some(genres) = &anime.genres {
        println!("Genres: {}", genres.join(", "));
    }
    println!("Synopsis: {}", anime.synopsis);

    println!("\n🎬 {} épisodes:", anime.episodes.len());
    for episode in anime.episodes.iter().take(10) {
        println!("  {} [{}]", episode, episode.publish_time);
    }

    Ok(())
}

use anyhow::Result;
use clap::Parser;

mod catalog;
mod models;
mod playlist;


use crate::catalog::{CatalogProvider, JsonCatalog};
use crate::playlist::{EventRequest, PlaylistGenerator};

#[derive(Parser)]
#[command(name = "event-playlist-generator")]
#[command(about = "Event playlist generator for a static song catalog")]
#[command(version)]
struct Args {
    /// Path to the song catalog JSON file
    #[arg(short = 's', long = "catalog", default_value = "songs_data.json")]
    catalog_file: String,

    /// Path to the generation request JSON file
    #[arg(short = 'c', long = "requests", default_value = "requests.json")]
    requests_file: String,

    /// Debug mode - print the full track listing of every playlist
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Quiet mode - reduce output verbosity
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate that both input files exist before doing any work
    for (path, flag) in [
        (&args.catalog_file, "--catalog"),
        (&args.requests_file, "--requests"),
    ] {
        if !std::path::Path::new(path).exists() {
            eprintln!("Error: input file '{path}' not found.");
            eprintln!("Please ensure the file exists or specify a different file with {flag}.");
            return Err(anyhow::anyhow!("Input file '{}' not found", path));
        }
    }

    // Load the song catalog; malformed rows are rejected during loading
    let provider = JsonCatalog::new(&args.catalog_file, args.quiet);
    let catalog = provider.load_catalog()?;
    println!("Loaded {} catalog songs.", catalog.len());

    if !args.quiet {
        println!("\nSample of catalog songs:");
        for song in &catalog[..std::cmp::min(3, catalog.len())] {
            println!("- {} by {} [{}]", song.track_name, song.artists, song.album_name);
            println!(
                "  Genre: {} | Popularity: {} | Tempo: {:.1} bpm | Duration: {}:{:02}",
                song.track_genre,
                song.popularity,
                song.tempo,
                song.duration_ms / 60_000,
                (song.duration_ms % 60_000) / 1000,
            );
        }
    }

    // Load generation requests from the JSON request file
    println!("\nLoading generation requests from: {}", args.requests_file);
    let requests = match EventRequest::load_all_from_file(&args.requests_file) {
        Ok(requests) => {
            println!("Loaded {} generation requests", requests.len());
            requests
        }
        Err(e) => {
            eprintln!("Failed to load generation requests: {e}");
            return Err(anyhow::anyhow!("Failed to load generation requests: {}", e));
        }
    };

    // Generate one playlist per request
    println!("\nGenerating playlists...");
    let playlists: Vec<_> = requests
        .into_iter()
        .map(|request| PlaylistGenerator::new(request).generate(&catalog))
        .collect();

    println!("\n=== GENERATION RESULTS ===");
    println!("Generated {} playlists", playlists.len());

    let mut non_empty = 0usize;
    for playlist in &playlists {
        println!("\n{}", playlist.name);
        println!("{}", "=".repeat(playlist.name.len()));

        for warning in &playlist.warnings {
            println!("Warning: {warning}");
        }

        if playlist.songs.is_empty() {
            println!("No songs matched this request.");
            continue;
        }
        non_empty += 1;

        let metadata = &playlist.metadata;
        println!(
            "Songs: {} | Duration: {}m{}s | Avg Tempo: {:.1} bpm | Avg Popularity: {:.1}",
            metadata.total_songs,
            metadata.total_duration_ms / 60_000,
            (metadata.total_duration_ms % 60_000) / 1000,
            metadata.average_tempo,
            metadata.avg_popularity,
        );
        println!(
            "Unique Artists: {} | Tempo Range: {:.0}-{:.0} bpm",
            metadata.artist_count, metadata.tempo_range.0, metadata.tempo_range.1,
        );

        if !metadata.segment_counts.is_empty() {
            let segments: Vec<String> = metadata
                .segment_counts
                .iter()
                .map(|(label, count)| format!("{label} ({count})"))
                .collect();
            println!("Segments: {}", segments.join(", "));
        }

        // Show top genres
        let mut top_genres: Vec<_> = metadata.genre_distribution.iter().collect();
        top_genres.sort_by(|a, b| b.1.cmp(a.1));
        if !top_genres.is_empty() {
            let top_3: Vec<String> = top_genres
                .iter()
                .take(3)
                .map(|(genre, count)| format!("{genre} ({count})"))
                .collect();
            println!("Top Genres: {}", top_3.join(", "));
        }

        if args.debug {
            println!("\nTrack listing:");
            for (i, selected) in playlist.songs.iter().enumerate() {
                let song = &selected.song;
                println!(
                    "  {}. [{}] \"{}\" by {} | {} | pop {} | {:.1} bpm | {}:{:02}",
                    i + 1,
                    selected.segment,
                    song.track_name,
                    song.artists,
                    song.track_genre,
                    song.popularity,
                    song.tempo,
                    song.duration_ms / 60_000,
                    (song.duration_ms % 60_000) / 1000,
                );
            }
        }
    }

    // Summary suitable for cron job monitoring
    println!("\n=== GENERATION SUMMARY ===");
    println!("{non_empty}/{} playlists have songs", playlists.len());

    if non_empty == 0 && !playlists.is_empty() {
        return Err(anyhow::anyhow!("No playlists could be populated"));
    }

    Ok(())
}

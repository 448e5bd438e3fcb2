//! solfa CLI: bridge demo driver.
//!
//! Commands:
//!   solfa demo                 Run the scripted bridge demo (default)
//!   solfa play <title> <file>  Play one song through the selected backend
//!   solfa dump                 Print the demo playlist as JSON
//!
//! Backend selection for `play`: SOLFA_BACKEND=windows|linux|null,
//! defaulting to the detected OS.

use std::sync::Arc;

use solfa_core::{
    backend_by_name, default_backend, AudioBackend, LinuxBackend, MusicPlayer, Playlist,
    RefinedMusicPlayer, Song, User, WindowsBackend,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("demo") => run_demo(),
        Some("play") => cmd_play(&args[1..]),
        Some("dump") => cmd_dump(),
        Some(other) => {
            eprintln!("unknown command: {}", other);
            print_usage();
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// The scripted trace: one playlist, two platform backends, the refined
/// controls, the documented unsupported-format gap, and the user summary.
fn run_demo() {
    println!("[Detected OS: {}]\n", std::env::consts::OS);

    println!("=======================================");
    println!("===   Music Player Demo (Bridge)    ===");
    println!("=======================================\n");

    let playlist = demo_playlist();
    let wav = playlist.songs()[1].clone();
    let playlist = playlist.into_shared();

    let mut user = User::new("Alice", "alice@example.com");
    user.add_playlist(playlist.clone());

    // Normal playback on the Windows implementation.
    let windows_impl: Arc<dyn AudioBackend> = Arc::new(WindowsBackend);
    let mut player = MusicPlayer::new(playlist.clone(), windows_impl);

    println!(">>> Normal Operations (portable across OS) <<<\n");
    player.play();
    player.pause();
    player.play_song(&wav);
    player.play();

    // Same call sequence, implementation switched at runtime.
    println!("\n>>> Switching Implementation to Linux <<<");
    let linux_impl: Arc<dyn AudioBackend> = Arc::new(LinuxBackend);
    let mut linux_player = MusicPlayer::new(playlist.clone(), linux_impl);

    linux_player.play();
    linux_player.pause();

    // Refined controls on the extended player.
    println!("\n>>> Refined Player (shuffle / seek / speed) <<<");
    let mut refined = RefinedMusicPlayer::new(playlist.clone(), Arc::new(LinuxBackend));
    refined.shuffle();
    refined.seek(42);
    refined.set_playback_speed(1.5);

    // The known gap: recognized as unsupported, warned about, and still
    // handed to the backend unchanged.
    println!("\n=======================================");
    println!("===   Remaining Issue: Unsupported  ===");
    println!("=======================================\n");

    println!(">>> Case: Unsupported format (.aac / .flac) <<<");
    let aac = Song::new("AAC Track", "song4.aac");
    let flac = Song::new("FLAC Track", "song5.flac");
    {
        let mut guard = playlist.lock();
        guard.add_song(aac.clone());
        guard.add_song(flac.clone());
    }
    for song in [&aac, &flac] {
        if let Err(e) = player.check_format(song) {
            println!("warning: {}; playing anyway", e);
        }
        player.play_song(song);
    }

    // Summary.
    println!("\n=======================================");
    println!("===        User Playlists           ===");
    println!("=======================================\n");
    println!("User {} owns playlists:", user.name());
    for shared in user.playlists() {
        let guard = shared.lock();
        println!(" - {}", guard.name());
        for song in guard.songs() {
            println!("    * {}", song);
        }
    }

    println!("\n=== End of Bridge Demo ===");
}

/// Play a single song through the backend chosen by SOLFA_BACKEND.
fn cmd_play(args: &[String]) {
    if args.len() < 2 {
        eprintln!("usage: solfa play <title> <file>");
        return;
    }
    let song = Song::new(args[0].as_str(), args[1].as_str());

    let backend = match std::env::var("SOLFA_BACKEND") {
        Ok(name) => match backend_by_name(&name) {
            Some(backend) => backend,
            None => {
                eprintln!("unknown backend: {} (expected windows, linux or null)", name);
                return;
            }
        },
        Err(_) => default_backend(),
    };

    let mut playlist = Playlist::new("Ad hoc");
    playlist.add_song(song);

    let mut player = MusicPlayer::new(playlist.into_shared(), backend);
    player.play();
    log::debug!("solfa: state after play: {:?}", player.state());
}

/// Print the demo playlist as JSON.
fn cmd_dump() {
    match serde_json::to_string_pretty(&demo_playlist()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("serialize failed: {}", e),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn demo_playlist() -> Playlist {
    let mut playlist = Playlist::new("Bridge Playlist");
    playlist.add_song(Song::new("Song One (MP3)", "song1.mp3"));
    playlist.add_song(Song::new("Song Two (WAV)", "song2.wav"));
    playlist
}

fn print_usage() {
    println!("solfa - bridge-pattern music player demo");
    println!();
    println!("usage: solfa <command> [args]");
    println!();
    println!("commands:");
    println!("  demo                   Run the scripted bridge demo (default)");
    println!("  play <title> <file>    Play one song through the selected backend");
    println!("  dump                   Print the demo playlist as JSON");
    println!();
    println!("environment:");
    println!("  SOLFA_BACKEND          windows | linux | null (play command)");
    println!("  RUST_LOG               log filter, e.g. solfa_core=debug");
}
